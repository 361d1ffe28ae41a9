//! The live filter
//!
//! [`LiveFilter`] binds one [`FilterInput`] to a fixed collection of
//! [`Candidate`]s. Every key-up re-evaluates every candidate against the
//! input's current value; nothing is diffed or cached between keystrokes.
//!
//! ## Example
//!
//! ```
//! use livefilter_core::{FilterOptions, Key, LiveFilter, MemoryInput, TextCandidate};
//!
//! let candidates = ["web01.example.com", "db02.example.com"].map(TextCandidate::new);
//! let mut filter = LiveFilter::attach(MemoryInput::new(), candidates, FilterOptions::default());
//!
//! filter.input_mut().type_text("db");
//! filter.handle_key_up(Key::Other(66));
//! assert_eq!(filter.visible_count(), 1);
//!
//! filter.handle_key_up(Key::Escape);
//! assert_eq!(filter.visible_count(), 2);
//! ```

use crate::candidate::Candidate;
use crate::error::PatternError;
use crate::input::FilterInput;
use crate::key::Key;
use crate::pattern::{InvalidPatternPolicy, Pattern};
use crate::{debug_log, warn_log};

/// Per-filter behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
	/// How raw values that are not valid regexes are handled.
	pub invalid_pattern: InvalidPatternPolicy,
}

impl FilterOptions {
	/// Sets the invalid pattern policy.
	pub fn invalid_pattern(mut self, policy: InvalidPatternPolicy) -> Self {
		self.invalid_pattern = policy;
		self
	}
}

/// What a single recompute did.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
	/// Visibility was recomputed from a pattern.
	Applied {
		/// Candidates left visible.
		visible: usize,
		/// All candidates.
		total: usize,
	},
	/// The filter was cleared and every candidate shown.
	Cleared {
		/// All candidates, now all visible.
		total: usize,
	},
	/// The pattern did not compile; no candidate was touched.
	Rejected {
		/// Why the pattern was rejected.
		error: PatternError,
	},
}

impl FilterOutcome {
	/// The number of visible candidates, if visibility was recomputed.
	pub fn visible(&self) -> Option<usize> {
		match self {
			Self::Applied { visible, .. } => Some(*visible),
			Self::Cleared { total } => Some(*total),
			Self::Rejected { .. } => None,
		}
	}

	/// Returns true if the pattern was rejected.
	pub fn is_rejected(&self) -> bool {
		matches!(self, Self::Rejected { .. })
	}
}

/// Keeps candidate visibility in step with a filter input.
#[derive(Debug)]
pub struct LiveFilter<I, C> {
	input: I,
	candidates: Vec<C>,
	options: FilterOptions,
}

impl<I, C> LiveFilter<I, C>
where
	I: FilterInput,
	C: Candidate,
{
	/// Creates a filter without touching the input or any candidate.
	pub fn new(input: I, candidates: impl IntoIterator<Item = C>, options: FilterOptions) -> Self {
		Self {
			input,
			candidates: candidates.into_iter().collect(),
			options,
		}
	}

	/// Creates a filter and reveals its input.
	///
	/// The input stays hidden until this runs so a page whose filter never
	/// attaches does not show a control that does nothing.
	pub fn attach(
		mut input: I,
		candidates: impl IntoIterator<Item = C>,
		options: FilterOptions,
	) -> Self {
		input.reveal();
		let filter = Self::new(input, candidates, options);
		debug_log!("Live filter attached over {} candidates", filter.len());
		filter
	}

	/// Entry point for every key-up on the input.
	pub fn handle_key_up(&mut self, key: Key) -> FilterOutcome {
		if key.is_escape() {
			return self.clear();
		}
		self.refresh()
	}

	/// Recomputes visibility from the input's current value.
	pub fn refresh(&mut self) -> FilterOutcome {
		let raw = self.input.value();
		self.recompute(&raw)
	}

	/// Recomputes visibility of every candidate against `raw`.
	pub fn recompute(&mut self, raw: &str) -> FilterOutcome {
		match Pattern::with_policy(raw, self.options.invalid_pattern) {
			Ok(pattern) => {
				let visible = self.apply(&pattern);
				FilterOutcome::Applied {
					visible,
					total: self.candidates.len(),
				}
			}
			Err(error) => {
				warn_log!("{}", error);
				FilterOutcome::Rejected { error }
			}
		}
	}

	/// Shows exactly the candidates matching `pattern` and returns how many that is.
	pub fn apply(&mut self, pattern: &Pattern) -> usize {
		let mut visible = 0;
		for candidate in &mut self.candidates {
			let matched = pattern.is_match(&candidate.text());
			candidate.set_visible(matched);
			if matched {
				visible += 1;
			}
		}
		visible
	}

	/// The Escape gesture: empty the input, show everything, drop focus.
	pub fn clear(&mut self) -> FilterOutcome {
		self.input.set_value("");
		let total = self.apply(&Pattern::match_all());
		self.input.blur();
		FilterOutcome::Cleared { total }
	}

	/// Number of currently visible candidates.
	pub fn visible_count(&self) -> usize {
		self.candidates.iter().filter(|c| c.is_visible()).count()
	}

	/// Number of candidates.
	pub fn len(&self) -> usize {
		self.candidates.len()
	}

	/// Returns true if there is nothing to filter.
	pub fn is_empty(&self) -> bool {
		self.candidates.is_empty()
	}

	/// The candidates, in page order.
	pub fn candidates(&self) -> &[C] {
		&self.candidates
	}

	/// The bound input.
	pub fn input(&self) -> &I {
		&self.input
	}

	/// Mutable access to the bound input.
	pub fn input_mut(&mut self) -> &mut I {
		&mut self.input
	}

	/// The options this filter was built with.
	pub fn options(&self) -> FilterOptions {
		self.options
	}

	/// Splits the filter back into its input and candidates.
	pub fn into_parts(self) -> (I, Vec<C>) {
		(self.input, self.candidates)
	}
}

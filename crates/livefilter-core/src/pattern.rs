//! Filter patterns
//!
//! A [`Pattern`] is rebuilt from the filter input's raw value on every
//! keystroke. The raw value is handed to the regex engine as-is, so power
//! users can type `^web|^db` and get alternation. Matching is
//! case-insensitive and unanchored.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::PatternError;

/// What to do when the raw value does not compile as a regular expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidPatternPolicy {
	/// Leave every candidate as it was after the previous keystroke.
	#[default]
	KeepPrevious,
	/// Match the raw value as a case-insensitive literal substring instead.
	Literal,
}

#[derive(Debug, Clone)]
enum Matcher {
	Any,
	Regex(Regex),
}

/// A compiled, case-insensitive filter pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
	raw: String,
	matcher: Matcher,
	literal: bool,
}

impl Pattern {
	/// Compiles `raw` as a case-insensitive regular expression.
	///
	/// The empty string compiles to a pattern that matches every text.
	///
	/// # Examples
	///
	/// ```
	/// use livefilter_core::Pattern;
	///
	/// let pattern = Pattern::compile("^DB").unwrap();
	/// assert!(pattern.is_match("db02.example.com"));
	/// assert!(!pattern.is_match("web01.example.com"));
	/// assert!(Pattern::compile("(").is_err());
	/// ```
	pub fn compile(raw: &str) -> Result<Self, PatternError> {
		if raw.is_empty() {
			return Ok(Self::match_all());
		}
		let regex = build(raw).map_err(|source| PatternError::Invalid {
			pattern: raw.to_string(),
			source,
		})?;
		Ok(Self {
			raw: raw.to_string(),
			matcher: Matcher::Regex(regex),
			literal: false,
		})
	}

	/// Builds a pattern matching `raw` literally, ignoring case.
	///
	/// # Examples
	///
	/// ```
	/// use livefilter_core::Pattern;
	///
	/// let pattern = Pattern::literal("web(").unwrap();
	/// assert!(pattern.is_match("WEB(01)"));
	/// assert!(pattern.is_literal());
	/// ```
	pub fn literal(raw: &str) -> Result<Self, PatternError> {
		if raw.is_empty() {
			return Ok(Self::match_all());
		}
		let regex = build(&regex::escape(raw)).map_err(|source| PatternError::Invalid {
			pattern: raw.to_string(),
			source,
		})?;
		Ok(Self {
			raw: raw.to_string(),
			matcher: Matcher::Regex(regex),
			literal: true,
		})
	}

	/// Compiles `raw`, falling back according to `policy` when it is not a valid regex.
	///
	/// Under [`InvalidPatternPolicy::KeepPrevious`] the compile error is returned
	/// so the caller can leave visibility untouched.
	pub fn with_policy(raw: &str, policy: InvalidPatternPolicy) -> Result<Self, PatternError> {
		match Self::compile(raw) {
			Ok(pattern) => Ok(pattern),
			Err(error) => match policy {
				InvalidPatternPolicy::KeepPrevious => Err(error),
				InvalidPatternPolicy::Literal => Self::literal(raw).map_err(|_| error),
			},
		}
	}

	/// A pattern that matches every text, as the empty input does.
	pub fn match_all() -> Self {
		Self {
			raw: String::new(),
			matcher: Matcher::Any,
			literal: false,
		}
	}

	/// Returns true if `text` contains a match anywhere.
	pub fn is_match(&self, text: &str) -> bool {
		match &self.matcher {
			Matcher::Any => true,
			Matcher::Regex(regex) => regex.is_match(text),
		}
	}

	/// The raw value this pattern was built from.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Returns true if this pattern matches everything.
	pub fn is_empty(&self) -> bool {
		matches!(self.matcher, Matcher::Any)
	}

	/// Returns true if the raw value was escaped rather than read as regex syntax.
	pub fn is_literal(&self) -> bool {
		self.literal
	}
}

fn build(source: &str) -> Result<Regex, regex::Error> {
	RegexBuilder::new(source).case_insensitive(true).build()
}

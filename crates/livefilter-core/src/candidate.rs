//! Candidates: the list items or table rows a filter shows and hides.

use std::borrow::Cow;

/// An element eligible to be shown or hidden by a [`LiveFilter`](crate::LiveFilter).
///
/// Implementations must only toggle visibility. Reordering or cloning the
/// underlying element would break any sort state kept by the page's sorter.
pub trait Candidate {
	/// The full rendered text used for matching.
	fn text(&self) -> Cow<'_, str>;

	/// Whether the candidate is currently shown.
	fn is_visible(&self) -> bool;

	/// Shows or hides the candidate.
	fn set_visible(&mut self, visible: bool);
}

/// A candidate held entirely in memory.
///
/// Used for native rendering paths and tests, where no DOM exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCandidate {
	text: String,
	visible: bool,
}

impl TextCandidate {
	/// Creates a visible candidate.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			visible: true,
		}
	}

	/// Creates a hidden candidate.
	pub fn hidden(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			visible: false,
		}
	}
}

impl Candidate for TextCandidate {
	fn text(&self) -> Cow<'_, str> {
		Cow::Borrowed(&self.text)
	}

	fn is_visible(&self) -> bool {
		self.visible
	}

	fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}
}

impl<C: Candidate + ?Sized> Candidate for Box<C> {
	fn text(&self) -> Cow<'_, str> {
		(**self).text()
	}

	fn is_visible(&self) -> bool {
		(**self).is_visible()
	}

	fn set_visible(&mut self, visible: bool) {
		(**self).set_visible(visible);
	}
}

//! Key-up protocol
//!
//! Escape clears the filter. Enter is recognized but behaves like every
//! other key: it just triggers a recompute.

/// Legacy `keyCode` of the Escape key.
pub const ESCAPE_KEY_CODE: u32 = 27;

/// Legacy `keyCode` of the Enter key.
pub const ENTER_KEY_CODE: u32 = 13;

/// A released key, as far as the filter cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	/// Clears the filter and drops focus.
	Escape,
	/// Recomputes, like any other key.
	Enter,
	/// Any other key, by legacy key code.
	Other(u32),
}

impl Key {
	/// Maps a legacy `keyCode`.
	pub fn from_code(code: u32) -> Self {
		match code {
			ESCAPE_KEY_CODE => Self::Escape,
			ENTER_KEY_CODE => Self::Enter,
			other => Self::Other(other),
		}
	}

	/// Maps a `KeyboardEvent.key` name, using `code` when the name is not special.
	pub fn from_event(name: &str, code: u32) -> Self {
		match name {
			"Escape" | "Esc" => Self::Escape,
			"Enter" => Self::Enter,
			_ => Self::from_code(code),
		}
	}

	/// The legacy key code.
	pub fn code(&self) -> u32 {
		match self {
			Self::Escape => ESCAPE_KEY_CODE,
			Self::Enter => ENTER_KEY_CODE,
			Self::Other(code) => *code,
		}
	}

	/// Returns true for Escape.
	pub fn is_escape(&self) -> bool {
		matches!(self, Self::Escape)
	}
}

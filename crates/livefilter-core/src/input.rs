//! The text control a filter reads its pattern from.

/// A filter input control.
pub trait FilterInput {
	/// The current value typed by the user.
	fn value(&self) -> String;

	/// Replaces the current value.
	fn set_value(&mut self, value: &str);

	/// Makes the control visible by dropping the hidden state of its wrapper.
	fn reveal(&mut self);

	/// Removes keyboard focus from the control.
	fn blur(&mut self);
}

/// A filter input held in memory, for native use and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryInput {
	value: String,
	revealed: bool,
	focused: bool,
}

impl MemoryInput {
	/// Creates an empty, hidden, unfocused input.
	pub fn new() -> Self {
		Self::default()
	}

	/// Gives the input keyboard focus.
	pub fn focus(&mut self) {
		self.focused = true;
	}

	/// Focuses the input and appends `text`, as a user typing would.
	pub fn type_text(&mut self, text: &str) {
		self.focused = true;
		self.value.push_str(text);
	}

	/// Returns true once [`FilterInput::reveal`] has run.
	pub fn is_revealed(&self) -> bool {
		self.revealed
	}

	/// Returns true while the input holds keyboard focus.
	pub fn is_focused(&self) -> bool {
		self.focused
	}
}

impl FilterInput for MemoryInput {
	fn value(&self) -> String {
		self.value.clone()
	}

	fn set_value(&mut self, value: &str) {
		self.value = value.to_string();
	}

	fn reveal(&mut self) {
		self.revealed = true;
	}

	fn blur(&mut self) {
		self.focused = false;
	}
}

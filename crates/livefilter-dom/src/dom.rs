//! DOM-backed candidates and filter inputs

use std::borrow::Cow;

use livefilter_core::{Candidate, FilterInput, warn_log};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::error::{AttachError, describe};

const DISPLAY: &str = "display";
const NONE: &str = "none";

/// A list item or table row on the page.
///
/// Hidden candidates get an inline `display: none`; showing one removes the
/// inline property so the stylesheet's display applies again. The element
/// itself is never moved or cloned.
#[derive(Debug, Clone)]
pub struct DomCandidate {
	element: HtmlElement,
}

impl DomCandidate {
	/// Wraps an element.
	pub fn new(element: HtmlElement) -> Self {
		Self { element }
	}

	/// The wrapped element.
	pub fn element(&self) -> &HtmlElement {
		&self.element
	}
}

impl Candidate for DomCandidate {
	fn text(&self) -> Cow<'_, str> {
		Cow::Owned(self.element.text_content().unwrap_or_default())
	}

	fn is_visible(&self) -> bool {
		self.element
			.style()
			.get_property_value(DISPLAY)
			.map(|display| display != NONE)
			.unwrap_or(true)
	}

	fn set_visible(&mut self, visible: bool) {
		let style = self.element.style();
		let result = if visible {
			style.remove_property(DISPLAY).map(|_| ())
		} else {
			style.set_property(DISPLAY, NONE)
		};
		if let Err(error) = result {
			warn_log!("Failed to update candidate visibility: {}", describe(&error));
		}
	}
}

/// A filter `<input>` on the page.
#[derive(Debug, Clone)]
pub struct DomFilterInput {
	element: HtmlInputElement,
	hidden_class: String,
}

impl DomFilterInput {
	/// Wraps an input whose wrapper is hidden with `hidden_class`.
	pub fn new(element: HtmlInputElement, hidden_class: impl Into<String>) -> Self {
		Self {
			element,
			hidden_class: hidden_class.into(),
		}
	}

	/// The wrapped element.
	pub fn element(&self) -> &HtmlInputElement {
		&self.element
	}
}

impl FilterInput for DomFilterInput {
	fn value(&self) -> String {
		self.element.value()
	}

	fn set_value(&mut self, value: &str) {
		self.element.set_value(value);
	}

	fn reveal(&mut self) {
		// Only a wrapping div carries the hidden state.
		let Some(wrapper) = self.element.parent_element() else {
			return;
		};
		if !wrapper.tag_name().eq_ignore_ascii_case("div") {
			return;
		}
		if let Err(error) = wrapper.class_list().remove_1(&self.hidden_class) {
			warn_log!("Failed to reveal filter input: {}", describe(&error));
		}
	}

	fn blur(&mut self) {
		if let Err(error) = self.element.blur() {
			warn_log!("Failed to blur filter input: {}", describe(&error));
		}
	}
}

/// Collects every element matching `selector` that casts to `T`.
///
/// Elements of another type are skipped; an invalid selector is an error.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, AttachError> {
	let nodes = document
		.query_selector_all(selector)
		.map_err(|error| AttachError::Selector {
			selector: selector.to_string(),
			reason: describe(&error),
		})?;

	let mut found = Vec::with_capacity(nodes.length() as usize);
	for index in 0..nodes.length() {
		if let Some(element) = nodes
			.get(index)
			.and_then(|node| node.dyn_into::<Element>().ok())
			.and_then(|element| element.dyn_into::<T>().ok())
		{
			found.push(element);
		}
	}
	Ok(found)
}

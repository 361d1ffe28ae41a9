//! Binding live filters to filter inputs on the page
//!
//! Each input matched by a view's input selector gets its own
//! [`LiveFilter`] over every candidate of that view, and a `keyup` listener
//! that drives it. Filters live as long as the page; listeners are never
//! removed.

use std::cell::RefCell;
use std::rc::Rc;

use livefilter_core::{
	FilterConfig, FilterInput, FilterView, Key, LiveFilter, debug_log, info_log, warn_log,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::dom::{DomCandidate, DomFilterInput, query_all};
use crate::error::{AttachError, describe};

/// A live filter over DOM elements.
pub type DomLiveFilter = LiveFilter<DomFilterInput, DomCandidate>;

/// A filter shared with its `keyup` listener.
pub type SharedFilter = Rc<RefCell<DomLiveFilter>>;

const KEYUP: &str = "keyup";

/// Attaches a filter to every input of `view`.
///
/// Returns an empty list, not an error, when the page has no such input.
pub fn attach_view(
	document: &Document,
	view: FilterView,
	config: &FilterConfig,
) -> Result<Vec<SharedFilter>, AttachError> {
	let inputs: Vec<HtmlInputElement> = query_all(document, &config.input_selector)?;
	if inputs.is_empty() {
		debug_log!("No {} filter input on this page", view.name());
		return Ok(Vec::new());
	}

	let candidates: Vec<DomCandidate> = query_all::<HtmlElement>(document, &config.candidate_selector)?
		.into_iter()
		.map(DomCandidate::new)
		.collect();

	let mut attached = Vec::with_capacity(inputs.len());
	for element in inputs {
		let input = DomFilterInput::new(element.clone(), config.hidden_class.clone());
		let filter = Rc::new(RefCell::new(LiveFilter::new(
			input,
			candidates.clone(),
			config.options(),
		)));
		listen(&element, Rc::clone(&filter))?;
		// Reveal only a control that is already listening.
		filter.borrow_mut().input_mut().reveal();
		attached.push(filter);
	}

	info_log!(
		"Attached {} {} filter(s) over {} candidates",
		attached.len(),
		view.name(),
		candidates.len()
	);
	Ok(attached)
}

fn listen(element: &HtmlInputElement, filter: SharedFilter) -> Result<(), AttachError> {
	let handler = Closure::wrap(Box::new(move |event: Event| {
		let key = key_of(&event);
		// Event dispatch is serialized, so the borrow is always free.
		match filter.try_borrow_mut() {
			Ok(mut filter) => {
				filter.handle_key_up(key);
			}
			Err(_) => warn_log!("Live filter busy, dropping key-up"),
		}
	}) as Box<dyn FnMut(_)>);

	element
		.add_event_listener_with_callback(KEYUP, handler.as_ref().unchecked_ref())
		.map_err(|error| AttachError::Listener {
			event_type: KEYUP.to_string(),
			reason: describe(&error),
		})?;
	// Filters live as long as the page.
	handler.forget();
	Ok(())
}

fn key_of(event: &Event) -> Key {
	match event.dyn_ref::<KeyboardEvent>() {
		Some(keyboard) => Key::from_event(&keyboard.key(), keyboard.key_code()),
		None => Key::Other(0),
	}
}

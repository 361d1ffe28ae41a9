//! Bridge to the page's table sorter
//!
//! The sorter is plain JavaScript supplied by the page. It is handed over as
//! a function `(selector, options)`, for example a thin wrapper around a
//! jQuery plugin:
//!
//! ```js
//! (selector, options) => jQuery(selector).tablesorter(options)
//! ```

use js_sys::{Function, JSON, Reflect};
use livefilter_core::{SortConfigurator, SortError, TableSortConfig};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::describe;

/// A [`SortConfigurator`] calling a JS function per table.
#[derive(Debug, Clone)]
pub struct JsSortConfigurator {
	configure: Function,
}

impl JsSortConfigurator {
	/// Wraps a `(selector, options)` function.
	pub fn new(configure: Function) -> Self {
		Self { configure }
	}

	/// Looks up a function stored under `name` on the global object.
	pub fn from_global(name: &str) -> Option<Self> {
		let value = Reflect::get(&js_sys::global(), &JsValue::from_str(name)).ok()?;
		value.dyn_into::<Function>().ok().map(Self::new)
	}
}

impl SortConfigurator for JsSortConfigurator {
	fn configure(&self, table: &TableSortConfig) -> Result<(), SortError> {
		let rejected = |error: JsValue| SortError::Rejected {
			selector: table.selector.clone(),
			reason: describe(&error),
		};
		let options = serde_json::to_string(&table.sorter_options())?;
		let options = JSON::parse(&options).map_err(rejected)?;
		self.configure
			.call2(&JsValue::NULL, &JsValue::from_str(&table.selector), &options)
			.map_err(rejected)?;
		Ok(())
	}
}

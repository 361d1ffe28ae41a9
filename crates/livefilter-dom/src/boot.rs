//! Page boot
//!
//! Once the document is parsed: hand the sortable tables to the page's
//! sorter, then attach the list and table filters.

use livefilter_core::{
	DashboardConfig, FilterView, SortConfigurator, configure_tables, error_log, info_log,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::attach::{SharedFilter, attach_view};
use crate::error::{AttachError, describe};
use crate::sorter::JsSortConfigurator;

/// What a boot attached.
#[derive(Debug, Default)]
pub struct BootReport {
	/// Filters bound to list views.
	pub list_filters: Vec<SharedFilter>,
	/// Filters bound to table views.
	pub table_filters: Vec<SharedFilter>,
	/// Sortable table configurations the sorter accepted.
	pub sorted_tables: usize,
}

impl BootReport {
	/// Total number of attached filters.
	pub fn filter_count(&self) -> usize {
		self.list_filters.len() + self.table_filters.len()
	}
}

/// Configures sortable tables and attaches every filter on `document`.
///
/// A view whose selectors fail is logged and skipped so the other view still
/// works.
pub fn boot(
	document: &Document,
	config: &DashboardConfig,
	sorter: Option<&dyn SortConfigurator>,
) -> BootReport {
	let mut report = BootReport::default();
	if let Some(sorter) = sorter {
		report.sorted_tables = configure_tables(sorter, &config.sortable_tables);
	}

	for view in FilterView::ALL {
		let filters = match attach_view(document, view, config.view(view)) {
			Ok(filters) => filters,
			Err(error) => {
				error_log!("Skipping {} filters: {}", view.name(), error);
				Vec::new()
			}
		};
		match view {
			FilterView::List => report.list_filters = filters,
			FilterView::Table => report.table_filters = filters,
		}
	}

	info_log!(
		"Live filters ready: {} attached, {} tables sortable",
		report.filter_count(),
		report.sorted_tables
	);
	report
}

/// Boots with the default dashboard configuration and no sorter.
#[wasm_bindgen(js_name = startLiveFilters)]
pub fn start() -> Result<(), JsValue> {
	start_with(None, None)
}

/// Boots with an optional JSON configuration and an optional sorter function.
///
/// Runs immediately if the document is already parsed, otherwise on
/// `DOMContentLoaded`.
#[wasm_bindgen(js_name = startLiveFiltersWith)]
pub fn start_with(
	config_json: Option<String>,
	sorter: Option<js_sys::Function>,
) -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let config = match config_json {
		Some(source) => DashboardConfig::from_json(&source).map_err(AttachError::from)?,
		None => DashboardConfig::default(),
	};
	let sorter = sorter.map(JsSortConfigurator::new);

	let document = web_sys::window()
		.ok_or(AttachError::NoWindow)?
		.document()
		.ok_or(AttachError::NoDocument)?;

	on_ready(&document, move |document| {
		boot(
			document,
			&config,
			sorter.as_ref().map(|s| s as &dyn SortConfigurator),
		);
	})
}

/// `Document.readyState` while the parser is still running.
const LOADING: &str = "loading";

const CONTENT_LOADED: &str = "DOMContentLoaded";

/// Runs `f` once the document has been parsed.
pub fn on_ready<F>(document: &Document, f: F) -> Result<(), JsValue>
where
	F: FnOnce(&Document) + 'static,
{
	if document.ready_state() != LOADING {
		f(document);
		return Ok(());
	}
	on_content_loaded(document, f)
}

/// Runs `f` when `document` fires `DOMContentLoaded`.
pub fn on_content_loaded<F>(document: &Document, f: F) -> Result<(), JsValue>
where
	F: FnOnce(&Document) + 'static,
{
	let target = document.clone();
	let handler = Closure::once(move || f(&target));
	document
		.add_event_listener_with_callback(CONTENT_LOADED, handler.as_ref().unchecked_ref())
		.map_err(|error| AttachError::Listener {
			event_type: CONTENT_LOADED.to_string(),
			reason: describe(&error),
		})?;
	handler.forget();
	Ok(())
}

#![cfg(target_arch = "wasm32")]

//! Browser tests for page boot and the sorter bridge

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use livefilter_core::{
	DashboardConfig, FilterConfig, FilterView, SortConfigurator, SortOrder, TableSortConfig,
	dashboard_tables,
};
use livefilter_dom::{JsSortConfigurator, boot, on_content_loaded, on_ready};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Document, Event};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn scoped(view: FilterView, id: &str) -> FilterConfig {
	FilterConfig {
		input_selector: format!("input.filter-{id}"),
		candidate_selector: format!(".searchable.{id} {}", view.candidate_tag()),
		..view.default_config()
	}
}

#[wasm_bindgen_test]
fn test_boot_attaches_both_views_and_sorts_tables() {
	let document = document();
	let root = document.create_element("section").unwrap();
	root.set_inner_html(
		r#"<div class="hide"><input class="filter-bootlist"></div>
		<ul class="searchable bootlist"><li>architecture</li><li>kernel</li></ul>
		<div class="hide"><input class="filter-boottable"></div>
		<table class="searchable boottable"><tr><td>web01</td></tr></table>"#,
	);
	document.body().unwrap().append_child(&root).unwrap();

	let sorter = JsSortConfigurator::new(Function::new_with_args(
		"selector, options",
		"globalThis.__livefilterSorted = (globalThis.__livefilterSorted || []).concat([[selector, JSON.stringify(options)]]);",
	));
	let config = DashboardConfig {
		list: scoped(FilterView::List, "bootlist"),
		table: scoped(FilterView::Table, "boottable"),
		sortable_tables: dashboard_tables(),
	};

	let report = boot(&document, &config, Some(&sorter as &dyn SortConfigurator));

	assert_eq!(report.list_filters.len(), 1);
	assert_eq!(report.table_filters.len(), 1);
	assert_eq!(report.list_filters[0].borrow().len(), 2);
	assert_eq!(report.sorted_tables, 4);

	let sorted: Array = Reflect::get(&js_sys::global(), &JsValue::from_str("__livefilterSorted"))
		.unwrap()
		.into();
	assert_eq!(sorted.length(), 4);
	let first: Array = sorted.get(0).into();
	assert_eq!(first.get(0).as_string().unwrap(), ".nodes");
	assert_eq!(
		first.get(1).as_string().unwrap(),
		r#"{"headers":{"4":{"sorter":false}},"sortList":[[1,0]]}"#
	);
	root.remove();
}

#[wasm_bindgen_test]
fn test_throwing_sorter_is_skipped() {
	let sorter = JsSortConfigurator::new(Function::new_with_args(
		"selector, options",
		"if (selector === '.broken') { throw new Error('no tablesorter'); }",
	));
	let tables = vec![
		TableSortConfig::new(".broken"),
		TableSortConfig::new(".facts").sort_by(SortOrder::ascending(0)),
	];

	let applied = livefilter_core::configure_tables(&sorter, &tables);
	assert_eq!(applied, 1);
	assert!(sorter.configure(&tables[0]).is_err());
}

#[wasm_bindgen_test]
fn test_from_global_requires_function() {
	Reflect::set(
		&js_sys::global(),
		&JsValue::from_str("__livefilterNotAFunction"),
		&JsValue::from_f64(1.0),
	)
	.unwrap();
	assert!(JsSortConfigurator::from_global("__livefilterNotAFunction").is_none());
	assert!(JsSortConfigurator::from_global("__livefilterMissing").is_none());
}

#[wasm_bindgen_test]
fn test_on_ready_runs_immediately_after_load() {
	let ran = Rc::new(Cell::new(false));
	let seen = Rc::new(RefCell::new(None));
	{
		let ran = Rc::clone(&ran);
		let seen = Rc::clone(&seen);
		on_ready(&document(), move |document| {
			ran.set(true);
			*seen.borrow_mut() = document.body().map(|b| b.tag_name());
		})
		.unwrap();
	}
	assert!(ran.get());
	assert_eq!(seen.borrow().as_deref(), Some("BODY"));
}

#[wasm_bindgen_test]
fn test_content_loaded_waits_for_event() {
	let document = document();
	let ran = Rc::new(Cell::new(0));
	{
		let ran = Rc::clone(&ran);
		on_content_loaded(&document, move |_| ran.set(ran.get() + 1)).unwrap();
	}
	assert_eq!(ran.get(), 0);

	let event = Event::new("DOMContentLoaded").unwrap();
	document.dispatch_event(&event).unwrap();
	assert_eq!(ran.get(), 1);
}

#![cfg(target_arch = "wasm32")]

//! Browser tests for DOM-bound live filters
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/livefilter-dom

use livefilter_core::{
	Candidate, FilterConfig, FilterInput, FilterView, InvalidPatternPolicy,
};
use livefilter_dom::{DomCandidate, attach_view};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
	Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit, Node,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Mounts a hidden filter input and a searchable table tagged with `id`.
fn mount(id: &str, rows: &[&str]) -> Element {
	let document = document();
	let root = document.create_element("section").unwrap();
	let rows: String = rows
		.iter()
		.map(|text| format!("<tr><td>{text}</td><td>active</td></tr>"))
		.collect();
	root.set_inner_html(&format!(
		r#"<div class="hide"><input type="text" class="filter-{id}"></div>
		<table class="searchable {id}"><tbody>{rows}</tbody></table>"#
	));
	document.body().unwrap().append_child(&root).unwrap();
	root
}

fn config(id: &str) -> FilterConfig {
	FilterConfig {
		input_selector: format!("input.filter-{id}"),
		candidate_selector: format!(".searchable.{id} tr"),
		..FilterView::Table.default_config()
	}
}

fn input(id: &str) -> HtmlInputElement {
	document()
		.query_selector(&format!("input.filter-{id}"))
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap()
}

fn type_and_release(input: &HtmlInputElement, value: &str, key: &str) {
	input.set_value(value);
	let init = KeyboardEventInit::new();
	init.set_key(key);
	let event = KeyboardEvent::new_with_keyboard_event_init_dict("keyup", &init).unwrap();
	input.dispatch_event(&event).unwrap();
}

fn visible_rows(id: &str) -> Vec<String> {
	let rows = document()
		.query_selector_all(&format!(".searchable.{id} tr"))
		.unwrap();
	(0..rows.length())
		.filter_map(|i| rows.get(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.map(DomCandidate::new)
		.filter(|c| c.is_visible())
		.map(|c| c.text().into_owned())
		.collect()
}

const HOSTS: [&str; 3] = ["web01.example.com", "db02.example.com", "cache03.example.com"];

#[wasm_bindgen_test]
fn test_attach_reveals_wrapper() {
	let root = mount("reveal", &HOSTS);
	let filters = attach_view(&document(), FilterView::Table, &config("reveal")).unwrap();

	assert_eq!(filters.len(), 1);
	let wrapper = input("reveal").parent_element().unwrap();
	assert!(!wrapper.class_list().contains("hide"));
	root.remove();
}

#[wasm_bindgen_test]
fn test_revealed_input_is_already_listening() {
	let root = mount("listening", &HOSTS);
	let filters = attach_view(&document(), FilterView::Table, &config("listening")).unwrap();

	assert_eq!(filters.len(), 1);
	let wrapper = input("listening").parent_element().unwrap();
	assert!(!wrapper.class_list().contains("hide"));
	type_and_release(&input("listening"), "cache", "e");
	assert_eq!(visible_rows("listening"), vec!["cache03.example.comactive"]);
	root.remove();
}

#[wasm_bindgen_test]
fn test_keyup_filters_rows() {
	let root = mount("typing", &HOSTS);
	attach_view(&document(), FilterView::Table, &config("typing")).unwrap();

	type_and_release(&input("typing"), "db", "b");
	assert_eq!(visible_rows("typing"), vec!["db02.example.comactive"]);

	type_and_release(&input("typing"), "EXAMPLE", "E");
	assert_eq!(visible_rows("typing").len(), 3);
	root.remove();
}

#[wasm_bindgen_test]
fn test_escape_clears_filter() {
	let root = mount("escape", &HOSTS);
	let filters = attach_view(&document(), FilterView::Table, &config("escape")).unwrap();
	let field = input("escape");

	type_and_release(&field, "db", "b");
	assert_eq!(visible_rows("escape").len(), 1);

	field.focus().unwrap();
	type_and_release(&field, "db", "Escape");

	assert_eq!(visible_rows("escape").len(), 3);
	assert_eq!(field.value(), "");
	assert_eq!(filters[0].borrow().input().value(), "");
	let field_node: &Node = field.as_ref();
	let active = document().active_element();
	assert!(active.map_or(true, |el| !el.is_same_node(Some(field_node))));
	root.remove();
}

#[wasm_bindgen_test]
fn test_no_match_and_invalid_pattern() {
	let root = mount("invalid", &HOSTS);
	attach_view(&document(), FilterView::Table, &config("invalid")).unwrap();
	let field = input("invalid");

	type_and_release(&field, "zzz", "z");
	assert!(visible_rows("invalid").is_empty());

	type_and_release(&field, "web", "b");
	type_and_release(&field, "web(", "(");
	assert_eq!(visible_rows("invalid"), vec!["web01.example.comactive"]);
	root.remove();
}

#[wasm_bindgen_test]
fn test_literal_policy_on_invalid_pattern() {
	let root = mount("literal", &["pkg[curl]", "pkg-openssl"]);
	let config = FilterConfig {
		invalid_pattern: InvalidPatternPolicy::Literal,
		..config("literal")
	};
	attach_view(&document(), FilterView::Table, &config).unwrap();

	type_and_release(&input("literal"), "pkg[", "[");
	assert_eq!(visible_rows("literal"), vec!["pkg[curl]active"]);
	root.remove();
}

#[wasm_bindgen_test]
fn test_missing_input_is_a_no_op() {
	let filters = attach_view(&document(), FilterView::List, &config("absent")).unwrap();
	assert!(filters.is_empty());
}

#[wasm_bindgen_test]
fn test_empty_table_is_a_no_op() {
	let root = mount("empty", &[]);
	let filters = attach_view(&document(), FilterView::Table, &config("empty")).unwrap();

	type_and_release(&input("empty"), "anything", "g");
	assert_eq!(filters[0].borrow().len(), 0);
	root.remove();
}

#[wasm_bindgen_test]
fn test_invalid_selector_is_an_error() {
	let config = FilterConfig {
		input_selector: "input[".to_string(),
		..config("broken")
	};
	assert!(attach_view(&document(), FilterView::Table, &config).is_err());
}

#[wasm_bindgen_test]
fn test_filtering_keeps_row_order() {
	let root = mount("order", &HOSTS);
	attach_view(&document(), FilterView::Table, &config("order")).unwrap();

	type_and_release(&input("order"), "0[13]", "3");

	let cells = document()
		.query_selector_all(".searchable.order td:first-child")
		.unwrap();
	let texts: Vec<String> = (0..cells.length())
		.filter_map(|i| cells.get(i))
		.filter_map(|node| node.text_content())
		.collect();
	assert_eq!(texts, HOSTS.to_vec());
	assert_eq!(
		visible_rows("order"),
		vec!["web01.example.comactive", "cache03.example.comactive"]
	);
	root.remove();
}

//! Dashboard configuration
//!
//! Defaults reproduce the dashboard's markup contract: filter inputs
//! `input.filter-list` and `input.filter-table`, wrapped in a `div` carrying
//! the `hide` class, filtering `li` and `tr` elements under a `.searchable`
//! container. A page can override any of it with a JSON document:
//!
//! ```
//! use livefilter_core::{DashboardConfig, InvalidPatternPolicy};
//!
//! let config = DashboardConfig::from_json(
//!     r#"{ "table": { "invalid_pattern": "literal" }, "sortable_tables": [] }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.table.input_selector, "input.filter-table");
//! assert_eq!(config.table.invalid_pattern, InvalidPatternPolicy::Literal);
//! assert!(config.sortable_tables.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::filter::FilterOptions;
use crate::pattern::InvalidPatternPolicy;
use crate::sorting::{TableSortConfig, dashboard_tables};

/// Class marking the containers whose items take part in filtering.
pub const SEARCHABLE_CLASS: &str = "searchable";

/// Class that keeps a filter input's wrapper hidden until the filter attaches.
pub const HIDDEN_CLASS: &str = "hide";

/// The two kinds of filtered view on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterView {
	/// Filters list items.
	List,
	/// Filters table rows.
	Table,
}

impl FilterView {
	/// Both views, in boot order.
	pub const ALL: [FilterView; 2] = [FilterView::List, FilterView::Table];

	/// A short name for logs and errors.
	pub fn name(&self) -> &'static str {
		match self {
			Self::List => "list",
			Self::Table => "table",
		}
	}

	/// The element filtered in this view.
	pub fn candidate_tag(&self) -> &'static str {
		match self {
			Self::List => "li",
			Self::Table => "tr",
		}
	}

	/// The default configuration for this view.
	pub fn default_config(&self) -> FilterConfig {
		FilterConfig {
			input_selector: format!("input.filter-{}", self.name()),
			candidate_selector: format!(".{SEARCHABLE_CLASS} {}", self.candidate_tag()),
			hidden_class: HIDDEN_CLASS.to_string(),
			invalid_pattern: InvalidPatternPolicy::default(),
		}
	}
}

/// How one view's filter finds its elements and treats bad patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
	/// Selects the filter input(s).
	pub input_selector: String,
	/// Selects the candidates, scoped under the searchable container.
	pub candidate_selector: String,
	/// Class removed from the input's wrapper on attach.
	pub hidden_class: String,
	/// Handling of raw values that are not valid regexes.
	pub invalid_pattern: InvalidPatternPolicy,
}

impl FilterConfig {
	/// Options for a [`LiveFilter`](crate::LiveFilter) built from this configuration.
	pub fn options(&self) -> FilterOptions {
		FilterOptions::default().invalid_pattern(self.invalid_pattern)
	}

	fn validate(&self, view: FilterView) -> ConfigResult<()> {
		let fields = [
			("input_selector", &self.input_selector),
			("candidate_selector", &self.candidate_selector),
			("hidden_class", &self.hidden_class),
		];
		for (field, value) in fields {
			if value.trim().is_empty() {
				return Err(ConfigError::EmptySelector {
					view: view.name(),
					field,
				});
			}
		}
		Ok(())
	}

	fn merge(mut self, overrides: FilterOverrides) -> Self {
		if let Some(input_selector) = overrides.input_selector {
			self.input_selector = input_selector;
		}
		if let Some(candidate_selector) = overrides.candidate_selector {
			self.candidate_selector = candidate_selector;
		}
		if let Some(hidden_class) = overrides.hidden_class {
			self.hidden_class = hidden_class;
		}
		if let Some(invalid_pattern) = overrides.invalid_pattern {
			self.invalid_pattern = invalid_pattern;
		}
		self
	}
}

/// Everything the dashboard boot needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardConfig {
	/// The list view filter.
	pub list: FilterConfig,
	/// The table view filter.
	pub table: FilterConfig,
	/// Tables handed to the sorter at boot.
	pub sortable_tables: Vec<TableSortConfig>,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			list: FilterView::List.default_config(),
			table: FilterView::Table.default_config(),
			sortable_tables: dashboard_tables(),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FilterOverrides {
	input_selector: Option<String>,
	candidate_selector: Option<String>,
	hidden_class: Option<String>,
	invalid_pattern: Option<InvalidPatternPolicy>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawDashboardConfig {
	list: FilterOverrides,
	table: FilterOverrides,
	sortable_tables: Option<Vec<TableSortConfig>>,
}

impl DashboardConfig {
	/// Parses a JSON override document on top of the defaults, then validates it.
	///
	/// Omitted fields keep their defaults. `sortable_tables`, when present,
	/// replaces the default table list entirely.
	pub fn from_json(source: &str) -> ConfigResult<Self> {
		let raw: RawDashboardConfig = serde_json::from_str(source)?;
		let defaults = Self::default();
		let config = Self {
			list: defaults.list.merge(raw.list),
			table: defaults.table.merge(raw.table),
			sortable_tables: raw.sortable_tables.unwrap_or(defaults.sortable_tables),
		};
		config.validate()?;
		Ok(config)
	}

	/// Rejects blank selectors and malformed sort configurations.
	pub fn validate(&self) -> ConfigResult<()> {
		for view in FilterView::ALL {
			self.view(view).validate(view)?;
		}
		for table in &self.sortable_tables {
			table.validate()?;
		}
		Ok(())
	}

	/// The configuration for `view`.
	pub fn view(&self, view: FilterView) -> &FilterConfig {
		match view {
			FilterView::List => &self.list,
			FilterView::Table => &self.table,
		}
	}
}

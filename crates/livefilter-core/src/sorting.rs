//! Sortable table contract
//!
//! Click-to-sort is provided by an external sorter library. The live filter
//! only coexists with it: filtering toggles visibility and never reorders
//! rows. This module describes, per table, which columns are not clickable
//! and the initial sort, and hands that description to whatever
//! [`SortConfigurator`] the page supplies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::{ConfigError, SortError};
use crate::{info_log, warn_log};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	#[default]
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// The sorter's numeric encoding: 0 ascending, 1 descending.
	pub fn as_sorter_value(&self) -> u8 {
		match self {
			Self::Ascending => 0,
			Self::Descending => 1,
		}
	}

	/// Parses the sorter's numeric encoding.
	pub fn from_sorter_value(value: u8) -> Option<Self> {
		match value {
			0 => Some(Self::Ascending),
			1 => Some(Self::Descending),
			_ => None,
		}
	}
}

/// One entry of a table's initial sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
	/// Zero-based column index.
	pub column: usize,
	/// Direction for that column.
	#[serde(default)]
	pub direction: SortDirection,
}

impl SortOrder {
	/// Sorts `column` ascending.
	pub fn ascending(column: usize) -> Self {
		Self {
			column,
			direction: SortDirection::Ascending,
		}
	}

	/// Sorts `column` descending.
	pub fn descending(column: usize) -> Self {
		Self {
			column,
			direction: SortDirection::Descending,
		}
	}
}

/// Sorter configuration for every table matching `selector`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSortConfig {
	/// CSS selector of the tables, usually a single class.
	pub selector: String,
	/// Columns whose headers are not click-to-sort.
	#[serde(default)]
	pub disabled_columns: Vec<usize>,
	/// Initial sort, highest priority first.
	#[serde(default)]
	pub sort_list: Vec<SortOrder>,
}

impl TableSortConfig {
	/// Creates a configuration with every column sortable and no initial sort.
	pub fn new(selector: impl Into<String>) -> Self {
		Self {
			selector: selector.into(),
			disabled_columns: Vec::new(),
			sort_list: Vec::new(),
		}
	}

	/// Excludes `column` from click-to-sort.
	pub fn disable_column(mut self, column: usize) -> Self {
		if !self.disabled_columns.contains(&column) {
			self.disabled_columns.push(column);
		}
		self
	}

	/// Appends an entry to the initial sort.
	pub fn sort_by(mut self, order: SortOrder) -> Self {
		self.sort_list.push(order);
		self
	}

	/// Returns true if clicking `column`'s header sorts the table.
	pub fn is_sortable(&self, column: usize) -> bool {
		!self.disabled_columns.contains(&column)
	}

	/// Builds the option object handed to the sorter.
	///
	/// ```
	/// use livefilter_core::sorting::{SortOrder, TableSortConfig};
	///
	/// let config = TableSortConfig::new(".nodes")
	///     .disable_column(4)
	///     .sort_by(SortOrder::ascending(1));
	/// assert_eq!(
	///     config.sorter_options().to_string(),
	///     r#"{"headers":{"4":{"sorter":false}},"sortList":[[1,0]]}"#
	/// );
	/// ```
	pub fn sorter_options(&self) -> Value {
		let mut options = Map::new();
		if !self.disabled_columns.is_empty() {
			let headers: Map<String, Value> = self
				.disabled_columns
				.iter()
				.map(|column| (column.to_string(), json!({ "sorter": false })))
				.collect();
			options.insert("headers".to_string(), Value::Object(headers));
		}
		if !self.sort_list.is_empty() {
			let sort_list: Vec<Value> = self
				.sort_list
				.iter()
				.map(|order| json!([order.column, order.direction.as_sorter_value()]))
				.collect();
			options.insert("sortList".to_string(), Value::Array(sort_list));
		}
		Value::Object(options)
	}

	/// Checks the selector and rejects an initial sort on a column that is
	/// sorted twice or not sortable at all.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.selector.trim().is_empty() {
			return Err(ConfigError::EmptyTableSelector);
		}
		for (index, order) in self.sort_list.iter().enumerate() {
			if !self.is_sortable(order.column) {
				return Err(ConfigError::DisabledSortColumn {
					selector: self.selector.clone(),
					column: order.column,
				});
			}
			if self.sort_list[..index]
				.iter()
				.any(|earlier| earlier.column == order.column)
			{
				return Err(ConfigError::DuplicateSortColumn {
					selector: self.selector.clone(),
					column: order.column,
				});
			}
		}
		Ok(())
	}
}

/// The monitoring dashboard's sortable tables.
///
/// - `.nodes`: the actions column (4) is not sortable, initial sort by hostname.
/// - `.facts`: sorted by fact name.
/// - `.dashboard`: the last column (2) is not sortable, newest first.
/// - `.catalog`: sorted by resource type.
pub fn dashboard_tables() -> Vec<TableSortConfig> {
	vec![
		TableSortConfig::new(".nodes")
			.disable_column(4)
			.sort_by(SortOrder::ascending(1)),
		TableSortConfig::new(".facts").sort_by(SortOrder::ascending(0)),
		TableSortConfig::new(".dashboard")
			.disable_column(2)
			.sort_by(SortOrder::descending(0)),
		TableSortConfig::new(".catalog").sort_by(SortOrder::ascending(0)),
	]
}

/// The page's sorter, supplied from outside.
pub trait SortConfigurator {
	/// Applies `table`'s configuration to every table it selects.
	fn configure(&self, table: &TableSortConfig) -> Result<(), SortError>;
}

/// Configures every table once, skipping (and logging) those the sorter rejects.
///
/// Returns the number of configurations that were applied.
pub fn configure_tables<S>(sorter: &S, tables: &[TableSortConfig]) -> usize
where
	S: SortConfigurator + ?Sized,
{
	let mut applied = 0;
	for table in tables {
		match sorter.configure(table) {
			Ok(()) => applied += 1,
			Err(error) => warn_log!("Skipping sortable table '{}': {}", table.selector, error),
		}
	}
	info_log!("Configured {}/{} sortable tables", applied, tables.len());
	applied
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::RefCell;

	#[derive(Default)]
	struct RecordingSorter {
		seen: RefCell<Vec<String>>,
		reject: Option<&'static str>,
	}

	impl SortConfigurator for RecordingSorter {
		fn configure(&self, table: &TableSortConfig) -> Result<(), SortError> {
			if self.reject == Some(table.selector.as_str()) {
				return Err(SortError::Rejected {
					selector: table.selector.clone(),
					reason: "no such table".to_string(),
				});
			}
			self.seen.borrow_mut().push(table.selector.clone());
			Ok(())
		}
	}

	#[rstest]
	#[case(SortDirection::Ascending, SortDirection::Descending)]
	#[case(SortDirection::Descending, SortDirection::Ascending)]
	fn test_sort_direction_toggle(#[case] input: SortDirection, #[case] expected: SortDirection) {
		assert_eq!(input.toggle(), expected);
	}

	#[rstest]
	fn test_sorter_value_encoding() {
		assert_eq!(SortDirection::Ascending.as_sorter_value(), 0);
		assert_eq!(SortDirection::Descending.as_sorter_value(), 1);
		assert_eq!(SortDirection::from_sorter_value(1), Some(SortDirection::Descending));
		assert_eq!(SortDirection::from_sorter_value(2), None);
	}

	#[rstest]
	fn test_empty_config_has_empty_options() {
		let config = TableSortConfig::new(".facts");
		assert_eq!(config.sorter_options(), json!({}));
		assert!(config.is_sortable(0));
	}

	#[rstest]
	fn test_disable_column_is_idempotent() {
		let config = TableSortConfig::new(".nodes").disable_column(4).disable_column(4);
		assert_eq!(config.disabled_columns, vec![4]);
		assert!(!config.is_sortable(4));
	}

	#[rstest]
	fn test_dashboard_tables_options() {
		let options: Vec<(String, Value)> = dashboard_tables()
			.into_iter()
			.map(|t| (t.selector.clone(), t.sorter_options()))
			.collect();

		assert_eq!(
			options,
			vec![
				(
					".nodes".to_string(),
					json!({ "headers": { "4": { "sorter": false } }, "sortList": [[1, 0]] })
				),
				(".facts".to_string(), json!({ "sortList": [[0, 0]] })),
				(
					".dashboard".to_string(),
					json!({ "headers": { "2": { "sorter": false } }, "sortList": [[0, 1]] })
				),
				(".catalog".to_string(), json!({ "sortList": [[0, 0]] })),
			]
		);
	}

	#[rstest]
	fn test_validate_rejects_duplicate_sort_column() {
		let config = TableSortConfig::new(".facts")
			.sort_by(SortOrder::ascending(0))
			.sort_by(SortOrder::descending(0));
		assert!(matches!(
			config.validate(),
			Err(ConfigError::DuplicateSortColumn { column: 0, .. })
		));
	}

	#[rstest]
	fn test_validate_rejects_sort_on_disabled_column() {
		let config = TableSortConfig::new(".nodes")
			.disable_column(1)
			.sort_by(SortOrder::ascending(1));
		assert!(matches!(
			config.validate(),
			Err(ConfigError::DisabledSortColumn { column: 1, .. })
		));
	}

	#[rstest]
	fn test_validate_rejects_blank_selector() {
		assert!(matches!(
			TableSortConfig::new("  ").validate(),
			Err(ConfigError::EmptyTableSelector)
		));
		for table in dashboard_tables() {
			assert!(table.validate().is_ok());
		}
	}

	#[rstest]
	fn test_configure_tables_skips_rejected() {
		let sorter = RecordingSorter {
			reject: Some(".dashboard"),
			..Default::default()
		};

		let applied = configure_tables(&sorter, &dashboard_tables());

		assert_eq!(applied, 3);
		assert_eq!(
			*sorter.seen.borrow(),
			vec![".nodes", ".facts", ".catalog"]
		);
	}
}

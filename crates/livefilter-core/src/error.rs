//! Error types for live filtering
//!
//! None of these ever escape a key-up handler: pattern failures are folded
//! into [`FilterOutcome::Rejected`](crate::filter::FilterOutcome::Rejected),
//! configuration failures surface at boot, and sorter failures are logged and
//! skipped table by table.

/// Errors raised while turning the filter input's value into a [`Pattern`](crate::Pattern).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternError {
	/// The raw value is not a valid regular expression.
	#[error("Invalid filter pattern '{pattern}': {source}")]
	Invalid {
		/// The raw value typed into the filter input.
		pattern: String,
		/// The error reported by the regex engine.
		#[source]
		source: regex::Error,
	},
}

impl PatternError {
	/// Returns the raw value that failed to compile.
	pub fn pattern(&self) -> &str {
		match self {
			Self::Invalid { pattern, .. } => pattern,
		}
	}
}

/// Errors raised while loading or validating dashboard configuration.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The document is not valid JSON or has unknown fields.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// A filter view was given a blank selector or class.
	#[error("Empty {field} for the {view} filter")]
	EmptySelector {
		/// The view being configured.
		view: &'static str,
		/// The blank field.
		field: &'static str,
	},

	/// A sortable table entry has a blank selector.
	#[error("Sortable table selector cannot be empty")]
	EmptyTableSelector,

	/// The initial sort names the same column twice.
	#[error("Sortable table '{selector}' sorts column {column} more than once")]
	DuplicateSortColumn {
		/// The table's selector.
		selector: String,
		/// The repeated column.
		column: usize,
	},

	/// The initial sort names a column whose sorting is disabled.
	#[error("Sortable table '{selector}' sorts by column {column}, which is not sortable")]
	DisabledSortColumn {
		/// The table's selector.
		selector: String,
		/// The disabled column.
		column: usize,
	},
}

/// Errors reported by a [`SortConfigurator`](crate::sorting::SortConfigurator).
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SortError {
	/// The options could not be turned into the sorter's input.
	#[error("Failed to encode sorter options: {0}")]
	Encode(#[from] serde_json::Error),

	/// The sorter refused or failed on a table.
	#[error("Sorter rejected table '{selector}': {reason}")]
	Rejected {
		/// The table's selector.
		selector: String,
		/// What the sorter reported.
		reason: String,
	},
}

/// Result alias for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

//! Live filtering core for dashboard list and table views
//!
//! As a user types into a filter input, every list item or table row is
//! re-tested against the input's value, read as a case-insensitive regular
//! expression, and shown or hidden accordingly. Escape clears the input,
//! shows everything again and drops focus.
//!
//! This crate holds everything that does not need a browser:
//!
//! - [`pattern`]: compiling the raw input into a [`Pattern`]
//! - [`candidate`]: the [`Candidate`] trait for rows and items
//! - [`input`]: the [`FilterInput`] trait for the text control
//! - [`key`]: the key-up protocol ([`Key`])
//! - [`filter`]: the [`LiveFilter`] itself
//! - [`sorting`]: the contract with the page's table sorter
//! - [`config`]: dashboard configuration
//! - [`logging`]: logging macros shared with the DOM binding
//!
//! The DOM binding lives in `livefilter-dom`.

#![warn(missing_docs)]

pub mod candidate;
pub mod config;
pub mod error;
pub mod filter;
pub mod input;
pub mod key;
pub mod logging;
pub mod pattern;
pub mod sorting;

pub use candidate::{Candidate, TextCandidate};
pub use config::{DashboardConfig, FilterConfig, FilterView, HIDDEN_CLASS, SEARCHABLE_CLASS};
pub use error::{ConfigError, ConfigResult, PatternError, SortError};
pub use filter::{FilterOptions, FilterOutcome, LiveFilter};
pub use input::{FilterInput, MemoryInput};
pub use key::{ENTER_KEY_CODE, ESCAPE_KEY_CODE, Key};
pub use pattern::{InvalidPatternPolicy, Pattern};
pub use sorting::{
	SortConfigurator, SortDirection, SortOrder, TableSortConfig, configure_tables,
	dashboard_tables,
};

// Logging macros are exported at the crate root via #[macro_export]

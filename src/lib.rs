//! # livefilter
//!
//! Live, keystroke-driven filtering of the list and table views of a
//! monitoring dashboard.
//!
//! The page renders every node, fact or catalog entry up front. As the user
//! types into a view's filter input, each item is re-tested against the
//! input's value, read as a case-insensitive regular expression, and shown or
//! hidden in place. Escape clears the filter. Sortable tables are configured
//! once at boot and are never disturbed by filtering.
//!
//! ## Feature Flags
//!
//! - `dom` (default) - Browser binding over `web-sys` (see [`dom`])
//! - `console_error_panic_hook` - Readable panics in the browser console
//! - `debug-hooks` - Enables `debug_log!` output in debug builds
//!
//! ## Example
//!
//! ```
//! use livefilter::{FilterOptions, Key, LiveFilter, MemoryInput, TextCandidate};
//!
//! let hosts = ["web01.example.com", "db02.example.com", "cache03.example.com"];
//! let mut filter = LiveFilter::attach(
//!     MemoryInput::new(),
//!     hosts.map(TextCandidate::new),
//!     FilterOptions::default(),
//! );
//!
//! filter.input_mut().type_text("db");
//! filter.handle_key_up(Key::Other(66));
//! assert_eq!(filter.visible_count(), 1);
//!
//! filter.handle_key_up(Key::Escape);
//! assert_eq!(filter.visible_count(), 3);
//! ```

#![warn(missing_docs)]

#[cfg(feature = "dom")]
pub mod dom;

pub use livefilter_core::{
	Candidate, ConfigError, DashboardConfig, FilterConfig, FilterInput, FilterOptions,
	FilterOutcome, FilterView, InvalidPatternPolicy, Key, LiveFilter, MemoryInput, Pattern,
	PatternError, SortConfigurator, SortDirection, SortError, SortOrder, TableSortConfig,
	TextCandidate, configure_tables, dashboard_tables,
};

pub use livefilter_core::{candidate, config, error, filter, input, key, pattern, sorting};

// Logging macros are re-exported from the core
pub use livefilter_core::{debug_log, error_log, info_log, warn_log};

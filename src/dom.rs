//! Browser binding
//!
//! This module provides access to livefilter-dom, which binds live filters
//! to the filter inputs and searchable lists and tables of a rendered page.
//!
//! ## Architecture
//!
//! - **Candidates**: list items and table rows, shown and hidden through inline `display`
//! - **Inputs**: filter inputs whose hidden wrapper is revealed on attach
//! - **Listeners**: one `keyup` listener per input, driving its own filter
//! - **Boot**: sorter configuration, then filter attachment, once the document is parsed
//!
//! ## Example
//!
//! ```rust,ignore
//! use livefilter::dom::{boot, JsSortConfigurator};
//! use livefilter::DashboardConfig;
//!
//! let document = web_sys::window().unwrap().document().unwrap();
//! let sorter = JsSortConfigurator::from_global("configureSortableTable");
//! let report = boot(
//!     &document,
//!     &DashboardConfig::default(),
//!     sorter.as_ref().map(|s| s as &dyn livefilter::SortConfigurator),
//! );
//! ```

// Re-export all livefilter-dom functionality
pub use livefilter_dom::*;

//! Browser binding for livefilter
//!
//! Binds the core [`LiveFilter`](livefilter_core::LiveFilter) to the page:
//! filter inputs become [`DomFilterInput`]s, list items and table rows become
//! [`DomCandidate`]s, and every `keyup` on an input re-runs its filter.
//!
//! ## Markup contract
//!
//! ```html
//! <div class="hide"><input class="filter-table" type="text"></div>
//! <table class="nodes searchable">
//!   <tr><td>web01.example.com</td></tr>
//!   <tr><td>db02.example.com</td></tr>
//! </table>
//! ```
//!
//! The wrapper stays hidden until the filter attaches, so a page whose
//! script never loads shows no dead control.
//!
//! ## Usage
//!
//! ```js
//! import init, { startLiveFiltersWith } from "./livefilter_dom.js";
//!
//! await init();
//! startLiveFiltersWith(null, (selector, options) => jQuery(selector).tablesorter(options));
//! ```
//!
//! Everything except [`error`] is WASM-only.

#![warn(missing_docs)]

pub mod error;

#[cfg(target_arch = "wasm32")]
pub mod attach;
#[cfg(target_arch = "wasm32")]
pub mod boot;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod sorter;

pub use error::AttachError;

#[cfg(target_arch = "wasm32")]
pub use attach::{DomLiveFilter, SharedFilter, attach_view};
#[cfg(target_arch = "wasm32")]
pub use boot::{BootReport, boot, on_content_loaded, on_ready, start, start_with};
#[cfg(target_arch = "wasm32")]
pub use dom::{DomCandidate, DomFilterInput, query_all};
#[cfg(target_arch = "wasm32")]
pub use sorter::JsSortConfigurator;

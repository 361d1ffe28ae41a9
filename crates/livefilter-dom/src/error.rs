//! Errors raised while binding filters to the page.

/// Error type for filter attachment and boot.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
	/// Not running in a browser window.
	#[error("No window available")]
	NoWindow,

	/// The window has no document.
	#[error("No document available")]
	NoDocument,

	/// The browser rejected a CSS selector.
	#[error("Invalid selector '{selector}': {reason}")]
	Selector {
		/// The rejected selector.
		selector: String,
		/// What the browser reported.
		reason: String,
	},

	/// An event listener could not be registered.
	#[error("Failed to attach '{event_type}' listener: {reason}")]
	Listener {
		/// The event being listened for.
		event_type: String,
		/// What the browser reported.
		reason: String,
	},

	/// The dashboard configuration was rejected.
	#[error("Invalid configuration: {0}")]
	Config(String),
}

impl From<livefilter_core::ConfigError> for AttachError {
	fn from(error: livefilter_core::ConfigError) -> Self {
		Self::Config(error.to_string())
	}
}

#[cfg(target_arch = "wasm32")]
impl From<AttachError> for wasm_bindgen::JsValue {
	fn from(error: AttachError) -> Self {
		js_sys::Error::new(&error.to_string()).into()
	}
}

/// Renders a thrown JS value for an error message.
#[cfg(target_arch = "wasm32")]
pub(crate) fn describe(value: &wasm_bindgen::JsValue) -> String {
	use wasm_bindgen::JsCast;

	if let Some(error) = value.dyn_ref::<js_sys::Error>() {
		return String::from(error.message());
	}
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

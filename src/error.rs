//! Crate error types.
//!
//! Only mount-time failures surface as errors. Once the page is wired, every
//! handler is a one-shot reaction and failed DOM writes are logged instead.
//! A broken configuration island is not an error either: it is logged and
//! the defaults apply (see [`crate::config::ConfigError`]).

/// Error returned while mounting the page behaviors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required element from the document contract is absent.
    #[error("required element missing: {0}")]
    MissingElement(&'static str),
    /// The persisted key-value store is unavailable or rejected a write.
    #[error("storage unavailable: {0}")]
    Storage(String),
    /// A browser API call failed.
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

#[cfg(feature = "hydrate")]
impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

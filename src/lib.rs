//! Interactive behaviors for a static single-page portfolio.
//!
//! The markup is served as-is; this crate compiles to WebAssembly and attaches
//! section highlighting, the collapsible sidebar, the persisted theme, the
//! profile image fallback and a handful of motion effects.
//!
//! | Module   | Role                                                    |
//! |----------|---------------------------------------------------------|
//! | `app`    | Event reactions over [`state::AppState`], as effects    |
//! | `config` | Tunables parsed from the page's JSON island             |
//! | `effect` | Effect vocabulary and the in-memory test surface        |
//! | `error`  | Mount-time error type                                   |
//! | `state`  | Per-component state machines                            |
//! | `util`   | Preference store abstraction and injected stylesheet    |
//! | `dom`    | Browser host (`hydrate` feature only)                   |

pub mod app;
pub mod config;
pub mod effect;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point: mounts the page behaviors when the module loads.
///
/// # Errors
///
/// Fails when the document lacks a required element.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    dom::boot().map_err(Into::into)
}

/// Detach every listener and cancel pending timers and frames.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn teardown() {
    dom::shutdown();
}

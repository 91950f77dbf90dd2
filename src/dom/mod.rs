//! Browser host for the page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything in here touches `web_sys` and only compiles with the `hydrate`
//! feature. The host resolves the static markup, reads the configuration
//! island and hands events to [`crate::app::Portfolio`], whose effects it
//! applies back to the DOM.

mod elements;
mod listeners;
mod page;
mod storage;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

use crate::config::{CONFIG_ELEMENT_ID, Config, ConfigError};
use crate::error::Error;

pub use page::Page;
pub use storage::LocalStorage;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Install logging and mount the page once the document has parsed.
///
/// # Errors
///
/// Returns an error when there is no window or document, or when mounting
/// fails on an already parsed document.
pub fn boot() -> Result<(), Error> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or(Error::MissingElement("window"))?;
    let document = window.document().ok_or(Error::MissingElement("document"))?;

    let (config, config_error) = load_config(&document);
    if let Err(err) = console_log::init_with_level(config.log_level) {
        log::debug!("keeping existing logger: {err}");
    }
    if let Some(err) = config_error {
        log::warn!("ignoring page config: {err}");
    }

    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = mount(window, &target, config) {
                log::error!("portfolio mount failed: {err}");
                wasm_bindgen::throw_str(&err.to_string());
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }
    mount(window, &document, config)
}

/// Tear down the mounted page, if any.
pub fn shutdown() {
    if let Some(page) = PAGE.with(|slot| slot.borrow_mut().take()) {
        page.teardown();
    }
}

fn mount(window: Window, document: &Document, config: Config) -> Result<(), Error> {
    let page = Page::mount(window, document, config)?;
    keep(page);
    Ok(())
}

/// Hold the mounted page for the lifetime of the module, replacing any earlier one.
fn keep(page: Page) {
    if let Some(previous) = PAGE.with(|slot| slot.borrow_mut().replace(page)) {
        previous.teardown();
    }
}

/// Read the JSON configuration island. An absent island means defaults; a
/// broken one also means defaults, with the error handed back for logging.
fn load_config(document: &Document) -> (Config, Option<ConfigError>) {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|island| island.text_content())
    else {
        return (Config::default(), None);
    };
    match Config::from_json(&text) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

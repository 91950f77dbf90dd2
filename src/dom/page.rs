//! Live page host: wires browser events into [`Portfolio`] and applies effects.
//!
//! ARCHITECTURE
//! ============
//! All listener closures hold a `Weak` to the shared [`Inner`], so dropping
//! the [`Page`] handle after [`Page::teardown`] frees everything. Timers are
//! `gloo_timers` timeouts keyed by [`TaskSlot`]; replacing or dropping one
//! cancels it. The animation frame callback is allocated once and reused for
//! every frame request.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry, KeyboardEvent, Node,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::elements::{Elements, ensure_styles};
use super::listeners::Listener;
use super::storage::LocalStorage;
use crate::app::Portfolio;
use crate::config::Config;
use crate::effect::{Deferred, Effect, TaskSlot, Target};
use crate::error::Error;
use crate::state::Viewport;
use crate::state::menu::ClickOrigin;
use crate::state::motion::Hover;
use crate::state::sections::SectionIndex;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Inner {
    window: Window,
    elements: Elements,
    app: RefCell<Portfolio<LocalStorage>>,
    timers: RefCell<HashMap<TaskSlot, Timeout>>,
    frame_id: RefCell<Option<i32>>,
    frame_callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    listeners: RefCell<Vec<Listener>>,
    observer: RefCell<Option<(IntersectionObserver, ObserverCallback)>>,
}

/// Handle to the mounted page behaviors.
pub struct Page {
    inner: Rc<Inner>,
}

impl Page {
    /// Resolve the markup, wire every listener and apply the initial state.
    pub fn mount(window: Window, document: &Document, config: Config) -> Result<Self, Error> {
        ensure_styles(document)?;
        let elements = Elements::resolve(document)?;
        let store = LocalStorage::open(&window);
        let index = SectionIndex::new(elements.section_ids(), elements.nav_targets());
        let intercept_social = config.intercept_social_links;

        let inner = Rc::new(Inner {
            window,
            elements,
            app: RefCell::new(Portfolio::new(config, index, store)),
            timers: RefCell::new(HashMap::new()),
            frame_id: RefCell::new(None),
            frame_callback: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
        });

        install_frame_callback(&inner);
        wire(&inner, document, intercept_social)?;
        observe_title(&inner)?;

        let effects = inner.app.borrow_mut().start(viewport(&inner.window));
        dispatch(&inner, effects);
        Ok(Self { inner })
    }

    /// Remove every listener and cancel every pending timer and frame.
    pub fn teardown(self) {
        let inner = &self.inner;
        let listeners = std::mem::take(&mut *inner.listeners.borrow_mut());
        for listener in listeners {
            listener.detach();
        }
        if let Some((observer, _callback)) = inner.observer.borrow_mut().take() {
            observer.disconnect();
        }
        if let Some(id) = inner.frame_id.borrow_mut().take() {
            report("cancel animation frame", inner.window.cancel_animation_frame(id));
        }
        inner.frame_callback.borrow_mut().take();
        inner.timers.borrow_mut().clear();
        log::info!("portfolio torn down");
    }
}

// =============================================================
// Event wiring
// =============================================================

fn wire(inner: &Rc<Inner>, document: &Document, intercept_social: bool) -> Result<(), Error> {
    let elements = &inner.elements;
    let mut listeners = Vec::new();

    for (section, link) in &elements.nav_links {
        let section = section.clone();
        listeners.push(Listener::attach(link, "click", handler(inner, move |inner, event| {
            event.prevent_default();
            let viewport = viewport(&inner.window);
            inner.app.borrow_mut().on_nav_click(&section, viewport)
        }))?);
    }

    listeners.push(Listener::attach(&inner.window, "scroll", handler(inner, |inner, _| inner.app.borrow_mut().on_scroll()))?);
    listeners.push(Listener::attach(&inner.window, "resize", handler(inner, |inner, _| {
        let viewport = viewport(&inner.window);
        inner.app.borrow_mut().on_resize(viewport)
    }))?);

    listeners.push(Listener::attach(&elements.menu_toggle, "click", handler(inner, |inner, event| {
        event.stop_propagation();
        inner.app.borrow_mut().on_menu_toggle()
    }))?);
    listeners.push(Listener::attach(&elements.overlay, "click", handler(inner, |inner, _| {
        inner.app.borrow_mut().on_overlay_click()
    }))?);
    listeners.push(Listener::attach(document, "click", handler(inner, move |inner, event| {
        if intercept_social {
            intercept_social_click(&event);
        }
        let origin = click_origin(&inner.elements, &event);
        let viewport = viewport(&inner.window);
        inner.app.borrow_mut().on_document_click(origin, viewport)
    }))?);
    listeners.push(Listener::attach(document, "keydown", handler(inner, |inner, event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return Vec::new();
        };
        inner.app.borrow_mut().on_key(&key)
    }))?);

    let theme_toggles = std::iter::once(&elements.theme_toggle).chain(elements.mobile_theme_toggle.iter());
    for toggle in theme_toggles {
        listeners.push(Listener::attach(toggle, "click", handler(inner, |inner, _| {
            inner.app.borrow_mut().on_theme_toggle()
        }))?);
    }

    if let Some(image) = &elements.profile_image {
        listeners.push(Listener::attach(image, "load", handler(inner, |inner, _| inner.app.borrow_mut().on_image_load()))?);
        listeners.push(Listener::attach(image, "error", handler(inner, |inner, _| inner.app.borrow_mut().on_image_error()))?);
    }

    for (index, link) in elements.social_links.iter().enumerate() {
        for (event_name, hover) in [("mouseenter", Hover::Enter), ("mouseleave", Hover::Leave)] {
            listeners.push(Listener::attach(link, event_name, handler(inner, move |inner, _| {
                inner.app.borrow().on_social_hover(index, hover)
            }))?);
        }
    }

    inner.listeners.borrow_mut().extend(listeners);
    Ok(())
}

/// Adapt `react` into a DOM event handler that dispatches the returned effects.
///
/// The app borrow taken inside `react` ends before dispatch runs.
fn handler(
    inner: &Rc<Inner>,
    react: impl Fn(&Rc<Inner>, Event) -> Vec<Effect> + 'static,
) -> impl FnMut(Event) + 'static {
    let weak = Rc::downgrade(inner);
    move |event| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let effects = react(&inner, event);
        dispatch(&inner, effects);
    }
}

fn click_origin(elements: &Elements, event: &Event) -> ClickOrigin {
    let Some(node) = event.target().and_then(|target| target.dyn_ref::<Node>().cloned()) else {
        return ClickOrigin::default();
    };
    ClickOrigin {
        inside_sidebar: elements.sidebar.contains(Some(&node)),
        on_toggle: elements.menu_toggle.contains(Some(&node)),
    }
}

fn intercept_social_click(event: &Event) {
    let Some(element) = event.target().and_then(|target| target.dyn_ref::<Element>().cloned()) else {
        return;
    };
    match element.closest(".social-link") {
        Ok(Some(link)) => {
            event.prevent_default();
            let label = link.get_attribute("aria-label").unwrap_or_default();
            log::info!("social link clicked: {label}");
        }
        Ok(None) => {}
        Err(err) => log::warn!("social link lookup failed: {err:?}"),
    }
}

fn observe_title(inner: &Rc<Inner>) -> Result<(), Error> {
    let Some(title) = &inner.elements.main_title else {
        return Ok(());
    };
    let weak = Rc::downgrade(inner);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            let effects = inner.app.borrow().on_title_intersection(entry.is_intersecting());
            dispatch(&inner, effects);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    observer.observe(title);
    *inner.observer.borrow_mut() = Some((observer, callback));
    Ok(())
}

fn install_frame_callback(inner: &Rc<Inner>) {
    let weak: Weak<Inner> = Rc::downgrade(inner);
    let callback = Closure::wrap(Box::new(move |_ts: f64| {
        if let Some(inner) = weak.upgrade() {
            inner.frame_id.borrow_mut().take();
            run_frame(&inner);
        }
    }) as Box<dyn FnMut(f64)>);
    *inner.frame_callback.borrow_mut() = Some(callback);
}

fn run_frame(inner: &Rc<Inner>) {
    let sections = inner.elements.measure_sections();
    let viewport = viewport(&inner.window);
    let effects = inner.app.borrow_mut().on_frame(&sections, viewport);
    dispatch(inner, effects);
}

// =============================================================
// Effect application
// =============================================================

fn dispatch(inner: &Rc<Inner>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::RequestFrame => request_frame(inner),
            Effect::Schedule { delay_ms, task } => schedule(inner, delay_ms, task),
            other => apply(inner, other),
        }
    }
}

fn request_frame(inner: &Rc<Inner>) {
    let requested = {
        let callback = inner.frame_callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        inner.window.request_animation_frame(callback.as_ref().unchecked_ref())
    };
    match requested {
        Ok(id) => *inner.frame_id.borrow_mut() = Some(id),
        Err(err) => {
            log::warn!("requestAnimationFrame failed, running frame inline: {err:?}");
            run_frame(inner);
        }
    }
}

fn schedule(inner: &Rc<Inner>, delay_ms: u32, task: Deferred) {
    let slot = task.slot();
    let weak = Rc::downgrade(inner);
    let timeout = Timeout::new(delay_ms, move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let effects = inner.app.borrow_mut().run(task);
        dispatch(&inner, effects);
    });
    // Replacing the slot drops (and so cancels) the previous timeout.
    inner.timers.borrow_mut().insert(slot, timeout);
}

fn apply(inner: &Inner, effect: Effect) {
    match effect {
        Effect::AddClass(target, class) => {
            for el in inner.elements.resolve_target(&target) {
                report("add class", el.class_list().add_1(class));
            }
        }
        Effect::RemoveClass(target, class) => {
            for el in inner.elements.resolve_target(&target) {
                report("remove class", el.class_list().remove_1(class));
            }
        }
        Effect::SetAttribute(target, name, value) => {
            for el in inner.elements.resolve_target(&target) {
                report("set attribute", el.set_attribute(name, &value));
            }
        }
        Effect::SetStyle(target, property, value) => {
            for el in inner.elements.resolve_target(&target) {
                report("set style", el.style().set_property(property, &value));
            }
        }
        Effect::ClearStyle(target, property) => {
            for el in inner.elements.resolve_target(&target) {
                report("clear style", el.style().remove_property(property).map(drop));
            }
        }
        Effect::ScrollToTop => inner.window.scroll_to_with_x_and_y(0.0, 0.0),
        Effect::ScrollIntoView(section) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            for el in inner.elements.resolve_target(&Target::Section(section)) {
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        Effect::RequestFrame | Effect::Schedule { .. } => {}
    }
}

fn report(action: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{action} failed: {err:?}");
    }
}

/// Sample the viewport; unreadable metrics are logged and read as zero.
fn viewport(window: &Window) -> Viewport {
    Viewport::new(
        metric("innerWidth", window.inner_width().map(|v| v.as_f64())),
        metric("innerHeight", window.inner_height().map(|v| v.as_f64())),
        metric("scrollY", window.scroll_y().map(Some)),
    )
}

fn metric(name: &str, value: Result<Option<f64>, JsValue>) -> f64 {
    match value {
        Ok(Some(value)) => value,
        Ok(None) => {
            log::warn!("{name} is not a number");
            0.0
        }
        Err(err) => {
            log::warn!("reading {name} failed: {err:?}");
            0.0
        }
    }
}

//! Browser-free page controller.
//!
//! ARCHITECTURE
//! ============
//! `Portfolio` owns the explicit [`AppState`], the configuration and the
//! injected preference store. Every browser event maps to one method that
//! returns the [`Effect`]s to apply; the browser layer in `dom` only samples
//! the viewport, calls in, and applies what comes back. Tests drive the same
//! methods against a `MemorySurface`.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::config::Config;
use crate::effect::{Deferred, Effect};
use crate::state::menu::{self, ClickOrigin, MenuEvent, SidebarState};
use crate::state::motion::{self, Hover};
use crate::state::profile_image;
use crate::state::sections::{SectionGeometry, SectionIndex, nearest_section};
use crate::state::theme::{self, Theme};
use crate::state::{AppState, Viewport};
use crate::util::storage::KeyValueStore;

/// Core page controller.
pub struct Portfolio<S> {
    config: Config,
    state: AppState,
    sections: SectionIndex,
    store: S,
}

impl<S: KeyValueStore> Portfolio<S> {
    /// Build a controller for the sections and nav links found in the markup.
    pub fn new(config: Config, sections: SectionIndex, store: S) -> Self {
        Self { config, state: AppState::default(), sections, store }
    }

    // --- Lifecycle ---

    /// Initial page state, in bootstrap order: scroll reset, profile image
    /// default, menu toggle visibility (and a closed sidebar when wide), theme,
    /// home highlight, fade-in.
    pub fn start(&mut self, viewport: Viewport) -> Vec<Effect> {
        let mut effects = vec![Effect::ScrollToTop];
        effects.extend(profile_image::apply(self.state.profile_image));
        let narrow = self.config.is_narrow(viewport.width);
        effects.push(menu::toggle_visibility(narrow));
        if !narrow {
            effects.extend(menu::enter(SidebarState::Closed));
        }

        self.state.theme = Theme::load(&self.store, &self.config.theme_key);
        effects.extend(theme::apply(self.state.theme));

        let home = self.config.home_section.clone();
        effects.extend(self.activate(&home));

        effects.push(motion::hide_page());
        effects.push(Effect::Schedule { delay_ms: self.config.fade_in_delay_ms, task: Deferred::FadeIn });
        log::info!("portfolio started: theme={} sections={}", self.state.theme, self.sections.sections().len());
        effects
    }

    /// Run a deferred task whose timer fired.
    pub fn run(&mut self, task: Deferred) -> Vec<Effect> {
        match task {
            Deferred::Activate(id) => self.activate(&id),
            Deferred::FadeIn => motion::fade_in(self.config.fade_in_duration_ms),
        }
    }

    // --- Navigation ---

    /// A nav link targeting `section` was clicked. Unknown targets neither
    /// scroll nor highlight, but still close the sidebar on narrow viewports.
    pub fn on_nav_click(&mut self, section: &str, viewport: Viewport) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.sections.contains(section) {
            effects.push(Effect::ScrollIntoView(section.to_owned()));
            effects.push(Effect::Schedule {
                delay_ms: self.config.activation_delay_ms,
                task: Deferred::Activate(section.to_owned()),
            });
        }
        effects.extend(self.menu(MenuEvent::NavLinkPressed { narrow: self.config.is_narrow(viewport.width) }));
        effects
    }

    /// The window scrolled. Requests a frame unless one is already pending.
    pub fn on_scroll(&mut self) -> Vec<Effect> {
        if self.state.frame_gate.request() {
            vec![Effect::RequestFrame]
        } else {
            Vec::new()
        }
    }

    /// The requested animation frame fired with freshly measured sections.
    pub fn on_frame(&mut self, sections: &[SectionGeometry], viewport: Viewport) -> Vec<Effect> {
        self.state.frame_gate.complete();
        let mut effects = Vec::new();
        if let Some(id) = nearest_section(sections, viewport.height, self.config.activation_zone) {
            if self.state.active_section.as_deref() != Some(id) {
                let id = id.to_owned();
                effects.extend(self.activate(&id));
            }
        }
        let narrow = self.config.is_narrow(viewport.width);
        effects.extend(motion::parallax(viewport.scroll_y, self.config.parallax_speed, narrow));
        effects
    }

    // --- Menu ---

    pub fn on_menu_toggle(&mut self) -> Vec<Effect> {
        self.menu(MenuEvent::TogglePressed)
    }

    pub fn on_overlay_click(&mut self) -> Vec<Effect> {
        self.menu(MenuEvent::OverlayPressed)
    }

    pub fn on_document_click(&mut self, origin: ClickOrigin, viewport: Viewport) -> Vec<Effect> {
        self.menu(MenuEvent::OutsideClick { origin, narrow: self.config.is_narrow(viewport.width) })
    }

    pub fn on_key(&mut self, key: &str) -> Vec<Effect> {
        if key == "Escape" {
            return self.menu(MenuEvent::Escape);
        }
        Vec::new()
    }

    pub fn on_resize(&mut self, viewport: Viewport) -> Vec<Effect> {
        let narrow = self.config.is_narrow(viewport.width);
        let mut effects = vec![menu::toggle_visibility(narrow)];
        effects.extend(self.menu(MenuEvent::Resized { narrow }));
        effects
    }

    // --- Theme ---

    pub fn on_theme_toggle(&mut self) -> Vec<Effect> {
        let (next, effects) = theme::toggle(self.state.theme, &mut self.store, &self.config.theme_key);
        self.state.theme = next;
        effects
    }

    // --- Profile image ---

    pub fn on_image_load(&mut self) -> Vec<Effect> {
        self.image_signal(true)
    }

    pub fn on_image_error(&mut self) -> Vec<Effect> {
        log::warn!("profile image failed to load");
        self.image_signal(false)
    }

    // --- Decoration ---

    pub fn on_social_hover(&self, index: usize, hover: Hover) -> Vec<Effect> {
        vec![motion::hover(index, hover)]
    }

    pub fn on_title_intersection(&self, intersecting: bool) -> Vec<Effect> {
        motion::title_entrance(intersecting).into_iter().collect()
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Release the store, e.g. to simulate a reload against it.
    pub fn into_store(self) -> S {
        self.store
    }

    // --- Internals ---

    fn activate(&mut self, id: &str) -> Vec<Effect> {
        let Some(effects) = self.sections.activate(id) else {
            return Vec::new();
        };
        log::debug!("section {id} active");
        self.state.active_section = Some(id.to_owned());
        effects
    }

    fn menu(&mut self, event: MenuEvent) -> Vec<Effect> {
        menu::step(&mut self.state.sidebar, event)
    }

    fn image_signal(&mut self, loaded: bool) -> Vec<Effect> {
        self.state.profile_image = self.state.profile_image.on_signal(loaded);
        profile_image::apply(self.state.profile_image)
    }
}

//! Transient page state and the per-component state machines.
//!
//! DESIGN
//! ======
//! Each submodule owns one component's transition logic. [`AppState`] is the
//! single explicit state object threaded through them by
//! [`crate::app::Portfolio`]; nothing is read from ambient scope.

pub mod menu;
pub mod motion;
pub mod profile_image;
pub mod sections;
pub mod theme;

use menu::SidebarState;
use profile_image::ImageStatus;
use sections::FrameGate;
use theme::Theme;

/// Viewport metrics sampled by the host at event time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Inner width in CSS pixels.
    pub width: f64,
    /// Inner height in CSS pixels.
    pub height: f64,
    /// Vertical scroll offset in CSS pixels.
    pub scroll_y: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64, scroll_y: f64) -> Self {
        Self { width, height, scroll_y }
    }
}

/// All mutable page state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub theme: Theme,
    pub sidebar: SidebarState,
    /// Currently highlighted section id.
    pub active_section: Option<String>,
    pub frame_gate: FrameGate,
    pub profile_image: ImageStatus,
}

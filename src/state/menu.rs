//! Responsive sidebar menu.
//!
//! DESIGN
//! ======
//! `SidebarState` is a two-state machine. [`transition`] is pure; the effects
//! for entering each state come from [`enter`], so callers only emit
//! mutations when the state actually changes. The toggle button's
//! visibility is a separate pure function of viewport width.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::effect::{Effect, Target};

/// Class marking the sidebar and toggle as open.
pub const OPEN_CLASS: &str = "open";
/// Class marking the overlay as shown.
pub const OVERLAY_ACTIVE_CLASS: &str = "active";

pub const LABEL_OPEN_MENU: &str = "Open menu";
pub const LABEL_CLOSE_MENU: &str = "Close menu";
/// Label carried by the toggle before its first transition.
pub const LABEL_TOGGLE_MENU: &str = "Toggle menu";

/// Whether the sidebar is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Closed,
    Open,
}

impl SidebarState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Where a document-level click landed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickOrigin {
    pub inside_sidebar: bool,
    pub on_toggle: bool,
}

/// Input to the sidebar state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    /// The injected toggle button was clicked.
    TogglePressed,
    OverlayPressed,
    /// A click anywhere in the document.
    OutsideClick { origin: ClickOrigin, narrow: bool },
    /// Escape was pressed.
    Escape,
    NavLinkPressed { narrow: bool },
    Resized { narrow: bool },
}

/// Next sidebar state for `event`.
#[must_use]
pub fn transition(state: SidebarState, event: MenuEvent) -> SidebarState {
    use SidebarState::{Closed, Open};

    match (state, event) {
        (Closed, MenuEvent::TogglePressed) => Open,
        (Open, MenuEvent::TogglePressed | MenuEvent::OverlayPressed | MenuEvent::Escape) => Closed,
        (Open, MenuEvent::OutsideClick { origin, narrow: true }) if !origin.inside_sidebar && !origin.on_toggle => {
            Closed
        }
        (Open, MenuEvent::NavLinkPressed { narrow: true } | MenuEvent::Resized { narrow: false }) => Closed,
        (state, _) => state,
    }
}

/// Effects establishing `state` on the page.
#[must_use]
pub fn enter(state: SidebarState) -> Vec<Effect> {
    match state {
        SidebarState::Open => vec![
            Effect::AddClass(Target::Sidebar, OPEN_CLASS),
            Effect::AddClass(Target::Overlay, OVERLAY_ACTIVE_CLASS),
            Effect::AddClass(Target::MenuToggle, OPEN_CLASS),
            Effect::SetAttribute(Target::MenuToggle, "aria-label", LABEL_CLOSE_MENU.to_owned()),
            Effect::SetStyle(Target::Body, "overflow", "hidden".to_owned()),
        ],
        SidebarState::Closed => vec![
            Effect::RemoveClass(Target::Sidebar, OPEN_CLASS),
            Effect::RemoveClass(Target::Overlay, OVERLAY_ACTIVE_CLASS),
            Effect::RemoveClass(Target::MenuToggle, OPEN_CLASS),
            Effect::SetAttribute(Target::MenuToggle, "aria-label", LABEL_OPEN_MENU.to_owned()),
            Effect::ClearStyle(Target::Body, "overflow"),
        ],
    }
}

/// Apply `event` to `state`, returning the entry effects when it changed.
pub fn step(state: &mut SidebarState, event: MenuEvent) -> Vec<Effect> {
    let next = transition(*state, event);
    if next == *state {
        return Vec::new();
    }
    log::debug!("sidebar {:?} -> {next:?} on {event:?}", *state);
    *state = next;
    enter(next)
}

/// Toggle button display for the current width class.
#[must_use]
pub fn toggle_visibility(narrow: bool) -> Effect {
    let display = if narrow { "block" } else { "none" };
    Effect::SetStyle(Target::MenuToggle, "display", display.to_owned())
}

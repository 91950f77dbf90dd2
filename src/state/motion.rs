//! Cosmetic motion: parallax, social-link hover lift, title entrance, page fade-in.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::effect::{Effect, Target};

pub const HOVER_LIFT: &str = "translateY(-3px) scale(1.1)";
pub const HOVER_REST: &str = "translateY(0) scale(1)";
pub const TITLE_ENTRANCE: &str = "fadeInUp 1s ease-out";

/// Pointer crossing a social link boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Leave,
}

/// Hero translation for a scroll offset, or `None` on narrow viewports.
#[must_use]
pub fn parallax_offset(scroll_y: f64, speed: f64, narrow: bool) -> Option<f64> {
    if narrow {
        return None;
    }
    Some(scroll_y * speed)
}

#[must_use]
pub fn parallax(scroll_y: f64, speed: f64, narrow: bool) -> Option<Effect> {
    let offset = parallax_offset(scroll_y, speed, narrow)?;
    Some(Effect::SetStyle(Target::HeroContent, "transform", format!("translateY({offset}px)")))
}

#[must_use]
pub fn hover(index: usize, hover: Hover) -> Effect {
    let transform = match hover {
        Hover::Enter => HOVER_LIFT,
        Hover::Leave => HOVER_REST,
    };
    Effect::SetStyle(Target::SocialLink(index), "transform", transform.to_owned())
}

/// Entrance animation, replayed on every intersection.
#[must_use]
pub fn title_entrance(intersecting: bool) -> Option<Effect> {
    intersecting.then(|| Effect::SetStyle(Target::MainTitle, "animation", TITLE_ENTRANCE.to_owned()))
}

/// Body starts transparent until the fade-in task runs.
#[must_use]
pub fn hide_page() -> Effect {
    Effect::SetStyle(Target::Body, "opacity", "0".to_owned())
}

#[must_use]
pub fn fade_in(duration_ms: u32) -> Vec<Effect> {
    vec![
        Effect::SetStyle(Target::Body, "transition", format!("opacity {}s ease-in-out", seconds(duration_ms))),
        Effect::SetStyle(Target::Body, "opacity", "1".to_owned()),
    ]
}

fn seconds(ms: u32) -> f64 {
    f64::from(ms) / 1000.0
}

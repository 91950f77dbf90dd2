//! Active-section tracking.
//!
//! Exactly one section and its nav link carry the `active` class once the
//! page settles. Activation is explicit (nav click, after a short delay) or
//! implicit (scroll, at most once per animation frame).

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use crate::effect::{Effect, Target};

/// Class marking the highlighted section and nav link.
pub const ACTIVE_CLASS: &str = "active";

/// Measured position of one section relative to the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    /// Distance from the viewport top to the section top (negative once scrolled past).
    pub top: f64,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Pick the section nearest the viewport top among those whose top sits at
/// or above `zone` × `viewport_height`. Ties keep the earlier section.
#[must_use]
pub fn nearest_section(sections: &[SectionGeometry], viewport_height: f64, zone: f64) -> Option<&str> {
    let limit = viewport_height * zone;
    let mut best: Option<(&str, f64)> = None;
    for section in sections {
        let distance = section.top.abs();
        if section.top > limit {
            continue;
        }
        if best.is_none_or(|(_, min)| distance < min) {
            best = Some((section.id.as_str(), distance));
        }
    }
    best.map(|(id, _)| id)
}

/// Frame coalescing flag: one pending frame callback at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Claim the gate. Returns `false` when a frame is already pending, in
    /// which case the caller drops the event.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Release the gate once the frame callback has run.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.pending
    }
}

/// The known section ids and the nav links pointing at them.
#[derive(Clone, Debug, Default)]
pub struct SectionIndex {
    sections: Vec<String>,
    links: Vec<String>,
}

impl SectionIndex {
    /// Build from section ids in document order and nav link targets.
    #[must_use]
    pub fn new(sections: Vec<String>, links: Vec<String>) -> Self {
        Self { sections, links }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }

    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Effects clearing every highlight and marking `id` active.
    ///
    /// Returns `None` for an id with no matching section, leaving the
    /// current highlight untouched.
    #[must_use]
    pub fn activate(&self, id: &str) -> Option<Vec<Effect>> {
        if !self.contains(id) {
            return None;
        }
        let mut effects = Vec::with_capacity(self.links.len() + self.sections.len() + 2);
        effects.extend(self.links.iter().map(|link| Effect::RemoveClass(Target::NavLink(link.clone()), ACTIVE_CLASS)));
        effects.extend(
            self.sections
                .iter()
                .map(|section| Effect::RemoveClass(Target::Section(section.clone()), ACTIVE_CLASS)),
        );
        effects.push(Effect::AddClass(Target::Section(id.to_owned()), ACTIVE_CLASS));
        if self.links.iter().any(|link| link == id) {
            effects.push(Effect::AddClass(Target::NavLink(id.to_owned()), ACTIVE_CLASS));
        }
        Some(effects)
    }
}

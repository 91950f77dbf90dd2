//! Effect vocabulary shared by the state machines and the page surfaces.
//!
//! ARCHITECTURE
//! ============
//! Components never touch the document. They return [`Effect`]s naming an
//! opaque [`Target`], and a [`Surface`] applies them: the browser surface in
//! `dom` writes to live elements, [`MemorySurface`] records page state for
//! tests. Every mutation is a "set state" operation, so replaying an effect
//! is harmless.

#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

use std::collections::{BTreeSet, HashMap};

/// Opaque handle to an element (or element group) the page behaviors mutate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The `<html>` element.
    Root,
    /// The `<body>` element.
    Body,
    /// A content section, by id.
    Section(String),
    /// The nav link whose `data-section` names this id.
    NavLink(String),
    Sidebar,
    Overlay,
    /// The injected menu toggle button.
    MenuToggle,
    /// The desktop theme toggle button.
    ThemeToggle,
    ThemeIcon,
    MobileThemeIcon,
    ProfileImage,
    ProfilePlaceholder,
    /// Every hero content block.
    HeroContent,
    /// A social link, by document order.
    SocialLink(usize),
    MainTitle,
}

/// Work deferred behind a timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// Highlight a section after a nav click started scrolling.
    Activate(String),
    /// Start the page fade-in transition.
    FadeIn,
}

/// Timer slot a deferred task occupies. Scheduling into an occupied slot
/// cancels the pending task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskSlot {
    Activation,
    FadeIn,
}

impl Deferred {
    #[must_use]
    pub fn slot(&self) -> TaskSlot {
        match self {
            Self::Activate(_) => TaskSlot::Activation,
            Self::FadeIn => TaskSlot::FadeIn,
        }
    }
}

/// A single requested change to the page.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    AddClass(Target, &'static str),
    RemoveClass(Target, &'static str),
    SetAttribute(Target, &'static str, String),
    /// Set an inline style property.
    SetStyle(Target, &'static str, String),
    /// Remove an inline style property, restoring the stylesheet value.
    ClearStyle(Target, &'static str),
    /// Jump the viewport to the top of the document.
    ScrollToTop,
    /// Smooth-scroll so the section's top meets the viewport top.
    ScrollIntoView(String),
    /// Ask for one callback on the next animation frame.
    RequestFrame,
    /// Run `task` after `delay_ms`.
    Schedule { delay_ms: u32, task: Deferred },
}

/// Something that can carry out effects.
pub trait Surface {
    fn apply(&mut self, effect: Effect);

    fn apply_all(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }
}

/// In-memory page model that records the outcome of applied effects.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    classes: HashMap<Target, BTreeSet<&'static str>>,
    attributes: HashMap<(Target, &'static str), String>,
    styles: HashMap<(Target, &'static str), String>,
    /// Vertical scroll offset; reset by [`Effect::ScrollToTop`].
    pub scroll_y: f64,
    /// Last section a smooth scroll was requested for.
    pub scrolled_to: Option<String>,
    /// Whether an animation frame callback is outstanding.
    pub frame_requested: bool,
    scheduled: HashMap<TaskSlot, (u32, Deferred)>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.classes.get(target).is_some_and(|set| set.contains(class))
    }

    #[must_use]
    pub fn attribute(&self, target: &Target, name: &'static str) -> Option<&str> {
        self.attributes.get(&(target.clone(), name)).map(String::as_str)
    }

    #[must_use]
    pub fn style(&self, target: &Target, property: &'static str) -> Option<&str> {
        self.styles.get(&(target.clone(), property)).map(String::as_str)
    }

    /// Every target currently carrying `class`.
    #[must_use]
    pub fn targets_with_class(&self, class: &str) -> Vec<Target> {
        self.classes
            .iter()
            .filter(|(_, set)| set.contains(class))
            .map(|(target, _)| target.clone())
            .collect()
    }

    /// Pending deferred tasks ordered by delay.
    #[must_use]
    pub fn scheduled(&self) -> Vec<(u32, Deferred)> {
        let mut tasks = self.scheduled.values().cloned().collect::<Vec<_>>();
        tasks.sort_by_key(|(delay, _)| *delay);
        tasks
    }

    /// Remove and return pending tasks, as if their timers had fired.
    pub fn take_scheduled(&mut self) -> Vec<Deferred> {
        let tasks = self.scheduled().into_iter().map(|(_, task)| task).collect();
        self.scheduled.clear();
        tasks
    }

    /// Consume the pending frame request, as if the frame had fired.
    pub fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }
}

impl Surface for MemorySurface {
    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::AddClass(target, class) => {
                self.classes.entry(target).or_default().insert(class);
            }
            Effect::RemoveClass(target, class) => {
                if let Some(set) = self.classes.get_mut(&target) {
                    set.remove(class);
                }
            }
            Effect::SetAttribute(target, name, value) => {
                self.attributes.insert((target, name), value);
            }
            Effect::SetStyle(target, property, value) => {
                self.styles.insert((target, property), value);
            }
            Effect::ClearStyle(target, property) => {
                self.styles.remove(&(target, property));
            }
            Effect::ScrollToTop => {
                self.scroll_y = 0.0;
            }
            Effect::ScrollIntoView(section) => {
                self.scrolled_to = Some(section);
            }
            Effect::RequestFrame => {
                self.frame_requested = true;
            }
            Effect::Schedule { delay_ms, task } => {
                self.scheduled.insert(task.slot(), (delay_ms, task));
            }
        }
    }
}

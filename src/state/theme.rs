//! Light/dark theme preference.
//!
//! Reads the persisted preference from an injected [`KeyValueStore`] and
//! applies a `data-theme` attribute to the `<html>` element. Toggle writes
//! back to the store and refreshes both toggle controls.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::effect::{Effect, Target};
use crate::util::storage::KeyValueStore;

/// Root attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Desktop toggle attribute carrying the tooltip text.
pub const TOOLTIP_ATTRIBUTE: &str = "data-tooltip";

/// Visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Error returned when parsing a persisted theme literal.
#[derive(Debug, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(String);

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon class shown while this theme is active.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-moon",
            Self::Light => "fas fa-sun",
        }
    }

    /// Tooltip describing what the toggle will do next.
    #[must_use]
    pub fn tooltip(self) -> &'static str {
        match self {
            Self::Dark => "Enable Light Mode",
            Self::Light => "Enable Dark Mode",
        }
    }

    /// Read the persisted theme; absent or unrecognized values yield the default.
    pub fn load(store: &impl KeyValueStore, key: &str) -> Self {
        let Some(raw) = store.get(key) else {
            return Self::default();
        };
        raw.parse().unwrap_or_else(|err: UnknownTheme| {
            log::warn!("{err}; falling back to {}", Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Effects applying `theme` to the document and both toggle controls.
#[must_use]
pub fn apply(theme: Theme) -> Vec<Effect> {
    vec![
        Effect::SetAttribute(Target::Root, THEME_ATTRIBUTE, theme.as_str().to_owned()),
        Effect::SetAttribute(Target::ThemeIcon, "class", theme.icon_class().to_owned()),
        Effect::SetAttribute(Target::ThemeToggle, TOOLTIP_ATTRIBUTE, theme.tooltip().to_owned()),
        Effect::SetAttribute(Target::MobileThemeIcon, "class", theme.icon_class().to_owned()),
    ]
}

/// Flip `current`, persist the result and return the new theme with its effects.
///
/// A failed write is logged; the page still switches.
pub fn toggle(current: Theme, store: &mut impl KeyValueStore, key: &str) -> (Theme, Vec<Effect>) {
    let next = current.toggled();
    if let Err(err) = store.set(key, next.as_str()) {
        log::warn!("theme preference not saved: {err}");
    }
    (next, apply(next))
}

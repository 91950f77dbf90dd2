use super::*;
use crate::effect::{MemorySurface, Surface};
use crate::error::Error;
use crate::util::storage::MemoryStore;

/// Store whose writes always fail, like a full or disabled `localStorage`.
struct RejectingStore;

impl KeyValueStore for RejectingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), Error> {
        Err(Error::Storage("quota exceeded".to_owned()))
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn toggled_twice_is_identity() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(theme.toggled().toggled(), theme);
        assert_ne!(theme.toggled(), theme);
    }
}

#[test]
fn parse_accepts_persisted_literals() {
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert!("Light".parse::<Theme>().is_err());
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn display_matches_persisted_literal() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}

#[test]
fn icon_and_tooltip_mapping() {
    assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
    assert_eq!(Theme::Dark.tooltip(), "Enable Light Mode");
    assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Light.tooltip(), "Enable Dark Mode");
}

// =============================================================
// load
// =============================================================

#[test]
fn load_empty_store_is_dark() {
    assert_eq!(Theme::load(&MemoryStore::new(), "theme"), Theme::Dark);
}

#[test]
fn load_reads_persisted_value() {
    assert_eq!(Theme::load(&MemoryStore::with("theme", "light"), "theme"), Theme::Light);
}

#[test]
fn load_unknown_value_falls_back_to_dark() {
    assert_eq!(Theme::load(&MemoryStore::with("theme", "sepia"), "theme"), Theme::Dark);
}

#[test]
fn load_is_repeatable() {
    let store = MemoryStore::with("theme", "light");
    assert_eq!(Theme::load(&store, "theme"), Theme::load(&store, "theme"));
}

// =============================================================
// apply / toggle
// =============================================================

#[test]
fn apply_updates_root_and_both_controls() {
    let mut surface = MemorySurface::new();
    surface.apply_all(apply(Theme::Light));
    assert_eq!(surface.attribute(&Target::Root, THEME_ATTRIBUTE), Some("light"));
    assert_eq!(surface.attribute(&Target::ThemeIcon, "class"), Some("fas fa-sun"));
    assert_eq!(surface.attribute(&Target::MobileThemeIcon, "class"), Some("fas fa-sun"));
    assert_eq!(surface.attribute(&Target::ThemeToggle, TOOLTIP_ATTRIBUTE), Some("Enable Dark Mode"));
}

#[test]
fn toggle_persists_new_value() {
    let mut store = MemoryStore::new();
    let (next, effects) = toggle(Theme::Dark, &mut store, "theme");
    assert_eq!(next, Theme::Light);
    assert_eq!(effects, apply(Theme::Light));
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn toggle_still_switches_when_store_rejects_write() {
    let mut store = RejectingStore;
    let (next, effects) = toggle(Theme::Light, &mut store, "theme");
    assert_eq!(next, Theme::Dark);
    assert_eq!(effects, apply(Theme::Dark));
}

use super::*;
use crate::effect::{MemorySurface, Surface};

fn index() -> SectionIndex {
    let ids = ["home", "about", "projects", "contact"].map(str::to_owned).to_vec();
    SectionIndex::new(ids.clone(), ids)
}

// =============================================================
// nearest_section
// =============================================================

#[test]
fn nearest_picks_smallest_absolute_distance() {
    let sections = vec![
        SectionGeometry::new("home", -900.0),
        SectionGeometry::new("about", -40.0),
        SectionGeometry::new("projects", 300.0),
    ];
    assert_eq!(nearest_section(&sections, 800.0, 0.6), Some("about"));
}

#[test]
fn nearest_prefers_section_below_top_when_closer() {
    let sections = vec![SectionGeometry::new("home", -500.0), SectionGeometry::new("about", 120.0)];
    assert_eq!(nearest_section(&sections, 800.0, 0.6), Some("about"));
}

#[test]
fn nearest_ignores_sections_below_zone() {
    // 0.6 * 800 = 480; "about" sits lower and is excluded despite being closer.
    let sections = vec![SectionGeometry::new("home", -700.0), SectionGeometry::new("about", 500.0)];
    assert_eq!(nearest_section(&sections, 800.0, 0.6), Some("home"));
}

#[test]
fn nearest_zone_boundary_is_inclusive() {
    let sections = vec![SectionGeometry::new("about", 480.0)];
    assert_eq!(nearest_section(&sections, 800.0, 0.6), Some("about"));
}

#[test]
fn nearest_none_when_nothing_qualifies() {
    let sections = vec![SectionGeometry::new("home", 600.0), SectionGeometry::new("about", 1400.0)];
    assert_eq!(nearest_section(&sections, 800.0, 0.6), None);
    assert_eq!(nearest_section(&[], 800.0, 0.6), None);
}

#[test]
fn nearest_tie_keeps_document_order() {
    let sections = vec![SectionGeometry::new("home", -100.0), SectionGeometry::new("about", 100.0)];
    assert_eq!(nearest_section(&sections, 800.0, 0.6), Some("home"));
}

// =============================================================
// FrameGate
// =============================================================

#[test]
fn frame_gate_admits_one_request_until_complete() {
    let mut gate = FrameGate::default();
    assert!(!gate.is_pending());
    assert!(gate.request());
    assert!(gate.is_pending());
    assert!(!gate.request());
    assert!(!gate.request());
    gate.complete();
    assert!(!gate.is_pending());
    assert!(gate.request());
}

// =============================================================
// SectionIndex::activate
// =============================================================

#[test]
fn activate_marks_exactly_one_pair() {
    let index = index();
    let mut surface = MemorySurface::new();
    for id in ["about", "contact", "projects"] {
        surface.apply_all(index.activate(id).unwrap());
    }
    let mut active = surface.targets_with_class(ACTIVE_CLASS);
    active.sort_by_key(|t| format!("{t:?}"));
    assert_eq!(
        active,
        vec![Target::NavLink("projects".to_owned()), Target::Section("projects".to_owned())]
    );
}

#[test]
fn activate_unknown_id_is_ignored() {
    assert!(index().activate("blog").is_none());
}

#[test]
fn activate_section_without_link_marks_only_section() {
    let index = SectionIndex::new(vec!["home".to_owned(), "footer".to_owned()], vec!["home".to_owned()]);
    let mut surface = MemorySurface::new();
    surface.apply_all(index.activate("home").unwrap());
    surface.apply_all(index.activate("footer").unwrap());
    assert_eq!(surface.targets_with_class(ACTIVE_CLASS), vec![Target::Section("footer".to_owned())]);
}

#[test]
fn activate_twice_is_stable() {
    let index = index();
    let first = index.activate("about").unwrap();
    let second = index.activate("about").unwrap();
    assert_eq!(first, second);
}

#[test]
fn contains_matches_known_ids() {
    let index = index();
    assert!(index.contains("home"));
    assert!(!index.contains("blog"));
    assert_eq!(index.sections().len(), 4);
}

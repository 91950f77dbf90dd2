use super::*;
use crate::effect::{MemorySurface, Surface};

#[test]
fn pending_shows_image() {
    assert_eq!(ImageStatus::default(), ImageStatus::Pending);
    assert_eq!(ImageStatus::Pending.display(), ("block", "none"));
}

#[test]
fn load_success_shows_image() {
    let status = ImageStatus::Pending.on_signal(true);
    assert_eq!(status, ImageStatus::Loaded);
    assert_eq!(status.display(), ("block", "none"));
}

#[test]
fn load_failure_shows_placeholder() {
    let status = ImageStatus::Pending.on_signal(false);
    assert_eq!(status, ImageStatus::Failed);
    assert_eq!(status.display(), ("none", "flex"));
}

#[test]
fn failure_is_terminal() {
    assert_eq!(ImageStatus::Failed.on_signal(true), ImageStatus::Failed);
}

#[test]
fn apply_sets_both_elements() {
    let mut surface = MemorySurface::new();
    surface.apply_all(apply(ImageStatus::Failed));
    assert_eq!(surface.style(&Target::ProfileImage, "display"), Some("none"));
    assert_eq!(surface.style(&Target::ProfilePlaceholder, "display"), Some("flex"));

    surface.apply_all(apply(ImageStatus::Loaded));
    assert_eq!(surface.style(&Target::ProfileImage, "display"), Some("block"));
    assert_eq!(surface.style(&Target::ProfilePlaceholder, "display"), Some("none"));
}

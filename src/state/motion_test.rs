use super::*;

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_scales_scroll_offset() {
    assert_eq!(parallax_offset(200.0, 0.5, false), Some(100.0));
    assert_eq!(parallax_offset(0.0, 0.5, false), Some(0.0));
}

#[test]
fn parallax_disabled_when_narrow() {
    assert_eq!(parallax_offset(200.0, 0.5, true), None);
    assert_eq!(parallax(200.0, 0.5, true), None);
}

#[test]
fn parallax_effect_formats_transform() {
    assert_eq!(
        parallax(180.0, 0.25, false),
        Some(Effect::SetStyle(Target::HeroContent, "transform", "translateY(45px)".to_owned()))
    );
    assert_eq!(
        parallax(301.0, 0.5, false),
        Some(Effect::SetStyle(Target::HeroContent, "transform", "translateY(150.5px)".to_owned()))
    );
}

// =============================================================
// Hover / entrance
// =============================================================

#[test]
fn hover_enter_and_leave_are_reversible() {
    assert_eq!(hover(2, Hover::Enter), Effect::SetStyle(Target::SocialLink(2), "transform", HOVER_LIFT.to_owned()));
    assert_eq!(hover(2, Hover::Leave), Effect::SetStyle(Target::SocialLink(2), "transform", HOVER_REST.to_owned()));
}

#[test]
fn title_entrance_only_when_intersecting() {
    assert_eq!(
        title_entrance(true),
        Some(Effect::SetStyle(Target::MainTitle, "animation", TITLE_ENTRANCE.to_owned()))
    );
    assert_eq!(title_entrance(false), None);
}

// =============================================================
// Fade-in
// =============================================================

#[test]
fn page_starts_transparent() {
    assert_eq!(hide_page(), Effect::SetStyle(Target::Body, "opacity", "0".to_owned()));
}

#[test]
fn fade_in_sets_transition_then_opacity() {
    assert_eq!(
        fade_in(500),
        vec![
            Effect::SetStyle(Target::Body, "transition", "opacity 0.5s ease-in-out".to_owned()),
            Effect::SetStyle(Target::Body, "opacity", "1".to_owned()),
        ]
    );
}

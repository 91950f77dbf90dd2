use super::*;
use crate::state::motion::TITLE_ENTRANCE;

#[test]
fn defines_keyframes_used_by_motion() {
    let animation = TITLE_ENTRANCE.split_whitespace().next().unwrap_or_default();
    assert_eq!(animation, "fadeInUp");
    assert!(DYNAMIC_STYLES.contains("@keyframes fadeInUp"));
    assert!(DYNAMIC_STYLES.contains("@keyframes pulse"));
}

#[test]
fn braces_balance() {
    let open = DYNAMIC_STYLES.matches('{').count();
    let close = DYNAMIC_STYLES.matches('}').count();
    assert_eq!(open, close);
}

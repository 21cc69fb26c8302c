use super::*;

#[test]
fn coarse_media_means_touch_policy() {
    assert_eq!(pointer_kind(true), PointerKind::Coarse);
    assert_eq!(pointer_kind(false), PointerKind::Fine);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn detection_is_fine_outside_browser() {
    assert_eq!(detect_pointer_kind(), PointerKind::Fine);
}

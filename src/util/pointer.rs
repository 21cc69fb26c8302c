//! Input-method detection for the drag policy.
//!
//! Touch screens report a coarse primary pointer; those users get the
//! long-press arming flow, everyone else drags immediately.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::state::drag::PointerKind;

/// Media query matched by touch-first devices.
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

/// Map the media query result to a pointer kind.
#[must_use]
pub fn pointer_kind(coarse: bool) -> PointerKind {
    if coarse { PointerKind::Coarse } else { PointerKind::Fine }
}

/// Detect the primary pointer of this device. Outside the browser this is
/// always [`PointerKind::Fine`].
pub fn detect_pointer_kind() -> PointerKind {
    #[cfg(feature = "hydrate")]
    {
        let coarse = web_sys::window()
            .and_then(|w| w.match_media(COARSE_POINTER_QUERY).ok().flatten())
            .is_some_and(|mq| mq.matches());
        pointer_kind(coarse)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        pointer_kind(false)
    }
}

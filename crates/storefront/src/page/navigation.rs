//! In-page navigation helpers.

/// Height of the fixed header; anchor targets scroll this far above the section.
pub const HEADER_OFFSET: i64 = 80;

/// Scroll position after which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: i64 = 20;

/// Where to smooth-scroll for a click on an in-page link.
///
/// `target_offset_top` is the top offset of the element the href points at,
/// or `None` when no element matches. A bare `#` href never scrolls.
#[must_use]
pub fn anchor_scroll_target(href: &str, target_offset_top: Option<i64>) -> Option<i64> {
    if href == "#" || !href.starts_with('#') {
        return None;
    }
    target_offset_top.map(|top| top - HEADER_OFFSET)
}

/// Whether the back-to-top button should be visible.
///
/// Browsers report the scroll position on either `body` or the document
/// element; either one past the threshold counts.
#[must_use]
pub const fn back_to_top_visible(body_scroll_top: i64, document_scroll_top: i64) -> bool {
    body_scroll_top > BACK_TO_TOP_THRESHOLD || document_scroll_top > BACK_TO_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_scroll_target() {
        assert_eq!(anchor_scroll_target("#produtos", Some(900)), Some(820));
        assert_eq!(anchor_scroll_target("#topo", Some(0)), Some(-80));
    }

    #[test]
    fn test_anchor_scroll_ignores_bare_hash_and_missing_target() {
        assert_eq!(anchor_scroll_target("#", Some(300)), None);
        assert_eq!(anchor_scroll_target("#sumiu", None), None);
        assert_eq!(anchor_scroll_target("/checkout", Some(10)), None);
    }

    #[test]
    fn test_back_to_top_visibility() {
        assert!(!back_to_top_visible(0, 20));
        assert!(back_to_top_visible(0, 21));
        assert!(back_to_top_visible(21, 0));
    }
}

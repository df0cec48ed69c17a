//! Pure derivations driven by the window scroll offset: the header's
//! "scrolled" treatment and which nav link is highlighted.

/// Scroll offset past which the header gets its solid treatment.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// A section counts as reached this many pixels before its top edge.
pub const SECTION_ACTIVATION_OFFSET: f64 = 200.0;

/// Room left above an anchor target for the fixed header.
pub const ANCHOR_SCROLL_MARGIN: f64 = 80.0;

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// A section's id and the vertical offset of its top edge, measured from the
/// top of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

/// Picks the section the viewport is currently "in": the last section in
/// document order whose activation point has been passed. Returns `None`
/// when nothing has been reached yet.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SECTION_ACTIVATION_OFFSET)
        .last()
        .map(|s| s.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(tops: &[(&str, f64)]) -> Vec<SectionBounds> {
        tops.iter()
            .map(|(id, top)| SectionBounds {
                id: (*id).to_string(),
                top: *top,
            })
            .collect()
    }

    #[test]
    fn header_treatment_threshold() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(50.0));
        assert!(header_scrolled(50.5));
    }

    #[test]
    fn last_reached_section_wins() {
        let s = sections(&[("a", 0.0), ("b", 500.0), ("c", 1200.0)]);
        assert_eq!(active_section(&s, 650.0), Some("b"));
    }

    #[test]
    fn later_section_overrides_once_reached() {
        let s = sections(&[("a", 0.0), ("b", 500.0), ("c", 1200.0)]);
        assert_eq!(active_section(&s, 1000.0), Some("c"));
    }

    #[test]
    fn activation_point_is_inclusive() {
        let s = sections(&[("a", 0.0), ("b", 500.0)]);
        assert_eq!(active_section(&s, 300.0), Some("b"));
        assert_eq!(active_section(&s, 299.0), Some("a"));
    }

    #[test]
    fn nothing_active_before_first_section() {
        let s = sections(&[("a", 300.0)]);
        assert_eq!(active_section(&s, 0.0), None);
        assert_eq!(active_section(&[], 100.0), None);
    }
}

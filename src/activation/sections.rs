/// A page section that has a matching nav link, measured from layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedSection {
    pub id: String,
    pub top_offset: f64,
    pub height: f64,
}

impl TrackedSection {
    pub fn new(id: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top_offset,
            height,
        }
    }

    /// Half-open membership: the bottom edge belongs to the next section.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top_offset && position < self.top_offset + self.height
    }
}

/// Picks the section under `scroll_offset + nav_offset`.
///
/// When ranges overlap the last match in `sections` order wins, so the result
/// is deterministic for a fixed ordering.
pub fn active_section(sections: &[TrackedSection], scroll_offset: f64, nav_offset: f64) -> Option<&str> {
    let position = scroll_offset + nav_offset;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

/// Scroll position that lands a section just below a fixed header.
pub fn anchor_scroll_top(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<TrackedSection> {
        vec![
            TrackedSection::new("home", 0.0, 600.0),
            TrackedSection::new("alerts", 600.0, 800.0),
            TrackedSection::new("resources", 1400.0, 700.0),
        ]
    }

    #[test]
    fn exactly_one_section_is_active() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 900.0, 100.0), Some("alerts"));
        assert_eq!(active_section(&sections, 1500.0, 100.0), Some("resources"));
    }

    #[test]
    fn section_bottom_edge_is_exclusive() {
        let sections = page();
        // 500 + 100 lands on the first pixel of "alerts".
        assert_eq!(active_section(&sections, 500.0, 100.0), Some("alerts"));
        assert_eq!(active_section(&sections, 499.0, 100.0), Some("home"));
    }

    #[test]
    fn nothing_matches_past_the_last_section() {
        assert_eq!(active_section(&page(), 5000.0, 100.0), None);
        assert_eq!(active_section(&[], 0.0, 100.0), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_last_match() {
        let sections = vec![
            TrackedSection::new("outer", 0.0, 2000.0),
            TrackedSection::new("inner", 500.0, 300.0),
        ];
        assert_eq!(active_section(&sections, 500.0, 100.0), Some("inner"));
        assert_eq!(active_section(&sections, 1000.0, 100.0), Some("outer"));
    }

    #[test]
    fn anchor_target_accounts_for_header() {
        assert_eq!(anchor_scroll_top(1400.0, 72.0), 1328.0);
        assert_eq!(anchor_scroll_top(20.0, 72.0), 0.0);
    }
}

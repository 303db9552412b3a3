//! Scroll-synced navigation state.

use serde::{Deserialize, Serialize};

/// Vertical extent of a page section in document coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Last section (in document order) containing `probe`
pub fn section_at(probe: f64, sections: &[SectionBounds]) -> Option<&SectionBounds> {
    sections.iter().rev().find(|s| s.contains(probe))
}

/// Section id referenced by an in-page link such as `#riscos`
pub fn anchor_id(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    active: String,
    probe_offset: f64,
}

impl ScrollSpy {
    pub fn new(initial: impl Into<String>, probe_offset: f64) -> Self {
        Self {
            active: initial.into(),
            probe_offset,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Explicit selection from a navigation click
    pub fn select(&mut self, id: &str) {
        if self.active != id {
            self.active = id.to_string();
        }
    }

    /// Recompute from the scroll position. Keeps the current section when
    /// nothing matches. Returns true when the active section changed.
    pub fn update(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        let probe = scroll_y + self.probe_offset;
        match section_at(probe, sections) {
            Some(section) if section.id != self.active => {
                tracing::debug!(from = %self.active, to = %section.id, "active section changed");
                self.active = section.id.clone();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("introducao", 600.0, 500.0),
            SectionBounds::new("influencia", 1300.0, 900.0),
            SectionBounds::new("lideranca", 2200.0, 700.0),
        ]
    }

    #[test]
    fn test_initial_section() {
        let spy = ScrollSpy::new("introducao", 100.0);
        assert_eq!(spy.active(), "introducao");
        assert!(spy.is_active("introducao"));
    }

    #[test]
    fn test_probe_offset() {
        let mut spy = ScrollSpy::new("introducao", 100.0);
        assert!(!spy.update(1150.0, &layout()));
        assert!(spy.update(1200.0, &layout()));
        assert_eq!(spy.active(), "influencia");
        assert!(spy.update(2100.0, &layout()));
        assert_eq!(spy.active(), "lideranca");
    }

    #[test]
    fn test_gap_keeps_previous() {
        let mut spy = ScrollSpy::new("introducao", 100.0);
        spy.update(1250.0, &layout());
        assert_eq!(spy.active(), "influencia");
        // 1100..1300 is the statistics band between sections
        assert!(!spy.update(1050.0, &layout()));
        assert_eq!(spy.active(), "influencia");
        assert!(!spy.update(9000.0, &layout()));
        assert_eq!(spy.active(), "influencia");
    }

    #[test]
    fn test_overlap_prefers_later_section() {
        let sections = vec![
            SectionBounds::new("a", 0.0, 200.0),
            SectionBounds::new("b", 150.0, 200.0),
        ];
        assert_eq!(section_at(175.0, &sections).map(|s| s.id.as_str()), Some("b"));
        assert_eq!(section_at(350.0, &sections), None);
    }

    #[test]
    fn test_select_and_anchor() {
        let mut spy = ScrollSpy::new("introducao", 100.0);
        spy.select(anchor_id("#riscos"));
        assert_eq!(spy.active(), "riscos");
        assert_eq!(anchor_id("conclusao"), "conclusao");
    }
}

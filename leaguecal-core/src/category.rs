//! Display styling for event categories.

use crate::event::EventCategory;

/// How a category is presented: a human label and the web palette color.
///
/// Terminal clients map categories to ANSI colors themselves; the hex value
/// is the canonical palette shared with the web frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub label: &'static str,
    pub color: &'static str,
}

impl EventCategory {
    /// Fixed category → style table. Total: every category (including
    /// `Other`, which unknown wire strings collapse to) has a style.
    pub fn style(self) -> CategoryStyle {
        match self {
            EventCategory::Program => CategoryStyle {
                label: "program",
                color: "#2563eb",
            },
            EventCategory::Tournament => CategoryStyle {
                label: "tournament",
                color: "#dc2626",
            },
            EventCategory::Camp => CategoryStyle {
                label: "camp",
                color: "#16a34a",
            },
            EventCategory::Clinic => CategoryStyle {
                label: "clinic",
                color: "#9333ea",
            },
            EventCategory::Workshop => CategoryStyle {
                label: "workshop",
                color: "#ea580c",
            },
            EventCategory::Event => CategoryStyle {
                label: "event",
                color: "#0d9488",
            },
            EventCategory::Other => CategoryStyle {
                label: "other",
                color: "#6b7280",
            },
        }
    }

    pub fn label(self) -> &'static str {
        self.style().label
    }
}

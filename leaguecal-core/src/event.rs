//! Event types as served by the league backend.
//!
//! Events are read-only to this crate: the backend owns them, we fetch,
//! index and render them. The `date` field stays in its wire form
//! (`YYYY-MM-DD`) because grid cells match it by exact string equality.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire format for event dates. Zero-padded, locale-independent, matching
/// what `MonthGrid::cell_date` produces.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A scheduled league event (program session, tournament, camp, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Display string ("6:00 PM", "All day"). Shown verbatim, never parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default)]
    pub category: EventCategory,
}

impl CalendarEvent {
    /// The event's date, parsed strictly as `YYYY-MM-DD`.
    ///
    /// `None` marks a malformed record. Indexing and the upcoming feed skip
    /// those silently; one bad record must not hide the rest.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Classification tag on an event, used for color-coding.
///
/// Deserialization is total: any string the backend invents that isn't one
/// of the seven known values collapses to `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Program,
    Tournament,
    Camp,
    Clinic,
    Workshop,
    Event,
    #[default]
    #[serde(other)]
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 7] = [
        EventCategory::Program,
        EventCategory::Tournament,
        EventCategory::Camp,
        EventCategory::Clinic,
        EventCategory::Workshop,
        EventCategory::Event,
        EventCategory::Other,
    ];

    /// Total lookup from an arbitrary wire string, mirroring the serde
    /// fallback for callers that aren't deserializing.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "program" => EventCategory::Program,
            "tournament" => EventCategory::Tournament,
            "camp" => EventCategory::Camp,
            "clinic" => EventCategory::Clinic,
            "workshop" => EventCategory::Workshop,
            "event" => EventCategory::Event,
            _ => EventCategory::Other,
        }
    }
}

//! Date-keyed event lookups.

use std::collections::HashMap;

use crate::event::CalendarEvent;

/// Events grouped by their `date` string for O(1) day lookups.
///
/// The index holds whatever the fetch returned, month boundaries included;
/// a grid only ever looks up its own month's keys. Within a date, events
/// keep their input order.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    by_date: HashMap<String, Vec<CalendarEvent>>,
    len: usize,
}

impl EventIndex {
    pub fn from_events(events: Vec<CalendarEvent>) -> Self {
        let mut index = EventIndex::default();
        for event in events {
            // Records with unparseable dates are skipped, not fatal.
            if event.parsed_date().is_none() {
                continue;
            }
            index.by_date.entry(event.date.clone()).or_default().push(event);
            index.len += 1;
        }
        index
    }

    /// Events on a date (`YYYY-MM-DD`). Empty slice for unknown dates, so
    /// callers never need a presence check.
    pub fn events_on(&self, date: &str) -> &[CalendarEvent] {
        self.by_date.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of indexed events.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCategory;

    fn event(id: &str, date: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: format!("Event {id}"),
            description: None,
            date: date.to_string(),
            time: None,
            location: None,
            category: EventCategory::Other,
        }
    }

    #[test]
    fn test_empty_index_lookup_returns_empty_slice() {
        let index = EventIndex::from_events(vec![]);
        assert!(index.is_empty());
        assert_eq!(index.events_on("2024-06-15"), &[] as &[CalendarEvent]);
    }

    #[test]
    fn test_groups_by_date_preserving_input_order() {
        let index = EventIndex::from_events(vec![
            event("a", "2024-03-01"),
            event("b", "2024-03-02"),
            event("c", "2024-03-01"),
        ]);

        let day = index.events_on("2024-03-01");
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].id, "a");
        assert_eq!(day[1].id, "c");
        assert_eq!(index.events_on("2024-03-02").len(), 1);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_malformed_dates_are_skipped_without_hiding_the_rest() {
        let index = EventIndex::from_events(vec![
            event("bad", "03/01/2024"),
            event("good", "2024-03-01"),
            event("worse", ""),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.events_on("2024-03-01")[0].id, "good");
        assert_eq!(index.events_on("03/01/2024").len(), 0);
    }
}

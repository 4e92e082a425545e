//! The upcoming-events feed.

use chrono::NaiveDate;

use crate::event::CalendarEvent;

/// The next `limit` events on or after `today`, ascending by date.
///
/// The sort is stable (stdlib guarantee), so events sharing a date keep
/// their input order. Events with unparseable dates are excluded — an
/// explicit contract, not a parsing accident.
pub fn upcoming(events: &[CalendarEvent], today: NaiveDate, limit: usize) -> Vec<CalendarEvent> {
    let mut dated: Vec<(NaiveDate, &CalendarEvent)> = events
        .iter()
        .filter_map(|event| event.parsed_date().map(|date| (date, event)))
        .filter(|(date, _)| *date >= today)
        .collect();

    dated.sort_by_key(|(date, _)| *date);

    dated
        .into_iter()
        .take(limit)
        .map(|(_, event)| event.clone())
        .collect()
}

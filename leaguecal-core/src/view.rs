//! The month-navigation state machine behind every calendar screen.

use std::future::Future;

use chrono::Datelike;

use crate::error::SourceResult;
use crate::event::CalendarEvent;
use crate::grid::MonthGrid;
use crate::index::EventIndex;

/// Backend collaborator that supplies the event list.
///
/// The endpoint takes no parameters: the backend returns its full set and
/// the view filters client-side through the index. Implemented by the HTTP
/// client in leaguecal-cli and by in-memory sources in tests.
pub trait EventSource {
    fn fetch_events(&self) -> impl Future<Output = SourceResult<Vec<CalendarEvent>>> + Send;
}

/// Calendar view state: the displayed (year, month), the current event
/// index, and the last fetch error if the index is a fallback.
///
/// Navigation re-fetches unconditionally — no cross-month caching. Event
/// volumes are small and staleness would be worse than the extra request.
pub struct CalendarView<S: EventSource> {
    source: S,
    year: i32,
    month: u32,
    index: EventIndex,
    fetch_error: Option<String>,
}

impl<S: EventSource> CalendarView<S> {
    /// View positioned at the given month (1-12). Call `refresh` to load
    /// events before rendering.
    pub fn new(source: S, year: i32, month: u32) -> Self {
        CalendarView {
            source,
            year,
            month,
            index: EventIndex::default(),
            fetch_error: None,
        }
    }

    /// View positioned at the system's current month.
    pub fn at_today(source: S) -> Self {
        let today = chrono::Local::now().date_naive();
        CalendarView::new(source, today.year(), today.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn index(&self) -> &EventIndex {
        &self.index
    }

    /// The last fetch's error message, if it failed. Cleared by the next
    /// successful fetch.
    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::new(self.year, self.month)
    }

    /// Fetch events for the currently displayed month and install them.
    pub async fn refresh(&mut self) {
        let tag = (self.year, self.month);
        let result = self.source.fetch_events().await;
        self.apply(tag, result);
    }

    /// Install a completed fetch that was issued for the month `tag`.
    ///
    /// A response for a month the view has already navigated away from is
    /// discarded: a slow fetch must never overwrite the current grid with
    /// stale data. A failed fetch for the current month swaps in an empty
    /// index and records the error, so the renderer shows the empty state
    /// plus an error line instead of crashing or showing old events.
    pub fn apply(&mut self, tag: (i32, u32), result: SourceResult<Vec<CalendarEvent>>) {
        if tag != (self.year, self.month) {
            return;
        }
        match result {
            Ok(events) => {
                self.index = EventIndex::from_events(events);
                self.fetch_error = None;
            }
            Err(err) => {
                self.index = EventIndex::default();
                self.fetch_error = Some(err.to_string());
            }
        }
    }

    /// Advance one month, wrapping December into January of the next year,
    /// and re-fetch.
    pub async fn next(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
        self.refresh().await;
    }

    /// Go back one month, wrapping January into December of the previous
    /// year, and re-fetch.
    pub async fn prev(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
        self.refresh().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::event::EventCategory;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct StaticSource {
        events: Vec<CalendarEvent>,
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    impl EventSource for StaticSource {
        async fn fetch_events(&self) -> SourceResult<Vec<CalendarEvent>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(SourceError::Status(500))
            } else {
                Ok(self.events.clone())
            }
        }
    }

    fn camp_event(date: &str, title: &str) -> CalendarEvent {
        CalendarEvent {
            id: format!("evt-{date}"),
            title: title.to_string(),
            description: None,
            date: date.to_string(),
            time: Some("9:00 AM".to_string()),
            location: Some("Main Gym".to_string()),
            category: EventCategory::Camp,
        }
    }

    #[test]
    fn test_at_today_starts_on_the_current_month() {
        let today = chrono::Local::now().date_naive();
        let view = CalendarView::at_today(StaticSource::default());
        assert_eq!((view.year(), view.month()), (today.year(), today.month()));
    }

    #[tokio::test]
    async fn test_next_wraps_december_into_next_year() {
        let mut view = CalendarView::new(StaticSource::default(), 2024, 12);
        view.next().await;
        assert_eq!((view.year(), view.month()), (2025, 1));
    }

    #[tokio::test]
    async fn test_prev_wraps_january_into_previous_year() {
        let mut view = CalendarView::new(StaticSource::default(), 2024, 1);
        view.prev().await;
        assert_eq!((view.year(), view.month()), (2023, 12));
    }

    #[tokio::test]
    async fn test_navigation_refetches_every_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = StaticSource {
            calls: calls.clone(),
            ..StaticSource::default()
        };
        let mut view = CalendarView::new(source, 2024, 6);

        view.refresh().await;
        view.next().await;
        view.prev().await;
        view.next().await;
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_month_view_shows_only_its_own_days_events() {
        let source = StaticSource {
            events: vec![camp_event("2024-06-15", "Test Camp")],
            ..StaticSource::default()
        };
        let mut view = CalendarView::new(source, 2024, 6);
        view.refresh().await;

        let june_15 = view.grid().cell_date(15);
        let on_day = view.index().events_on(&june_15);
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].title, "Test Camp");
        assert_eq!(on_day[0].category, EventCategory::Camp);

        // July's day 15 has a different key, so its cell stays empty.
        view.next().await;
        let july_15 = view.grid().cell_date(15);
        assert_eq!(july_15, "2024-07-15");
        assert!(view.index().events_on(&july_15).is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_is_contained() {
        let source = StaticSource {
            fail: true,
            ..StaticSource::default()
        };
        let mut view = CalendarView::new(source, 2024, 6);
        view.refresh().await;

        assert!(view.index().is_empty());
        assert_eq!(view.fetch_error(), Some("Backend returned status 500"));
    }

    #[tokio::test]
    async fn test_error_clears_after_successful_fetch() {
        let source = StaticSource::default();
        let mut view = CalendarView::new(source, 2024, 6);
        view.apply((2024, 6), Err(SourceError::Status(502)));
        assert!(view.fetch_error().is_some());

        view.refresh().await;
        assert_eq!(view.fetch_error(), None);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut view = CalendarView::new(StaticSource::default(), 2024, 6);

        // A slow response for May arrives after we've moved to June.
        view.apply((2024, 5), Ok(vec![camp_event("2024-05-01", "Stale Camp")]));
        assert!(view.index().is_empty());

        // One for the current month still applies.
        view.apply((2024, 6), Ok(vec![camp_event("2024-06-01", "Fresh Camp")]));
        assert_eq!(view.index().len(), 1);
    }
}

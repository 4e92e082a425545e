//! Core types and pure calendar logic for the leaguecal tools.
//!
//! This crate provides everything that doesn't touch a terminal or the
//! network:
//! - `CalendarEvent` and `EventCategory` for events as the backend serves them
//! - month-grid math (`MonthGrid`, `days_in_month`, `first_weekday_of_month`)
//! - `EventIndex` for date-keyed lookups
//! - the `upcoming` feed selector
//! - `CalendarView`, the month-navigation state machine, fed through the
//!   `EventSource` trait so clients and tests inject their own backend

pub mod category;
pub mod error;
pub mod event;
pub mod grid;
pub mod index;
pub mod upcoming;
pub mod view;

pub use category::CategoryStyle;
pub use error::{SourceError, SourceResult};
pub use event::{CalendarEvent, DATE_FORMAT, EventCategory};
pub use grid::{MonthGrid, days_in_month, first_weekday_of_month};
pub use index::EventIndex;
pub use upcoming::upcoming;
pub use view::{CalendarView, EventSource};

//! Terminal rendering for calendar data.
//!
//! Colored output via owo_colors. The core crate's hex palette belongs to
//! the web frontend; terminals get the nearest ANSI color here.

use chrono::NaiveDate;
use leaguecal_core::{CalendarEvent, EventCategory, EventIndex, MonthGrid};
use owo_colors::{AnsiColors, OwoColorize};

/// Terminal color for a category dot/tag.
pub fn category_color(category: EventCategory) -> AnsiColors {
    match category {
        EventCategory::Program => AnsiColors::Blue,
        EventCategory::Tournament => AnsiColors::Red,
        EventCategory::Camp => AnsiColors::Green,
        EventCategory::Clinic => AnsiColors::Magenta,
        EventCategory::Workshop => AnsiColors::Yellow,
        EventCategory::Event => AnsiColors::Cyan,
        EventCategory::Other => AnsiColors::White,
    }
}

fn category_tag(category: EventCategory) -> String {
    format!("[{}]", category.label())
        .color(category_color(category))
        .to_string()
}

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// The month grid: title, weekday header, then 7-wide rows. Days with
/// events carry a dot in their first event's category color.
pub fn render_month(grid: &MonthGrid, index: &EventIndex) -> String {
    let mut lines = Vec::new();
    lines.push(grid.title().bold().to_string());

    let header: String = WEEKDAYS.iter().map(|d| format!(" {:>2} ", d)).collect();
    lines.push(header.dimmed().to_string());

    for week in grid.weeks() {
        let mut row = String::new();
        for cell in week {
            match cell {
                Some(day) => {
                    let marker = match index.events_on(&grid.cell_date(day)).first() {
                        Some(event) => "•".color(category_color(event.category)).to_string(),
                        None => " ".to_string(),
                    };
                    row.push_str(&format!(" {:>2}{}", day, marker));
                }
                None => row.push_str("    "),
            }
        }
        lines.push(row);
    }

    lines.join("\n")
}

/// The per-day listing under the grid: every event in the month, in day
/// order, or the dimmed empty state.
pub fn render_month_events(grid: &MonthGrid, index: &EventIndex) -> String {
    let mut lines = Vec::new();

    for day in 1..=grid.days() {
        let date = grid.cell_date(day);
        for event in index.events_on(&date) {
            lines.push(format!("  {} {}", date.dimmed(), event_row(event)));
        }
    }

    if lines.is_empty() {
        return "  No events this month".dimmed().to_string();
    }
    lines.join("\n")
}

/// The upcoming feed, grouped under date labels.
pub fn render_upcoming(events: &[CalendarEvent], today: NaiveDate) -> String {
    if events.is_empty() {
        return "No upcoming events".dimmed().to_string();
    }

    let mut lines = Vec::new();
    let mut current_label: Option<String> = None;

    for event in events {
        let label = date_label(event, today);
        if current_label.as_ref() != Some(&label) {
            if current_label.is_some() {
                lines.push(String::new());
            }
            lines.push(label.bold().to_string());
            current_label = Some(label);
        }
        lines.push(format!("  {}", event_row(event)));
    }

    lines.join("\n")
}

/// Events on a single date, or the dimmed empty state.
pub fn render_day(date: &str, events: &[CalendarEvent]) -> String {
    if events.is_empty() {
        return format!("No events on {}", date).dimmed().to_string();
    }

    events
        .iter()
        .map(|event| format!("  {}", event_row(event)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human date label for the feed (e.g. "Today", "Tomorrow", "Sat Jun 15").
fn date_label(event: &CalendarEvent, today: NaiveDate) -> String {
    match event.parsed_date() {
        Some(date) => match (date - today).num_days() {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            _ => date.format("%a %b %-d").to_string(),
        },
        // Never reached through `upcoming`, which drops unparseable dates.
        None => event.date.clone(),
    }
}

/// One event line: time column, colored category tag, title, location.
fn event_row(event: &CalendarEvent) -> String {
    let time = format!("{:>8}", event.time.as_deref().unwrap_or("all-day"));

    let mut row = format!(
        "{} {} {}",
        time.dimmed(),
        category_tag(event.category),
        event.title
    );
    if let Some(location) = &event.location {
        row.push(' ');
        row.push_str(&format!("@ {}", location).dimmed().to_string());
    }
    row
}

use anyhow::Result;
use chrono::{Datelike, Local};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use leaguecal_core::{CalendarView, EventSource};
use owo_colors::OwoColorize;

use super::fetch_spinner;
use crate::client::Client;
use crate::render;

pub async fn run(
    client: Client,
    year: Option<i32>,
    month: Option<u32>,
    interactive: bool,
) -> Result<()> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());
    anyhow::ensure!((1..=12).contains(&month), "Month must be between 1 and 12");
    // Four-digit years only: date keys are zero-padded YYYY-MM-DD strings.
    anyhow::ensure!((1..=9999).contains(&year), "Year must be between 1 and 9999");

    let mut view = CalendarView::new(client, year, month);

    let spinner = fetch_spinner();
    view.refresh().await;
    spinner.finish_and_clear();
    print_view(&view);

    if !interactive {
        return Ok(());
    }

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(view.grid().title())
            .items(&["Next month", "Previous month", "Quit"])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let spinner = fetch_spinner();
                view.next().await;
                spinner.finish_and_clear();
            }
            1 => {
                let spinner = fetch_spinner();
                view.prev().await;
                spinner.finish_and_clear();
            }
            _ => break,
        }

        println!();
        print_view(&view);
    }

    Ok(())
}

fn print_view<S: EventSource>(view: &CalendarView<S>) {
    println!("{}", render::render_month(&view.grid(), view.index()));
    println!();
    if let Some(err) = view.fetch_error() {
        println!("  {}", err.red());
    }
    println!("{}", render::render_month_events(&view.grid(), view.index()));
}

use anyhow::Result;
use chrono::NaiveDate;
use leaguecal_core::{DATE_FORMAT, EventIndex, EventSource};
use owo_colors::OwoColorize;

use super::fetch_spinner;
use crate::client::Client;
use crate::render;

pub async fn run(client: Client, date: String, json: bool) -> Result<()> {
    // Validate before hitting the network; index keys are exact strings.
    NaiveDate::parse_from_str(&date, DATE_FORMAT)
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", date))?;

    let spinner = fetch_spinner();
    let result = client.fetch_events().await;
    spinner.finish_and_clear();

    match result {
        Ok(events) => {
            let index = EventIndex::from_events(events);
            if json {
                println!("{}", serde_json::to_string_pretty(index.events_on(&date))?);
            } else {
                println!("{}", render::render_day(&date, index.events_on(&date)));
            }
        }
        Err(err) if json => {
            eprintln!("{}", err);
            println!("[]");
        }
        Err(err) => {
            println!("  {}", err.to_string().red());
            println!("{}", format!("No events on {}", date).dimmed());
        }
    }

    Ok(())
}

use anyhow::Result;
use chrono::Local;
use leaguecal_core::{EventSource, upcoming};
use owo_colors::OwoColorize;

use super::fetch_spinner;
use crate::client::Client;
use crate::render;

pub async fn run(client: Client, limit: usize, json: bool) -> Result<()> {
    let spinner = fetch_spinner();
    let result = client.fetch_events().await;
    spinner.finish_and_clear();

    let today = Local::now().date_naive();

    match result {
        Ok(events) => {
            let feed = upcoming(&events, today, limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&feed)?);
            } else {
                println!("{}", render::render_upcoming(&feed, today));
            }
        }
        Err(err) if json => {
            eprintln!("{}", err);
            println!("[]");
        }
        Err(err) => {
            println!("  {}", err.to_string().red());
            println!("{}", "No upcoming events".dimmed());
        }
    }

    Ok(())
}

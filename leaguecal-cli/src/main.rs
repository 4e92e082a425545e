mod client;
mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::Client;

#[derive(Parser)]
#[command(name = "leaguecal")]
#[command(about = "Browse your league's programs, camps and tournaments from the terminal")]
struct Cli {
    /// Backend base URL (overrides $LEAGUECAL_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid with a per-day event listing
    Month {
        /// Year to show (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,

        /// Navigate months with an interactive prompt
        #[arg(short, long)]
        interactive: bool,
    },
    /// List the next scheduled events
    Upcoming {
        /// Maximum number of events to show
        #[arg(short, long, default_value_t = 5)]
        limit: usize,

        /// Print events as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Show events on a single date
    Day {
        /// Date to show (YYYY-MM-DD)
        date: String,

        /// Print events as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = Client::new(&config::resolve_api_url(cli.api_url))?;

    match cli.command {
        Commands::Month {
            year,
            month,
            interactive,
        } => commands::month::run(client, year, month, interactive).await,
        Commands::Upcoming { limit, json } => commands::upcoming::run(client, limit, json).await,
        Commands::Day { date, json } => commands::day::run(client, date, json).await,
    }
}

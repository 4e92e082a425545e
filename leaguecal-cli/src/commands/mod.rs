pub mod day;
pub mod month;
pub mod upcoming;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while waiting on the backend.
pub fn fetch_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["·  ", "·· ", "···", " ··", "  ·", "   "])
            .template("{msg}{spinner}")
            .unwrap(),
    );
    spinner.set_message("Fetching events");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

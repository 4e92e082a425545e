//! HTTP client for the league events backend.

use std::time::Duration;

use leaguecal_core::{CalendarEvent, EventSource, SourceError, SourceResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin wrapper around `reqwest` implementing the core's `EventSource`.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str) -> SourceResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;

        Ok(Client {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /calendar-events` — the backend's full event list as JSON.
    /// No query parameters; month filtering happens client-side through
    /// `EventIndex`.
    async fn get_events(&self) -> SourceResult<Vec<CalendarEvent>> {
        let url = format!("{}/calendar-events", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .json::<Vec<CalendarEvent>>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

impl EventSource for Client {
    async fn fetch_events(&self) -> SourceResult<Vec<CalendarEvent>> {
        self.get_events().await
    }
}

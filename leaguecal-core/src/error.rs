//! Error types for event sources.

use thiserror::Error;

/// Errors an `EventSource` can surface when fetching events.
///
/// The calendar view contains all of these: a failed fetch becomes an empty
/// grid plus an error line, never a crash.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Http(String),

    #[error("Backend returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Result type alias for event-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

//! Backend address resolution.

use std::env;

/// Default backend address when neither `--api-url` nor the environment
/// variable is set.
const DEFAULT_API_URL: &str = "http://127.0.0.1:4000";

const API_URL_VAR: &str = "LEAGUECAL_API_URL";

/// Resolve the backend base URL: flag, then `LEAGUECAL_API_URL`, then the
/// compiled default.
pub fn resolve_api_url(flag: Option<String>) -> String {
    flag.or_else(|| env::var(API_URL_VAR).ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::FetchError;

/// Single-attempt blocking HTTP client. No retries, no backoff.
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Fetcher { client, timeout })
    }

    /// GET `url` and return the decoded body. Any non-2xx status is an error.
    pub fn get(&self, url: &str) -> Result<String, FetchError> {
        info!(url, timeout_secs = self.timeout.as_secs(), "Fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        debug!(url, bytes = body.len(), %status, "Fetched page");
        Ok(body)
    }
}

// ── Tests ──

//! HTTP client for the spreadsheet's published CSV export endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::error::SheetsError;

/// HTTP client for the directory sheet's CSV export.
///
/// Carries a request timeout and connect timeout so a hung upstream cannot
/// hang a sync indefinitely. One attempt per fetch — there is no retry
/// policy; callers degrade to sample data instead.
pub struct SheetsClient {
    client: Client,
}

impl SheetsClient {
    /// Creates a `SheetsClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw CSV document from the export URL.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::UnexpectedStatus`] — any non-2xx status.
    /// - [`SheetsError::EmptyBody`] — 2xx with a blank body.
    /// - [`SheetsError::Http`] — network, TLS, or timeout failure.
    pub async fn fetch_csv(&self, url: &str) -> Result<String, SheetsError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SheetsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(SheetsError::EmptyBody {
                url: url.to_owned(),
            });
        }

        Ok(body)
    }
}

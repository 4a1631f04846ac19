//! HTTP client for fetching category listing pages.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::ScanError;
use crate::retry::retry_with_backoff;

/// Fetches storefront category pages with a configured timeout, `User-Agent`,
/// and retry policy.
///
/// Rate limiting (429), not-found (404), and other non-2xx responses are
/// surfaced as typed errors. Transient errors (429, network failures) are
/// automatically retried with exponential backoff up to `max_retries`
/// additional attempts.
pub struct CategoryClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl CategoryClient {
    /// Creates a `CategoryClient` with configured timeout, `User-Agent`, and
    /// retry policy. Set `max_retries` to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScanError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches a category page and returns its HTML body, with automatic
    /// retry on transient errors.
    ///
    /// # Errors
    ///
    /// - [`ScanError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`ScanError::NotFound`] — HTTP 404 (not retried).
    /// - [`ScanError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScanError::Http`] — network or TLS failure after all retries exhausted.
    pub async fn fetch_category_page(&self, url: &str) -> Result<String, ScanError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            self.fetch_once(url)
        })
        .await
    }

    async fn fetch_once(&self, url: &str) -> Result<String, ScanError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok())
                .unwrap_or(1);
            return Err(ScanError::RateLimited {
                url: url.to_owned(),
                retry_after_secs,
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ScanError::NotFound {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            return Err(ScanError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        tracing::debug!(%url, "fetched category page");
        Ok(response.text().await?)
    }
}

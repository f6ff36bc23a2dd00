use crate::error::{Result, ScrapeError};
use async_trait::async_trait;

/// Status and body of one GET
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// URL that was requested
    pub url: String,
    pub status: u16,
    pub text: String,
}

impl FetchResponse {
    pub fn new(url: impl Into<String>, status: u16, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            text: text.into(),
        }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`ScrapeError::Status`]
    pub fn ensure_success(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ScrapeError::Status {
                url: self.url,
                status: self.status,
            })
        }
    }
}

/// Issues page requests on behalf of a scraper.
///
/// One fetcher is owned by one scraper for the duration of a scrape.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Perform a single GET. Transport failures are errors; HTTP error
    /// statuses are returned as responses.
    async fn get(&self, url: &str) -> Result<FetchResponse>;

    /// Release any session held by the fetcher
    async fn close(&self) {}
}

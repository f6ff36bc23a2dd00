use crate::config::ScraperConfig;
use crate::crawlers::crawler::{FetchResponse, Fetcher};
use crate::error::{Result, ScrapeError};
use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::timeout;

/// Fetches rendered page source through a WebDriver server.
///
/// WebDriver exposes no HTTP status, so every page that loads is reported as 200
/// and navigation failures surface as errors.
pub struct WebDriverFetcher {
    webdriver_url: String,
    page_timeout: Duration,
    client: Mutex<Option<Client>>,
}

impl WebDriverFetcher {
    pub fn new(config: &ScraperConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            page_timeout: Duration::from_secs(config.timeout_secs),
            client: Mutex::new(None),
        }
    }

    pub fn webdriver_url(&self) -> &str {
        &self.webdriver_url
    }

    async fn navigate(&self, client: &Client, url: &str) -> Result<String> {
        client.goto(url).await?;
        Ok(client.source().await?)
    }
}

/// Connects to the WebDriver instance, trying common local ports when the configured one fails
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client> {
    let first_error = match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            e
        }
    };

    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://127.0.0.1:4444",
    ];

    for url in fallback_urls.iter() {
        if *url == webdriver_url {
            continue;
        }
        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(first_error.into())
}

#[async_trait]
impl Fetcher for WebDriverFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        let mut guard = self.client.lock().await;

        // Connect lazily so a scrape that never fetches never starts a browser
        if guard.is_none() {
            *guard = Some(connect_to_webdriver(&self.webdriver_url).await?);
        }
        let client = guard
            .as_ref()
            .ok_or_else(|| ScrapeError::WebDriver("no WebDriver session".to_string()))?;

        ::log::debug!("WebDriver GET {}", url);
        let source = match timeout(self.page_timeout, self.navigate(client, url)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(ScrapeError::WebDriver(format!("timeout loading {}", url)));
            }
        };

        Ok(FetchResponse::new(url, 200, source))
    }

    async fn close(&self) {
        if let Some(client) = self.client.lock().await.take() {
            if let Err(e) = client.close().await {
                ::log::warn!("Failed to close WebDriver session: {}", e);
            }
        }
    }
}

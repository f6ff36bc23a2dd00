pub mod config;
pub mod crawlers;
pub mod error;
pub mod pages;
pub mod parsers;
pub mod results;
pub mod standout;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types for convenience
pub use config::{FetcherKind, ScraperConfig, SelectorConfig};
pub use error::{Result, ScrapeError};
pub use results::{JobDetail, JobPost, JobResponse, JobSummary, ScraperInput, Site};
pub use standout::{Scraper, StandOutScraper};

use crawlers::WebDriverFetcher;
use std::path::Path;

/// Builder for a single StandOutSearch scrape
pub struct Jobs {
    config: ScraperConfig,
    input: ScraperInput,
}

impl Default for Jobs {
    fn default() -> Self {
        Self::new()
    }
}

impl Jobs {
    /// Scrape the live site with default settings
    pub fn new() -> Self {
        Self {
            config: ScraperConfig::default(),
            input: ScraperInput::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let config = ScraperConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self> {
        let config = ScraperConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Set the maximum number of jobs to return
    pub fn with_results_wanted(mut self, results_wanted: usize) -> Self {
        self.input.results_wanted = results_wanted;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    /// Set the pause between listing pages
    pub fn with_delay(mut self, delay_secs: u64) -> Self {
        self.config.delay_secs = delay_secs;
        self
    }

    /// Set how many detail pages may be fetched at once
    pub fn with_detail_concurrency(mut self, detail_concurrency: usize) -> Self {
        self.config.detail_concurrency = detail_concurrency;
        self
    }

    pub fn with_proxies(mut self, proxies: Vec<String>) -> Self {
        self.config.proxies = proxies;
        self
    }

    pub fn with_fetcher(mut self, fetcher: FetcherKind) -> Self {
        self.config.fetcher = fetcher;
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Run the scrape with the configured fetcher
    pub async fn generate(self) -> Result<JobResponse> {
        let Jobs { mut config, input } = self;

        match config.fetcher {
            FetcherKind::Http => {
                let scraper = StandOutScraper::new(config)?;
                Ok(scraper.scrape(&input).await)
            }
            FetcherKind::WebDriver => {
                // Override the WebDriver URL with an environment variable if provided
                if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
                    if !webdriver_url.is_empty() {
                        config.webdriver_url = webdriver_url;
                    }
                }
                let fetcher = WebDriverFetcher::new(&config);
                let scraper = StandOutScraper::with_fetcher(config, fetcher)?;
                Ok(scraper.scrape(&input).await)
            }
        }
    }
}

use crate::config::ScraperConfig;
use crate::crawlers::{Fetcher, HttpFetcher};
use crate::error::Result;
use crate::pages::{Pagination, Step, StopReason};
use crate::parsers::{Selectors, detail, listing};
use crate::results::{JobDetail, JobPost, JobResponse, JobSummary, ScraperInput, Site};
use crate::utils::listing_url;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::time::Duration;
use url::Url;

/// A site scraper pluggable into the multi-site aggregator
#[async_trait]
pub trait Scraper {
    /// The site this scraper reads
    fn site(&self) -> Site;

    /// Collect at most `input.results_wanted` jobs
    async fn scrape(&self, input: &ScraperInput) -> JobResponse;
}

/// Scraper for StandOutSearch listing and detail pages
pub struct StandOutScraper<F: Fetcher = HttpFetcher> {
    config: ScraperConfig,
    selectors: Selectors,
    fetcher: F,
}

impl StandOutScraper<HttpFetcher> {
    /// Create a scraper backed by a plain HTTP fetcher
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: Fetcher> StandOutScraper<F> {
    /// Create a scraper around any fetcher. Fails on an invalid base URL or selector.
    pub fn with_fetcher(config: ScraperConfig, fetcher: F) -> Result<Self> {
        Url::parse(&config.base_url)?;
        let selectors = Selectors::compile(&config.selectors)?;
        Ok(Self {
            config,
            selectors,
            fetcher,
        })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn delay(&self) -> Duration {
        Duration::from_secs(self.config.delay_secs)
    }

    /// Fetch one listing page and merge every job with its detail page
    pub async fn extract_listing(&self, page: u32) -> Vec<JobPost> {
        let summaries = self.fetch_listing(page).await;
        self.merge_details(summaries).await
    }

    /// Fetch one listing page and return its job summaries.
    ///
    /// A failed request or non-2xx status yields no summaries, which the walker
    /// reads as the end of the results.
    pub async fn fetch_listing(&self, page: u32) -> Vec<JobSummary> {
        let url = match listing_url(&self.config.base_url, &self.config.listing_path, page) {
            Ok(url) => url,
            Err(e) => {
                ::log::error!("Cannot build URL for page {}: {}", page, e);
                return Vec::new();
            }
        };

        let response = match self.fetcher.get(url.as_str()).await {
            Ok(response) => response,
            Err(e) => {
                ::log::error!("Failed to fetch page {}: {}", page, e);
                return Vec::new();
            }
        };
        if !response.is_success() {
            ::log::error!("Failed to fetch page {}: {}", page, response.status);
            return Vec::new();
        }

        let listing = listing::parse(&response.text, &self.selectors, &self.config.base_url);
        ::log::debug!(
            "Page {}: {} job cards, {} usable, {} skipped",
            page,
            listing.containers,
            listing.summaries.len(),
            listing.skipped
        );
        listing.summaries
    }

    /// Attach detail fields to each summary, keeping the input order
    pub async fn merge_details(&self, summaries: Vec<JobSummary>) -> Vec<JobPost> {
        let concurrency = self.config.detail_concurrency.max(1);
        stream::iter(summaries)
            .map(|summary| async move {
                let detail = self.fetch_detail(&summary.job_url).await;
                JobPost::new(summary, detail)
            })
            .buffered(concurrency)
            .collect::<Vec<_>>()
            .await
    }

    /// Fetch and parse a detail page. Any failure leaves every field empty.
    pub async fn fetch_detail(&self, job_url: &str) -> JobDetail {
        match self.try_fetch_detail(job_url).await {
            Ok(detail) => detail,
            Err(e) => {
                ::log::warn!("Keeping {} without details: {}", job_url, e);
                JobDetail::default()
            }
        }
    }

    /// Fetch and parse a detail page, reporting transport and status errors
    pub async fn try_fetch_detail(&self, job_url: &str) -> Result<JobDetail> {
        let response = self.fetcher.get(job_url).await?.ensure_success()?;
        Ok(detail::parse(&response.text, &self.selectors))
    }
}

#[async_trait]
impl<F: Fetcher> Scraper for StandOutScraper<F> {
    fn site(&self) -> Site {
        Site::StandOutSearch
    }

    async fn scrape(&self, input: &ScraperInput) -> JobResponse {
        let quota = input.results_wanted;
        let mut pages = Pagination::new(quota);
        let mut jobs: Vec<JobPost> = Vec::new();

        let mut step = pages.step();
        while let Step::Fetch(page) = step {
            if page > 1 && self.config.delay_secs > 0 {
                tokio::time::sleep(self.delay()).await;
            }

            ::log::info!("StandOutSearch search page: {}", page);
            let summaries = self.fetch_listing(page).await;
            let found = summaries.len();

            // Only jobs that can still make the cut get a detail fetch
            let batch: Vec<_> = summaries.into_iter().take(pages.remaining()).collect();
            let kept = batch.len();
            jobs.extend(self.merge_details(batch).await);

            step = pages.complete_page(found, kept);
        }

        match step {
            Step::Stop(StopReason::QuotaReached) => {
                ::log::info!(
                    "StandOutSearch quota of {} reached after {} pages",
                    quota,
                    pages.page() - 1
                );
            }
            Step::Stop(StopReason::EndOfResults { page }) => {
                ::log::info!(
                    "StandOutSearch page {} has no jobs, stopping with {} collected",
                    page,
                    pages.collected()
                );
            }
            Step::Fetch(_) => {}
        }

        self.fetcher.close().await;

        jobs.truncate(quota);
        ::log::info!("StandOutSearch collected {} jobs", jobs.len());
        JobResponse::new(jobs)
    }
}

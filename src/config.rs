use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Which backend performs page fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetcherKind {
    /// Plain HTTP GET via reqwest
    #[default]
    Http,
    /// Rendered page source via a WebDriver server
    WebDriver,
}

/// Configuration for the StandOutSearch scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Site root; listing and relative detail URLs are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the paginated listing endpoint
    #[serde(default = "default_listing_path")]
    pub listing_path: String,

    /// Seconds to wait between listing page fetches
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,

    /// Maximum number of detail pages fetched at once
    #[serde(default = "default_detail_concurrency")]
    pub detail_concurrency: usize,

    /// Fetch backend
    #[serde(default)]
    pub fetcher: FetcherKind,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Proxy URLs, rotated per request
    #[serde(default)]
    pub proxies: Vec<String>,

    /// User-Agent header sent with every HTTP request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Selector mapping for listing and detail pages
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// A detail field addressed by its label text and the tag of the sibling holding the value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledField {
    pub label: String,
    pub sibling: String,
}

impl LabeledField {
    pub fn new(label: &str, sibling: &str) -> Self {
        Self {
            label: label.to_string(),
            sibling: sibling.to_string(),
        }
    }
}

/// CSS selectors for every field the scraper reads.
///
/// The defaults are the generated class names of the live site. Markup changes
/// should only ever need a new mapping here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// One job card on a listing page
    pub job_card: String,
    pub title: String,
    pub company: String,
    pub deadline: String,
    /// Anchor carrying the detail page `href`
    pub link: String,

    /// Label elements on a detail page
    pub detail_label: String,
    pub location: LabeledField,
    pub address: LabeledField,
    pub mode: LabeledField,
    pub description: LabeledField,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            job_card: "div.chakra-box".to_string(),
            title: "p.chakra-text.css-134zrag".to_string(),
            company: "p.chakra-text.css-14pw5qv".to_string(),
            deadline: "span.css-111tzkx".to_string(),
            link: "a.chakra-link.chakra-button.css-19vrdtv".to_string(),
            detail_label: "p.chakra-text.css-i3b6lo".to_string(),
            location: LabeledField::new("Location:", "span"),
            address: LabeledField::new("Address:", "p"),
            mode: LabeledField::new("Mode:", "span"),
            description: LabeledField::new("Description:", "p"),
        }
    }
}

fn default_base_url() -> String {
    "https://www.standoutsearch.com".to_string()
}

fn default_listing_path() -> String {
    "/jobs".to_string()
}

fn default_delay_secs() -> u64 {
    5
}

fn default_detail_concurrency() -> usize {
    1
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            listing_path: default_listing_path(),
            delay_secs: default_delay_secs(),
            detail_concurrency: default_detail_concurrency(),
            fetcher: FetcherKind::default(),
            webdriver_url: default_webdriver_url(),
            proxies: Vec::new(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Create a configuration for the given site root with default values
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

use clap::{Parser, ValueEnum};
use standout_scrape::FetcherKind;

#[derive(Parser, Debug)]
#[command(name = "standout-scrape")]
#[command(about = "Scrapes job postings from StandOutSearch and prints them as JSON")]
#[command(version)]
pub struct Args {
    /// JSON configuration file (base URL, selectors, proxies, ...)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Maximum number of jobs to return
    #[arg(short = 'n', long, default_value_t = 15)]
    pub results_wanted: usize,

    /// Override the site root
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the delay between listing pages, in seconds
    #[arg(short, long)]
    pub delay: Option<u64>,

    /// Override the number of detail pages fetched at once
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Proxy URL; repeat to rotate over several
    #[arg(long = "proxy")]
    pub proxies: Vec<String>,

    /// Fetch backend
    #[arg(short, long, value_enum)]
    pub fetcher: Option<FetcherArg>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FetcherArg {
    Http,
    Webdriver,
}

/// Convert from CLI argument fetcher to the configured fetcher kind
pub fn convert_fetcher(arg: FetcherArg) -> FetcherKind {
    match arg {
        FetcherArg::Http => FetcherKind::Http,
        FetcherArg::Webdriver => FetcherKind::WebDriver,
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Job boards known to the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Site {
    StandOutSearch,
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::StandOutSearch => write!(f, "stand_out_search"),
        }
    }
}

/// Search criteria shared by every site scraper.
///
/// Only `results_wanted` drives this scraper; the remaining fields belong to the
/// multi-site interface and are accepted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperInput {
    #[serde(default)]
    pub site_type: Vec<Site>,
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default = "default_results_wanted")]
    pub results_wanted: usize,
    #[serde(default)]
    pub hours_old: Option<u32>,
    #[serde(default)]
    pub offset: usize,
}

fn default_results_wanted() -> usize {
    15
}

impl Default for ScraperInput {
    fn default() -> Self {
        Self {
            site_type: vec![Site::StandOutSearch],
            search_term: None,
            location: None,
            is_remote: false,
            results_wanted: default_results_wanted(),
            hours_old: None,
            offset: 0,
        }
    }
}

impl ScraperInput {
    /// Criteria asking for at most `results_wanted` jobs
    pub fn new(results_wanted: usize) -> Self {
        Self {
            results_wanted,
            ..Self::default()
        }
    }
}

/// Fields read from one job card on a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub title: String,
    pub company_name: String,
    /// Site-native text, not parsed
    pub deadline: Option<String>,
    /// Absolute detail page URL
    pub job_url: String,
}

/// Fields read from a job's detail page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetail {
    pub location: Option<String>,
    pub address: Option<String>,
    pub mode: Option<String>,
    pub description: Option<String>,
}

/// A complete job record: listing summary merged with its detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPost {
    pub title: String,
    pub company_name: String,
    pub deadline: Option<String>,
    pub job_url: String,
    pub location: Option<String>,
    pub address: Option<String>,
    pub mode: Option<String>,
    pub description: Option<String>,
}

impl JobPost {
    /// Merge a listing summary with the fields from its detail page
    pub fn new(summary: JobSummary, detail: JobDetail) -> Self {
        Self {
            title: summary.title,
            company_name: summary.company_name,
            deadline: summary.deadline,
            job_url: summary.job_url,
            location: detail.location,
            address: detail.address,
            mode: detail.mode,
            description: detail.description,
        }
    }
}

/// Ordered jobs returned by one scrape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResponse {
    pub jobs: Vec<JobPost>,
}

impl JobResponse {
    pub fn new(jobs: Vec<JobPost>) -> Self {
        Self { jobs }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

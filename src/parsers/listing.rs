use crate::error::{Result, ScrapeError};
use crate::parsers::Selectors;
use crate::parsers::html::select_text;
use crate::results::JobSummary;
use crate::utils::resolve_url;
use scraper::{ElementRef, Html};

/// Job summaries found on one listing page
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    /// Cards that produced a complete summary, in page order
    pub summaries: Vec<JobSummary>,
    /// Number of job cards matched on the page
    pub containers: usize,
    /// Cards dropped for a missing mandatory field
    pub skipped: usize,
}

/// Parses a listing page into job summaries, skipping malformed cards
pub fn parse(html: &str, selectors: &Selectors, base_url: &str) -> ListingPage {
    let doc = Html::parse_document(html);
    let mut page = ListingPage::default();

    for card in doc.select(&selectors.job_card) {
        page.containers += 1;
        match parse_card(card, selectors, base_url) {
            Ok(summary) => page.summaries.push(summary),
            Err(e) => {
                page.skipped += 1;
                ::log::warn!("Skipping job card {}: {}", page.containers, e);
            }
        }
    }

    ::log::debug!(
        "Listing parser matched {} cards, kept {}",
        page.containers,
        page.summaries.len()
    );
    page
}

/// Extracts one summary; title, company and link are mandatory
pub fn parse_card(card: ElementRef<'_>, selectors: &Selectors, base_url: &str) -> Result<JobSummary> {
    let title = select_text(card, &selectors.title).ok_or(ScrapeError::MissingField("title"))?;
    let company_name =
        select_text(card, &selectors.company).ok_or(ScrapeError::MissingField("company"))?;
    let deadline = select_text(card, &selectors.deadline);

    let href = card
        .select(&selectors.link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .ok_or(ScrapeError::MissingField("href"))?;
    let job_url = resolve_url(base_url, href)?.to_string();

    Ok(JobSummary {
        title,
        company_name,
        deadline,
        job_url,
    })
}

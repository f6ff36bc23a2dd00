//! Fixture markup and an in-memory fetcher shared by unit tests

use crate::crawlers::{FetchResponse, Fetcher};
use crate::error::{Result, ScrapeError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// One job card in the site's markup
pub(crate) fn job_card(title: &str, company: &str, deadline: Option<&str>, href: &str) -> String {
    let deadline = deadline
        .map(|d| format!(r#"<span class="css-111tzkx">{}</span>"#, d))
        .unwrap_or_default();
    format!(
        r#"<div class="chakra-box">
             <p class="chakra-text css-134zrag">{}</p>
             <p class="chakra-text css-14pw5qv">{}</p>
             {}
             <a class="chakra-link chakra-button css-19vrdtv" href="{}">View</a>
           </div>"#,
        title, company, deadline, href
    )
}

/// A listing page wrapping the given cards
pub(crate) fn listing_page(cards: &[String]) -> String {
    format!(
        "<html><body><main>{}</main></body></html>",
        cards.concat()
    )
}

/// A detail page with one labeled row per `(label, sibling tag, value)`
pub(crate) fn detail_page(rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(label, tag, value)| {
            format!(
                r#"<div class="row"><p class="chakra-text css-i3b6lo">{}</p><{tag}>{}</{tag}></div>"#,
                label,
                value,
                tag = tag
            )
        })
        .collect();
    format!("<html><body><section>{}</section></body></html>", body)
}

/// Fetcher serving canned responses and recording every requested URL.
///
/// Unknown URLs answer 404.
#[derive(Default)]
pub(crate) struct StaticFetcher {
    pages: HashMap<String, FetchResponse>,
    failing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200
    pub(crate) fn page(mut self, url: &str, body: impl Into<String>) -> Self {
        self.pages
            .insert(url.to_string(), FetchResponse::new(url, 200, body));
        self
    }

    /// Serve an empty body with the given status
    pub(crate) fn status(mut self, url: &str, status: u16) -> Self {
        self.pages
            .insert(url.to_string(), FetchResponse::new(url, status, ""));
        self
    }

    /// Fail requests to `url` with a transport error
    pub(crate) fn broken(mut self, url: &str) -> Self {
        self.failing.push(url.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests whose URL contains `fragment`
    pub(crate) fn count(&self, fragment: &str) -> usize {
        self.calls().iter().filter(|url| url.contains(fragment)).count()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.failing.iter().any(|u| u == url) {
            return Err(ScrapeError::WebDriver(format!("connection reset: {}", url)));
        }
        Ok(self
            .pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| FetchResponse::new(url, 404, "")))
    }
}

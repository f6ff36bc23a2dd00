use crate::error::Result;
use url::Url;

/// Build the listing URL for a 1-based page number.
///
/// `listing_path` is appended to the path of `base_url`, never resolved over it.
pub fn listing_url(base_url: &str, listing_path: &str, page: u32) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    let path = format!(
        "{}/{}",
        url.path().trim_end_matches('/'),
        listing_path.trim_start_matches('/')
    );
    url.set_path(&path);
    url.set_query(None);
    url.query_pairs_mut().append_pair("page", &page.to_string());
    Ok(url)
}

/// Resolve a detail `href` against the site root; absolute hrefs pass through
pub fn resolve_url(base_url: &str, href: &str) -> Result<Url> {
    Ok(Url::parse(base_url)?.join(href.trim())?)
}

/// Collapse the text nodes of an element the way a reader sees them
pub fn clean_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

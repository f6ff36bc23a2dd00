use crate::error::{Result, ScrapeError};
use crate::utils::clean_text;
use scraper::{ElementRef, Html, Selector};

/// Parse a CSS selector, keeping the offending string in the error
pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Whitespace-normalized text of an element and its descendants
pub fn element_text(element: ElementRef<'_>) -> String {
    clean_text(element.text())
}

/// Text of the first match under `scope`, `None` when absent or blank
pub fn select_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// First element matching `selector` whose text is exactly `label`
pub fn find_labeled<'a>(doc: &'a Html, selector: &Selector, label: &str) -> Option<ElementRef<'a>> {
    doc.select(selector).find(|el| element_text(*el) == label)
}

/// Next element sibling with the given tag name, skipping others in between
pub fn next_sibling_named<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name().eq_ignore_ascii_case(tag))
}

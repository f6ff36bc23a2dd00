use crate::parsers::html::{element_text, find_labeled, next_sibling_named};
use crate::parsers::{LabelRule, Selectors};
use crate::results::JobDetail;
use scraper::Html;

/// Parses a job detail page. Missing labels leave their field empty.
pub fn parse(html: &str, selectors: &Selectors) -> JobDetail {
    let doc = Html::parse_document(html);

    JobDetail {
        location: labeled_value(&doc, selectors, &selectors.location),
        address: labeled_value(&doc, selectors, &selectors.address),
        mode: labeled_value(&doc, selectors, &selectors.mode),
        description: labeled_value(&doc, selectors, &selectors.description),
    }
}

fn labeled_value(doc: &Html, selectors: &Selectors, rule: &LabelRule) -> Option<String> {
    let label = find_labeled(doc, &selectors.detail_label, &rule.label)?;
    let value = next_sibling_named(label, &rule.sibling)?;
    Some(element_text(value))
}

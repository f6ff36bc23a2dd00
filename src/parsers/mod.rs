pub mod detail;
pub mod html;
pub mod listing;


use crate::config::{LabeledField, SelectorConfig};
use crate::error::Result;
use scraper::Selector;

/// A detail field lookup: label text plus the tag of the sibling holding the value
#[derive(Debug, Clone)]
pub struct LabelRule {
    pub label: String,
    pub sibling: String,
}

impl From<&LabeledField> for LabelRule {
    fn from(field: &LabeledField) -> Self {
        Self {
            label: field.label.trim().to_string(),
            sibling: field.sibling.trim().to_ascii_lowercase(),
        }
    }
}

/// Compiled form of [`SelectorConfig`], built once per scraper
#[derive(Debug, Clone)]
pub struct Selectors {
    pub job_card: Selector,
    pub title: Selector,
    pub company: Selector,
    pub deadline: Selector,
    pub link: Selector,
    pub detail_label: Selector,
    pub location: LabelRule,
    pub address: LabelRule,
    pub mode: LabelRule,
    pub description: LabelRule,
}

impl Selectors {
    /// Compile every selector in the mapping, failing on the first invalid one
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            job_card: html::parse_selector(&config.job_card)?,
            title: html::parse_selector(&config.title)?,
            company: html::parse_selector(&config.company)?,
            deadline: html::parse_selector(&config.deadline)?,
            link: html::parse_selector(&config.link)?,
            detail_label: html::parse_selector(&config.detail_label)?,
            location: LabelRule::from(&config.location),
            address: LabelRule::from(&config.address),
            mode: LabelRule::from(&config.mode),
            description: LabelRule::from(&config.description),
        })
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::compile(&SelectorConfig::default()).expect("Default selectors should be valid")
    }
}

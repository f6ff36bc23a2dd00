use thiserror::Error;

/// Errors raised while configuring or running a scrape
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("WebDriver error: {0}")]
    WebDriver(String),

    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("missing mandatory field `{0}`")]
    MissingField(&'static str),
}

impl From<fantoccini::error::CmdError> for ScrapeError {
    fn from(e: fantoccini::error::CmdError) -> Self {
        ScrapeError::WebDriver(e.to_string())
    }
}

impl From<fantoccini::error::NewSessionError> for ScrapeError {
    fn from(e: fantoccini::error::NewSessionError) -> Self {
        ScrapeError::WebDriver(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

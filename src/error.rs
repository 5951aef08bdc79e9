use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Request to the store failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response status: {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("Could not find required element on the page: {0}")]
    ElementNotFound(String),

    #[error("Failed to parse page content: {0}")]
    ParsingError(String),

    #[error("Unrecognized store category: {0:?}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ScraperError>;

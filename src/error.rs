//! Error type shared by every stage of the quote pipeline.
//!
//! Menu choices and oversized quote counts are recovered by re-prompting in
//! [`crate::prompt`]; everything that ends up here terminates the run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A structural element the publisher layout relies on is absent.
    #[error("{publisher} page has no element matching `{selector}`")]
    MissingElement {
        publisher: &'static str,
        selector: &'static str,
    },

    #[error("No supported publisher for {0}")]
    UnsupportedPublisher(String),

    #[error("Number of random quotes, {requested}, exceeds number of sentences, {available}")]
    TooManyQuotes { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, QuoteError>;

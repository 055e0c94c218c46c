//! Data models for articles and the reports produced from them.
//!
//! - [`Article`]: headline, author and body pulled from a page or a text file
//! - [`Quote`]: one sampled sentence with its 1-based draw number
//! - [`Report`]: the serializable result of a single run

use serde::{Deserialize, Serialize};

/// A news article (or plain text document) reduced to the three fields the
/// quote pipeline needs.
///
/// Built once by an extractor or by [`Article::from_text_file`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// The article headline, or the file name for local documents.
    pub headline: String,
    /// The byline as it appears on the page. Empty for local documents.
    pub author: String,
    /// The full body text, whitespace preserved.
    pub body: String,
}

impl Article {
    /// Wrap the contents of a local text file.
    pub fn from_text_file(file_name: &str, body: String) -> Self {
        Self {
            headline: file_name.to_string(),
            author: String::new(),
            body,
        }
    }
}

/// A sentence drawn by the sampler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quote {
    /// Position in draw order, starting at 1.
    pub number: usize,
    pub text: String,
}

impl Quote {
    /// Number a list of drawn sentences in the order they were drawn.
    pub fn numbered(sentences: Vec<String>) -> Vec<Quote> {
        sentences
            .into_iter()
            .enumerate()
            .map(|(i, text)| Quote { number: i + 1, text })
            .collect()
    }
}

/// Result of one run, tagged by the mode that produced it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Report {
    Random {
        source: String,
        headline: String,
        author: String,
        sentence_count: usize,
        quotes: Vec<Quote>,
    },
    Smart {
        source: String,
        headline: String,
        author: String,
        summary: String,
        keywords: Vec<String>,
    },
}

impl Report {
    pub fn headline(&self) -> &str {
        match self {
            Report::Random { headline, .. } | Report::Smart { headline, .. } => headline,
        }
    }
}

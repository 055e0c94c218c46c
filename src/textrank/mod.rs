//! Smart quotes: extractive summaries and keywords via TextRank.
//!
//! The rest of the crate only sees the [`SummaryReporter`] trait; [`TextRank`]
//! is the one implementation. Input is expected one sentence per line, which
//! is what [`crate::text::reformat`] produces.
//!
//! - [`graph`]: weighted undirected graph and PageRank
//! - `summary`: sentence graph, similarity by shared words
//! - `keywords`: word co-occurrence graph, phrase merging
//! - [`stopwords`] and [`tokens`]: text normalisation

pub mod graph;
mod keywords;
pub mod stopwords;
mod summary;
pub mod tokens;

use graph::PageRank;
use stopwords::StopwordFilter;
use tracing::instrument;

/// Default length of a smart quote, in words.
pub const DEFAULT_SUMMARY_WORDS: usize = 30;
/// Default share of ranked words kept as keywords.
pub const DEFAULT_KEYWORD_RATIO: f64 = 0.2;

/// Summaries and key terms for a block of text.
pub trait SummaryReporter {
    /// A short extractive summary; selected lines joined by `\n`, empty when
    /// nothing could be ranked.
    fn summarize(&self, text: &str) -> String;

    /// Ranked key terms, best first, one per line.
    fn extract_keywords(&self, text: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct TextRankConfig {
    /// Target summary length in words.
    pub summary_words: usize,
    /// Fraction of connected words kept as keywords (at least one).
    pub keyword_ratio: f64,
    /// Co-occurrence window for the keyword graph, in tokens.
    pub window: usize,
    pub pagerank: PageRank,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            summary_words: DEFAULT_SUMMARY_WORDS,
            keyword_ratio: DEFAULT_KEYWORD_RATIO,
            window: 2,
            pagerank: PageRank::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextRank {
    config: TextRankConfig,
    stopwords: StopwordFilter,
}

impl Default for TextRank {
    fn default() -> Self {
        Self::new(TextRankConfig::default())
    }
}

impl TextRank {
    pub fn new(config: TextRankConfig) -> Self {
        Self {
            config,
            stopwords: StopwordFilter::english(),
        }
    }

    pub fn with_summary_words(mut self, words: usize) -> Self {
        self.config.summary_words = words;
        self
    }

    pub fn with_keyword_ratio(mut self, ratio: f64) -> Self {
        self.config.keyword_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Keywords as a list rather than a newline-joined string.
    pub fn keyword_list(&self, text: &str) -> Vec<String> {
        keywords::extract(
            text,
            self.config.keyword_ratio,
            self.config.window,
            &self.config.pagerank,
            &self.stopwords,
        )
    }
}

impl SummaryReporter for TextRank {
    #[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
    fn summarize(&self, text: &str) -> String {
        summary::summarize(
            text,
            self.config.summary_words,
            &self.config.pagerank,
            &self.stopwords,
        )
    }

    #[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
    fn extract_keywords(&self, text: &str) -> String {
        self.keyword_list(text).join("\n")
    }
}

//! Command-line interface definitions for Quote Search.
//!
//! Every interactive question has a flag counterpart. Anything left out on
//! the command line is asked for on the console, so running with no
//! arguments gives the fully interactive session.

use crate::scrapers::Publisher;
use crate::textrank::{DEFAULT_KEYWORD_RATIO, DEFAULT_SUMMARY_WORDS};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for Quote Search.
///
/// # Examples
///
/// ```sh
/// # Fully interactive
/// quote_search
///
/// # Three random quotes from a local file
/// quote_search --file speech --mode random --count 3
///
/// # Smart quote from an article, as JSON
/// quote_search --url https://www.nbcnews.com/news/weather/forecasters-predicting-snow-hawaii-rcna7613 \
///     --mode smart --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Text file to quote from (".txt" is appended when missing)
    #[arg(short, long, conflicts_with = "url")]
    pub file: Option<String>,

    /// Article URL to quote from
    #[arg(short, long)]
    pub url: Option<String>,

    /// Page layout to use for --url (inferred from the host when omitted)
    #[arg(short, long, value_enum, requires = "url")]
    pub publisher: Option<Publisher>,

    /// Random quotes or a single smart quote
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of random quotes to pull
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Target length of the smart quote, in words
    #[arg(long, default_value_t = DEFAULT_SUMMARY_WORDS)]
    pub words: usize,

    /// Share of ranked words reported as keywords
    #[arg(long, default_value_t = DEFAULT_KEYWORD_RATIO)]
    pub keyword_ratio: f64,

    /// Print the headline, author and full text before the quotes
    #[arg(long)]
    pub show_article: bool,

    /// Print the result as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// List the built-in sample article URLs and exit
    #[arg(long)]
    pub list_samples: bool,
}

/// What to pull out of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// A non-repeating random sample of sentences
    Random,
    /// A TextRank summary plus keywords
    Smart,
}

/// Where the text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url {
        url: String,
        publisher: Option<Publisher>,
    },
}

impl Source {
    /// Human-readable origin for reports.
    pub fn describe(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Url { url, .. } => url.clone(),
        }
    }
}

impl Cli {
    /// The source given on the command line, if any.
    pub fn source(&self) -> Option<Source> {
        if let Some(file) = &self.file {
            return Some(Source::File(crate::utils::with_txt_extension(file).into()));
        }
        self.url.as_ref().map(|url| Source::Url {
            url: url.clone(),
            publisher: self.publisher,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_arguments_is_interactive() {
        let cli = Cli::parse_from(["quote_search"]);
        assert_eq!(cli.source(), None);
        assert_eq!(cli.mode, None);
        assert_eq!(cli.count, None);
        assert_eq!(cli.words, 30);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_file_gets_txt_extension() {
        let cli = Cli::parse_from(["quote_search", "-f", "speech", "-m", "random", "-c", "3"]);
        assert_eq!(cli.source(), Some(Source::File("speech.txt".into())));
        assert_eq!(cli.mode, Some(Mode::Random));
        assert_eq!(cli.count, Some(3));
    }

    #[test]
    fn test_cli_url_with_publisher() {
        let cli = Cli::parse_from([
            "quote_search",
            "--url",
            "https://example.com/story",
            "--publisher",
            "nbc",
            "--mode",
            "smart",
            "--words",
            "45",
        ]);
        assert_eq!(
            cli.source(),
            Some(Source::Url {
                url: "https://example.com/story".to_string(),
                publisher: Some(Publisher::NbcNews),
            })
        );
        assert_eq!(cli.mode, Some(Mode::Smart));
        assert_eq!(cli.words, 45);
    }

    #[test]
    fn test_cli_file_and_url_conflict() {
        let result = Cli::try_parse_from([
            "quote_search",
            "--file",
            "a.txt",
            "--url",
            "https://www.cnn.com/x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_publisher_requires_url() {
        assert!(Cli::try_parse_from(["quote_search", "--publisher", "fox"]).is_err());
    }

    #[test]
    fn test_source_describe() {
        assert_eq!(Source::File("notes.txt".into()).describe(), "notes.txt");
    }
}

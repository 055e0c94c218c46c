//! Plain-text console layout.

use crate::cli::Source;
use crate::models::{Article, Report};
use std::io::{self, Write};

/// Headline, byline and full body, separated by blank lines.
pub fn write_article<W: Write>(out: &mut W, article: &Article) -> io::Result<()> {
    writeln!(out, "{}", article.headline)?;
    writeln!(out, "{}\n", article.author)?;
    writeln!(out, "{}\n\n", article.body)
}

pub fn write_sentence_count<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "There are {count} sentences in this article")
}

/// Quotes in draw order, or the smart quote followed by its keywords.
///
/// Smart quotes from a local file are not introduced by name.
pub fn write_report<W: Write>(out: &mut W, report: &Report, source: &Source) -> io::Result<()> {
    match report {
        Report::Random { quotes, .. } => {
            for quote in quotes {
                writeln!(out, "Quote {}:{}\n", quote.number, quote.text)?;
            }
        }
        Report::Smart {
            headline,
            summary,
            keywords,
            ..
        } => {
            match source {
                Source::File(_) => writeln!(out, "Here is a smart quote from the given txt file:")?,
                Source::Url { .. } => writeln!(out, "Here is a smart quote from '{headline}':")?,
            }
            writeln!(out, "{summary}")?;
            writeln!(out, "\nHere are some keywords from the text: ")?;
            for keyword in keywords {
                writeln!(out, "{keyword}")?;
            }
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quote;

    fn file_source() -> Source {
        Source::File("speech.txt".into())
    }

    fn url_source() -> Source {
        Source::Url {
            url: "https://www.nbcnews.com/news/weather/snow".to_string(),
            publisher: None,
        }
    }

    fn render(report: &Report, source: &Source) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report, source).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_random_quotes_layout() {
        let report = Report::Random {
            source: "speech.txt".to_string(),
            headline: "speech.txt".to_string(),
            author: String::new(),
            sentence_count: 3,
            quotes: Quote::numbered(vec![" World".to_string(), "Hello".to_string()]),
        };
        assert_eq!(render(&report, &file_source()), "Quote 1: World\n\nQuote 2:Hello\n\n");
    }

    #[test]
    fn test_smart_quote_layout() {
        let report = Report::Smart {
            source: "https://www.nbcnews.com/news/weather/snow".to_string(),
            headline: "Snow in Hawaii".to_string(),
            author: String::new(),
            summary: "Snow is rare.".to_string(),
            keywords: vec!["snow".to_string(), "hawaii".to_string()],
        };
        assert_eq!(
            render(&report, &url_source()),
            "Here is a smart quote from 'Snow in Hawaii':\nSnow is rare.\n\n\
             Here are some keywords from the text: \nsnow\nhawaii\n"
        );
    }

    #[test]
    fn test_smart_quote_from_file_is_not_named() {
        let report = Report::Smart {
            source: "speech.txt".to_string(),
            headline: "speech.txt".to_string(),
            author: String::new(),
            summary: "Snow is rare.".to_string(),
            keywords: vec!["snow".to_string()],
        };
        let rendered = render(&report, &file_source());
        assert!(rendered.starts_with("Here is a smart quote from the given txt file:\nSnow is rare.\n"));
        assert!(!rendered.contains("'speech.txt'"));
    }

    #[test]
    fn test_sentence_count_line() {
        let mut out = Vec::new();
        write_sentence_count(&mut out, 12).unwrap();
        assert_eq!(out, b"There are 12 sentences in this article\n");
    }

    #[test]
    fn test_article_layout() {
        let article = Article {
            headline: "Headline".to_string(),
            author: "By Someone".to_string(),
            body: "Body.".to_string(),
        };
        let mut out = Vec::new();
        write_article(&mut out, &article).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Headline\nBy Someone\n\nBody.\n\n\n");
    }
}

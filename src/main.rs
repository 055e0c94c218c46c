//! # Quote Search
//!
//! Pulls quotable sentences out of a news article or a local text file.
//!
//! ## Features
//!
//! - Fetches CNN, Fox News and NBC News articles and extracts headline,
//!   byline and body from each publisher's page layout
//! - Reads plain UTF-8 `.txt` files
//! - Random mode: a non-repeating random sample of sentences
//! - Smart mode: a TextRank extractive summary plus ranked keywords
//! - Interactive prompts for anything not given on the command line
//!
//! ## Usage
//!
//! ```sh
//! quote_search                                   # interactive
//! quote_search -f speech -m random -c 3          # three random quotes
//! quote_search -u <article-url> -m smart --json  # smart quote as JSON
//! ```
//!
//! ## Architecture
//!
//! 1. **Loading**: read the file, or fetch the page and run the publisher's
//!    extractor
//! 2. **Segmenting**: split the body on `.`, `!` and `?`
//! 3. **Quoting**: sample sentences, or reformat one sentence per line and
//!    rank them with TextRank
//! 4. **Output**: console text or JSON

use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod models;
mod outputs;
mod prompt;
mod sampler;
mod scrapers;
mod text;
mod textrank;
mod utils;

use cli::{Cli, Mode, Source};
use error::{QuoteError, Result};
use models::{Article, Quote, Report};
use outputs::{console, json};
use prompt::Prompter;
use scrapers::{Publisher, SAMPLE_ARTICLES};
use textrank::{SummaryReporter, TextRank};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // Logs go to stderr so stdout only carries prompts and quotes.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    if args.list_samples {
        for (publisher, url) in SAMPLE_ARTICLES {
            println!("{:<9} {url}", publisher.name());
        }
        return Ok(());
    }

    // With --json, stdout carries the report alone; prompts and the
    // accompanying console lines move to stderr.
    let chatter: Box<dyn Write> = if args.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut prompter = Prompter::new(io::stdin().lock(), chatter);

    // Only sources chosen at the prompt may fall back to the publisher menu.
    let (source, interactive) = match args.source() {
        Some(source) => (source, false),
        None => (prompter.source()?, true),
    };
    let article = load_article(&source, &mut prompter, interactive).await?;

    if args.show_article {
        console::write_article(prompter.output(), &article)?;
    }

    let mode = match args.mode {
        Some(mode) => mode,
        None => prompter.mode()?,
    };

    let report = match mode {
        Mode::Random => random_quotes(&mut prompter, &source, article, args.count)?,
        Mode::Smart => {
            let ranker = TextRank::default()
                .with_summary_words(args.words)
                .with_keyword_ratio(args.keyword_ratio);
            smart_report(&ranker, &source, article)
        }
    };

    write_report(&mut io::stdout(), &report, &source, args.json)?;

    info!("Execution complete");
    Ok(())
}

/// Read the file or fetch and extract the article behind `source`.
///
/// A URL on an unknown host is resolved through the publisher menu when the
/// session is interactive, and is an error otherwise.
#[instrument(level = "info", skip(prompter))]
async fn load_article<R: BufRead, W: Write>(
    source: &Source,
    prompter: &mut Prompter<R, W>,
    interactive: bool,
) -> Result<Article> {
    match source {
        Source::File(path) => {
            let body = utils::read_text_file(path).await?;
            Ok(Article::from_text_file(&path.display().to_string(), body))
        }
        Source::Url { url, publisher } => {
            let publisher = match publisher {
                Some(publisher) => *publisher,
                None => match Publisher::from_url(url)? {
                    Some(publisher) => publisher,
                    None if interactive => {
                        warn!(%url, "Unrecognised host; asking for the layout");
                        prompter.publisher()?
                    }
                    None => return Err(QuoteError::UnsupportedPublisher(url.clone())),
                },
            };
            scrapers::fetch_article(url, publisher).await
        }
    }
}

/// Segment the body, announce the sentence count and draw the quotes.
///
/// Without a `count` the prompter asks for one, re-asking while it exceeds
/// the number of sentences.
fn random_quotes<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    source: &Source,
    article: Article,
    count: Option<usize>,
) -> Result<Report> {
    let mut sentences = text::segment(&article.body);
    let sentence_count = sentences.len();
    console::write_sentence_count(prompter.output(), sentence_count)?;

    let count = match count {
        Some(count) => count,
        None => prompter.quote_count(&article.headline, sentence_count)?,
    };
    let drawn = sampler::sample(&mut sentences, count)?;
    Ok(random_report(source, article, sentence_count, drawn))
}

fn write_report<O: Write>(out: &mut O, report: &Report, source: &Source, as_json: bool) -> Result<()> {
    if as_json {
        writeln!(out, "{}", json::to_json(report)?)?;
    } else {
        console::write_report(out, report, source)?;
    }
    Ok(())
}

fn random_report(source: &Source, article: Article, sentence_count: usize, drawn: Vec<String>) -> Report {
    Report::Random {
        source: source.describe(),
        headline: article.headline,
        author: article.author,
        sentence_count,
        quotes: Quote::numbered(drawn),
    }
}

/// Rank the article body, reformatted one sentence per line.
fn smart_report<S: SummaryReporter>(reporter: &S, source: &Source, article: Article) -> Report {
    let reformatted = text::reformat(&article.body);
    let summary = reporter.summarize(&reformatted);
    if summary.is_empty() {
        warn!("No sentence could be ranked for the smart quote");
    }
    let keywords = reporter
        .extract_keywords(&reformatted)
        .lines()
        .map(str::to_string)
        .collect();

    Report::Smart {
        source: source.describe(),
        headline: article.headline,
        author: article.author,
        summary,
        keywords,
    }
}

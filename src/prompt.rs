//! Console prompts with re-prompt loops.
//!
//! Out-of-range answers are asked again; answers that are not numbers at all
//! fail with [`QuoteError::InvalidNumber`]. The prompter is generic over its
//! reader and writer so sessions can be scripted in tests.

use crate::cli::{Mode, Source};
use crate::error::{QuoteError, Result};
use crate::scrapers::Publisher;
use crate::utils::with_txt_extension;
use std::io::{self, BufRead, Write};
use tracing::debug;

const INVALID_CHOICE: &str = "Invalid choice! Try again: ";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The stream prompts are written to, for messages that accompany them.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one line, without its line ending.
    pub fn ask_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn ask_number(&mut self, prompt: &str) -> Result<i64> {
        let answer = self.ask_line(prompt)?;
        Ok(answer.trim().parse::<i64>()?)
    }

    /// Ask until the answer lies in `0..=max`.
    pub fn ask_choice(&mut self, prompt: &str, max: usize) -> Result<usize> {
        let mut answer = self.ask_number(prompt)?;
        loop {
            match usize::try_from(answer) {
                Ok(choice) if choice <= max => return Ok(choice),
                _ => {
                    debug!(answer, max, "Choice out of range");
                    answer = self.ask_number(INVALID_CHOICE)?;
                }
            }
        }
    }

    /// File or URL, and the name or address that goes with it.
    pub fn source(&mut self) -> Result<Source> {
        let choice = self.ask_choice(
            "Enter 0 to fetch a quote from a file or 1 for a quote from a given url: ",
            1,
        )?;
        if choice == 0 {
            let name = self.ask_line("Enter the name of your file: ")?;
            Ok(Source::File(with_txt_extension(name.trim()).into()))
        } else {
            let url = self.ask_line("Enter the url of the article: ")?;
            Ok(Source::Url {
                url: url.trim().to_string(),
                publisher: None,
            })
        }
    }

    pub fn publisher(&mut self) -> Result<Publisher> {
        let choice = self.ask_choice("Enter 0 for CNN, 1 for Fox News or 2 for NBC News: ", 2)?;
        Ok(Publisher::ALL[choice])
    }

    pub fn mode(&mut self) -> Result<Mode> {
        let choice = self.ask_choice("Enter 0 for random quotes or 1 for a smart quote: ", 1)?;
        Ok(if choice == 0 { Mode::Random } else { Mode::Smart })
    }

    /// Ask how many quotes to pull, re-asking while the answer exceeds
    /// `available`.
    pub fn quote_count(&mut self, headline: &str, available: usize) -> Result<usize> {
        let mut answer =
            self.ask_number(&format!("Enter the number of random quotes to pull from '{headline}': "))?;
        loop {
            match usize::try_from(answer) {
                Ok(count) if count <= available => return Ok(count),
                Ok(count) => {
                    answer = self.ask_number(&format!(
                        "{}. Try again: ",
                        QuoteError::TooManyQuotes {
                            requested: count,
                            available
                        }
                    ))?;
                }
                Err(_) => answer = self.ask_number(INVALID_CHOICE)?,
            }
        }
    }
}

//! CNN article layout.
//!
//! Article pages keep everything inside a single `<article>`:
//!
//! - headline: the first `<h1>`
//! - author: the first `<p>` of the `div.l-container` byline block
//! - body: `div.pg-rail-tall__body`

use super::{Extractor, Publisher, select_first, text_of};
use crate::error::Result;
use crate::models::Article;
use scraper::Html;
use tracing::{debug, instrument};

static_selector!(ARTICLE, "article");
static_selector!(HEADLINE, "h1");
static_selector!(BYLINE, "div.l-container");
static_selector!(AUTHOR, "p");
static_selector!(BODY, "div.pg-rail-tall__body");

#[derive(Debug, Clone, Copy, Default)]
pub struct CnnExtractor;

impl Extractor for CnnExtractor {
    fn publisher(&self) -> Publisher {
        Publisher::Cnn
    }

    #[instrument(level = "debug", skip_all)]
    fn extract(&self, document: &Html) -> Result<Article> {
        let publisher = self.publisher();
        let article = select_first(document.root_element(), &ARTICLE, publisher)?;

        let headline = text_of(select_first(article, &HEADLINE, publisher)?);
        let byline = select_first(article, &BYLINE, publisher)?;
        let author = text_of(select_first(byline, &AUTHOR, publisher)?);
        let body = text_of(select_first(article, &BODY, publisher)?);

        debug!(%headline, %author, "Parsed CNN article");
        Ok(Article {
            headline,
            author,
            body,
        })
    }
}

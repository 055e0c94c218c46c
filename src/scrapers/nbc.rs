//! NBC News article layout.
//!
//! NBC is the odd one out: the headline lives in the page `<header>`, outside
//! the `<article>` that holds the byline (`div.article-inline-byline`) and the
//! body (`div.article-body__content`).

use super::{Extractor, Publisher, select_first, text_of};
use crate::error::Result;
use crate::models::Article;
use scraper::Html;
use tracing::{debug, instrument};

static_selector!(HEADER, "header");
static_selector!(HEADLINE, "h1");
static_selector!(ARTICLE, "article");
static_selector!(AUTHOR, "div.article-inline-byline");
static_selector!(BODY, "div.article-body__content");

#[derive(Debug, Clone, Copy, Default)]
pub struct NbcNewsExtractor;

impl Extractor for NbcNewsExtractor {
    fn publisher(&self) -> Publisher {
        Publisher::NbcNews
    }

    #[instrument(level = "debug", skip_all)]
    fn extract(&self, document: &Html) -> Result<Article> {
        let publisher = self.publisher();
        let root = document.root_element();

        let header = select_first(root, &HEADER, publisher)?;
        let headline = text_of(select_first(header, &HEADLINE, publisher)?);

        let article = select_first(root, &ARTICLE, publisher)?;
        let author = text_of(select_first(article, &AUTHOR, publisher)?);
        let body = text_of(select_first(article, &BODY, publisher)?);

        debug!(%headline, %author, "Parsed NBC News article");
        Ok(Article {
            headline,
            author,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuoteError;
    use once_cell::sync::Lazy;

    const PAGE: &str = r#"
        <html><body>
          <header class="article-hero"><h1>Forecasters predict snow in Hawaii</h1></header>
          <article>
            <div class="article-inline-byline">By <span>Sam Forecaster</span></div>
            <div class="article-body__content">Snow is rare. It happens on the peaks.</div>
          </article>
        </body></html>
    "#;

    #[test]
    fn test_selectors_parse() {
        for selector in [&HEADER, &HEADLINE, &ARTICLE, &AUTHOR, &BODY] {
            Lazy::force(&selector.parsed);
        }
    }

    #[test]
    fn test_extract_nbc_article() {
        let document = Html::parse_document(PAGE);
        let article = NbcNewsExtractor.extract(&document).unwrap();

        assert_eq!(article.headline, "Forecasters predict snow in Hawaii");
        assert_eq!(article.author, "By Sam Forecaster");
        assert_eq!(article.body, "Snow is rare. It happens on the peaks.");
    }

    #[test]
    fn test_missing_header_fails() {
        let page = PAGE.replace("<header class=\"article-hero\">", "<div>").replace("</header>", "</div>");
        let document = Html::parse_document(&page);

        let err = NbcNewsExtractor.extract(&document).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::MissingElement {
                publisher: "NBC News",
                selector: "header"
            }
        ));
    }
}

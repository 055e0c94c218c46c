//! Fox News (and Fox Business) article layout.
//!
//! Inside the first `<article>`: the `<h1>` headline, the first link of
//! `div.author-byline` for the author, and `div.article-body` for the text.

use super::{Extractor, Publisher, select_first, text_of};
use crate::error::Result;
use crate::models::Article;
use scraper::Html;
use tracing::{debug, instrument};

static_selector!(ARTICLE, "article");
static_selector!(HEADLINE, "h1");
static_selector!(BYLINE, "div.author-byline");
static_selector!(AUTHOR, "a");
static_selector!(BODY, "div.article-body");

#[derive(Debug, Clone, Copy, Default)]
pub struct FoxNewsExtractor;

impl Extractor for FoxNewsExtractor {
    fn publisher(&self) -> Publisher {
        Publisher::FoxNews
    }

    #[instrument(level = "debug", skip_all)]
    fn extract(&self, document: &Html) -> Result<Article> {
        let publisher = self.publisher();
        let article = select_first(document.root_element(), &ARTICLE, publisher)?;

        let headline = text_of(select_first(article, &HEADLINE, publisher)?);
        let byline = select_first(article, &BYLINE, publisher)?;
        let author = text_of(select_first(byline, &AUTHOR, publisher)?);
        let body = text_of(select_first(article, &BODY, publisher)?);

        debug!(%headline, %author, "Parsed Fox News article");
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
          <header><h1>Site banner</h1></header>
          <article>
            <h1 class="headline">CNN terminates Chris Cuomo</h1>
            <div class="author-byline">
              <span>By <a href="/person/j/joe">Joe Writer</a> | Fox News</span>
            </div>
            <div class="article-body"><p>The network acted.</p><p> Staff were told.</p></div>
          </article>
        </body></html>
    "#;

    #[test]
    fn test_selectors_parse() {
        for selector in [&ARTICLE, &HEADLINE, &BYLINE, &AUTHOR, &BODY] {
            Lazy::force(&selector.parsed);
        }
    }

    #[test]
    fn test_extract_fox_article() {
        let document = Html::parse_document(PAGE);
        let article = FoxNewsExtractor.extract(&document).unwrap();

        assert_eq!(article.headline, "CNN terminates Chris Cuomo");
        assert_eq!(article.author, "Joe Writer");
        assert_eq!(article.body, "The network acted. Staff were told.");
    }

    #[test]
    fn test_byline_without_link_fails() {
        let page = PAGE.replace(r#"<a href="/person/j/joe">Joe Writer</a>"#, "Joe Writer");
        let document = Html::parse_document(&page);

        let err = FoxNewsExtractor.extract(&document).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::MissingElement {
                publisher: "Fox News",
                selector: "a"
            }
        ));
    }
}

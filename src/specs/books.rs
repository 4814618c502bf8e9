// src/specs/books.rs
//! Spec for one page of the demo book catalog.
//!
//! Every book sits in `<article class="product_pod">`:
//! - title: `h3 > a[title]` (the link text is truncated, the attribute is not)
//! - price: `p.price_color`, currency sign removed
//! - availability: `p.instock.availability`, whitespace collapsed
//! - rating: the second class of `p.star-rating` (`One` … `Five`)
//!
//! An article missing any of these is skipped with a warning.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::core::net::FetchError;
use crate::core::sanitize::{normalize_ws, strip_currency};
use crate::store::Record;

pub const COLUMNS: &[&str] = &["titulo", "preco_libras", "disponibilidade", "classificacao"];

struct Selectors {
    article: Selector,
    title: Selector,
    price: Selector,
    availability: Selector,
    rating: Selector,
}

impl Selectors {
    fn new() -> Result<Self, FetchError> {
        let parse = |css: &str| Selector::parse(css).map_err(|e| FetchError::Decode(e.to_string()));
        Ok(Self {
            article: parse("article.product_pod")?,
            title: parse("h3 > a")?,
            price: parse("p.price_color")?,
            availability: parse("p.instock.availability")?,
            rating: parse("p.star-rating")?,
        })
    }
}

pub fn parse_page(html: &str) -> Result<Vec<Record>, FetchError> {
    let sel = Selectors::new()?;
    let doc = Html::parse_document(html);

    let mut out = Vec::new();
    for (i, article) in doc.select(&sel.article).enumerate() {
        match parse_article(&sel, article) {
            Some(rec) => out.push(rec),
            None => warn!("book #{} on page is incomplete; skipped", i + 1),
        }
    }
    Ok(out)
}

fn parse_article(sel: &Selectors, article: ElementRef<'_>) -> Option<Record> {
    let title = article.select(&sel.title).next()?.value().attr("title")?;
    let price = text_of(article.select(&sel.price).next()?);
    let availability = text_of(article.select(&sel.availability).next()?);
    let rating = article
        .select(&sel.rating)
        .next()?
        .value()
        .classes()
        .find(|c| *c != "star-rating")?;

    let values = [s!(title), strip_currency(&price), availability, s!(rating)];
    if values.iter().any(|v| v.is_empty()) {
        return None;
    }
    Some(COLUMNS.iter().map(|c| s!(*c)).zip(values).collect())
}

fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
    <html><body><ol class="row">
      <li><article class="product_pod">
        <p class="star-rating Three"><i class="icon-star"></i></p>
        <h3><a href="a-light-in-the-attic_1000/index.html" title="A Light in the Attic">A Light in the ...</a></h3>
        <div class="product_price">
          <p class="price_color">£51.77</p>
          <p class="instock availability">
            <i class="icon-ok"></i>
              In stock
          </p>
        </div>
      </article></li>
      <li><article class="product_pod">
        <p class="star-rating One"></p>
        <h3><a href="x.html">No title attribute</a></h3>
        <p class="price_color">£10.00</p>
        <p class="instock availability">In stock</p>
      </article></li>
      <li><article class="product_pod">
        <p class="star-rating Five"></p>
        <h3><a href="y.html" title="Sharp Objects &amp; Co">Sharp ...</a></h3>
        <p class="price_color">£47.82</p>
        <p class="instock availability">In stock</p>
      </article></li>
    </ol></body></html>
    "#;

    #[test]
    fn complete_articles_become_records() {
        let recs = parse_page(PAGE).unwrap();
        assert_eq!(recs.len(), 2);

        let first = &recs[0];
        assert_eq!(first.keys().map(String::as_str).collect::<Vec<_>>(), COLUMNS);
        assert_eq!(first["titulo"], "A Light in the Attic");
        assert_eq!(first["preco_libras"], "51.77");
        assert_eq!(first["disponibilidade"], "In stock");
        assert_eq!(first["classificacao"], "Three");

        assert_eq!(recs[1]["titulo"], "Sharp Objects & Co");
        assert_eq!(recs[1]["classificacao"], "Five");
    }

    #[test]
    fn page_without_articles_is_empty() {
        assert!(parse_page("<html><body><p>404</p></body></html>").unwrap().is_empty());
    }
}

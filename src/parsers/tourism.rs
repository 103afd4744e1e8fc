use crate::error::{CrawlError, Result};
use crate::parsers::selector;
use crate::results::PageRef;
use scraper::Html;

/// List item on the tourism page that links to the city's hotels
const HOTELS_NAV_ITEM: &str = "li.hotels.twoLines";

/// Extracts the relative URL of the city's hotel list from the tourism page
pub fn parse(html: &str) -> Result<PageRef> {
    let doc = Html::parse_document(html);

    let item = doc
        .select(&selector(HOTELS_NAV_ITEM))
        .next()
        .ok_or_else(|| not_found("hotels navigation item"))?;

    let href = item
        .select(&selector("a[href]"))
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(|| not_found("hotels navigation link"))?;

    ::log::debug!("Hotel list link: {}", href);
    Ok(PageRef::new(href))
}

fn not_found(what: &str) -> CrawlError {
    CrawlError::MarkupNotFound {
        page: "tourism page".to_string(),
        what: what.to_string(),
    }
}

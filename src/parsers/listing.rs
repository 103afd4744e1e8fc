use crate::parsers::{first_token_of_attr, selector};
use crate::results::PageRef;
use scraper::{ElementRef, Html};

/// Hotel entry containers, tried in order; the first with any match wins.
///
/// The site serves several list layouts and each wraps entries differently.
pub const ENTRY_SELECTORS: [&str; 3] = [
    "div.listing.wrap.reasoning_v5_wrap.jfy_listing.p13n_imperfect",
    "div.listing_info.jfy",
    "div.listing.easyClear.p13n_imperfect",
];

const NAME_LINK: &str = r#"a[target="_blank"]"#;
const STAR_IMAGE: &str = "img.sprite-ratings";
const REVIEW_SPAN: &str = "span.more";
const PAGINATION: &str = "div.pagination.paginationfillbtm";
const LAST_PAGE_MARKER: &str = "span.guiArw.pageEndNext";

/// Visible text of the "next page" link
const NEXT_GLYPHS: [&str; 2] = ["\u{bb}", "&raquo;"];

/// Summary of one hotel as shown on a list page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    /// Link to the hotel's detail page, if the entry has one
    pub detail_ref: Option<PageRef>,
    pub stars: String,
    pub total_reviews: String,
}

/// What the pagination control says about the following page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pagination {
    /// Link to the next list page
    Next(PageRef),
    /// The control carries the last-page marker
    LastPage,
    /// The page has no pagination control at all
    Absent,
    /// The control exists but has neither a next link nor a last-page marker
    Dangling,
}

/// Everything read from one hotel list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    /// Index into [`ENTRY_SELECTORS`] of the layout that matched
    pub layout: Option<usize>,
    pub entries: Vec<ListingEntry>,
    pub pagination: Pagination,
}

/// Parses a hotel list page into its entries and pagination state
pub fn parse(html: &str) -> ListPage {
    let doc = Html::parse_document(html);

    let (layout, boxes) = select_entries(&doc);
    match layout {
        Some(i) => ::log::debug!("Entry layout {} matched {} hotels", i + 1, boxes.len()),
        None => ::log::warn!("No hotel entries found with any known layout"),
    }

    let entries = boxes.into_iter().map(parse_entry).collect();
    let pagination = parse_pagination(&doc);

    ListPage {
        layout,
        entries,
        pagination,
    }
}

/// Applies the entry selectors in order, returning the first non-empty match set
fn select_entries(doc: &Html) -> (Option<usize>, Vec<ElementRef<'_>>) {
    for (i, css) in ENTRY_SELECTORS.iter().enumerate() {
        let found: Vec<_> = doc.select(&selector(css)).collect();
        if !found.is_empty() {
            return (Some(i), found);
        }
        ::log::debug!("Entry layout {} did not match", i + 1);
    }
    (None, Vec::new())
}

fn parse_entry(entry: ElementRef<'_>) -> ListingEntry {
    let link = entry.select(&selector(NAME_LINK)).next();

    let name = link
        .map(|a| a.text().collect::<String>().trim().to_string())
        .unwrap_or_default();
    let detail_ref = link
        .and_then(|a| a.value().attr("href"))
        .map(PageRef::new);
    if detail_ref.is_none() {
        ::log::warn!("Hotel entry {:?} has no detail link", name);
    }

    let stars = entry
        .select(&selector(STAR_IMAGE))
        .next()
        .and_then(|img| first_token_of_attr(img, "alt"))
        .unwrap_or_default();
    if stars.is_empty() {
        ::log::warn!("No star rating for {:?}", name);
    }

    let total_reviews = entry
        .select(&selector(REVIEW_SPAN))
        .next()
        .and_then(|span| span.text().find(|t| t.contains("review")))
        .map(|t| t.trim().to_string())
        .unwrap_or_default();
    if total_reviews.is_empty() {
        ::log::warn!("No review count for {:?}", name);
    }

    ListingEntry {
        name,
        detail_ref,
        stars,
        total_reviews,
    }
}

fn parse_pagination(doc: &Html) -> Pagination {
    let Some(control) = doc.select(&selector(PAGINATION)).next() else {
        return Pagination::Absent;
    };

    if control.select(&selector(LAST_PAGE_MARKER)).next().is_some() {
        return Pagination::LastPage;
    }

    control
        .select(&selector("a[href]"))
        .find(|a| {
            let text = a.text().collect::<String>();
            NEXT_GLYPHS.contains(&text.trim())
        })
        .and_then(|a| a.value().attr("href"))
        .map(|href| Pagination::Next(PageRef::new(href)))
        .unwrap_or(Pagination::Dangling)
}

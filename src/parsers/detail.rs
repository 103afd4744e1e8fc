use crate::parsers::{fill_fixed, first_text, first_token_of_attr, selector};
use crate::results::DetailFields;
use scraper::{ElementRef, Html};

pub const SENTIMENT_LABELS: [&str; 5] = ["Excellent", "Very good", "Average", "Poor", "Terrible"];
pub const TRIP_TYPE_LABELS: [&str; 4] = ["Families", "Couples", "Solo", "Business"];
pub const SUB_RATING_LABELS: [&str; 6] = [
    "Location",
    "Sleep Quality",
    "Rooms",
    "Service",
    "Value",
    "Cleanliness",
];

const MAIN_CONTENT: &str = "div.content.wrap.trip_type_layout";
const SENTIMENT_CHART: &str = "ul.barChart";
const SENTIMENT_VALUE: &str = "span.compositeCount";
const TRIP_TYPE_BLOCK: &str = "div.trip_type";
const TRIP_TYPE_VALUE: &str = "div.value";
const SUMMARY_BOX: &str = "div#SUMMARYBOX";

/// Reads the rating breakdowns of a hotel detail page.
///
/// Absent blocks and short lists come back as empty strings; each gap is
/// logged so a layout change shows up in the crawl output.
pub fn parse(html: &str) -> DetailFields {
    let doc = Html::parse_document(html);

    let Some(content) = doc.select(&selector(MAIN_CONTENT)).next() else {
        ::log::warn!("Detail page has no rating content block");
        return DetailFields::default();
    };

    DetailFields {
        sentiment: sentiment(content),
        trip_types: trip_types(content),
        sub_ratings: sub_ratings(content),
    }
}

fn sentiment(content: ElementRef<'_>) -> [String; 5] {
    let values = first_block_texts(content, SENTIMENT_CHART, SENTIMENT_VALUE);
    labelled("sentiment", &SENTIMENT_LABELS, values)
}

fn trip_types(content: ElementRef<'_>) -> [String; 4] {
    let values = first_block_texts(content, TRIP_TYPE_BLOCK, TRIP_TYPE_VALUE);
    labelled("trip type", &TRIP_TYPE_LABELS, values)
}

/// First text node of each `item` inside the first `block` only
fn first_block_texts(content: ElementRef<'_>, block: &str, item: &str) -> Vec<String> {
    content
        .select(&selector(block))
        .next()
        .map(|container| {
            container
                .select(&selector(item))
                .map(|el| first_text(el).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}

fn sub_ratings(content: ElementRef<'_>) -> [String; 6] {
    // Only the first list inside the summary box holds the category icons
    let values: Vec<String> = content
        .select(&selector(SUMMARY_BOX))
        .next()
        .and_then(|summary| summary.select(&selector("ul")).next())
        .map(|list| {
            list.select(&selector("img"))
                .map(|img| first_token_of_attr(img, "alt").unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();
    labelled("sub-rating", &SUB_RATING_LABELS, values)
}

fn labelled<const N: usize>(group: &str, labels: &[&str; N], values: Vec<String>) -> [String; N] {
    let found = values.len();
    let (fields, filled) = fill_fixed::<N>(values);

    if found > N {
        ::log::warn!("Ignoring {} extra {} values", found - N, group);
    }
    for (label, value) in labels.iter().zip(fields.iter()).take(filled) {
        ::log::debug!("{} : {}", label, value);
    }
    for label in labels.iter().skip(filled) {
        ::log::warn!("No {} value for {}", group, label);
    }

    fields
}

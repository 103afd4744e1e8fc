use std::fmt;
use std::path::PathBuf;

/// Column names of the output table, in row order
pub const HEADERS: [&str; 18] = [
    "HOTEL_NAME",
    "STARS",
    "TOTAL_REVIEWS",
    "EXCELLENT",
    "VERY_GOOD",
    "AVERAGE",
    "POOR",
    "TERRIBLE",
    "FAMILY",
    "COUPLE",
    "SOLO",
    "BUSINESS",
    "LOCATION",
    "SLEEPQ",
    "ROOM",
    "SERVICE",
    "VALUE",
    "CLEANLINESS",
];

/// Where to crawl and where to keep the raw pages
#[derive(Debug, Clone)]
pub struct CrawlTarget {
    pub state: String,
    pub city: String,
    pub datadir: PathBuf,
}

impl CrawlTarget {
    pub fn new(city: impl Into<String>, state: impl Into<String>, datadir: impl Into<PathBuf>) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
            datadir: datadir.into(),
        }
    }
}

/// Reference to a list or detail page, as found in an href
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRef(String);

impl PageRef {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The 15 values read from a hotel detail page.
///
/// Sentiment values always come first, then trip types, then sub-ratings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    /// Excellent, Very good, Average, Poor, Terrible
    pub sentiment: [String; 5],
    /// Families, Couples, Solo, Business
    pub trip_types: [String; 4],
    /// Location, Sleep Quality, Rooms, Service, Value, Cleanliness
    pub sub_ratings: [String; 6],
}

impl DetailFields {
    /// All values in output order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.sentiment
            .iter()
            .chain(self.trip_types.iter())
            .chain(self.sub_ratings.iter())
            .map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.values().map(str::to_string).collect()
    }
}

/// One output row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelRecord {
    pub name: String,
    pub stars: String,
    pub total_reviews: String,
    pub detail: DetailFields,
}

impl HotelRecord {
    /// Row values in the same order as [`HEADERS`]
    pub fn fields(&self) -> Vec<&str> {
        let mut row = vec![
            self.name.as_str(),
            self.stars.as_str(),
            self.total_reviews.as_str(),
        ];
        row.extend(self.detail.values());
        row
    }
}

/// Totals reported when the crawl reaches the last list page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub list_pages: usize,
    pub hotels: usize,
}

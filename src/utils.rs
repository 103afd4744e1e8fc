use crate::error::Result;
use std::path::{Path, PathBuf};
use url::{Url, form_urlencoded};

/// Raw page kinds written to the data directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snapshot {
    /// The city's tourism landing page
    Tourism,
    /// A hotel list page, numbered from 1
    HotelList(usize),
    /// A hotel detail page, numbered by the running hotel counter
    Hotel(usize),
}

/// Convert a string to a sanitized filename component
pub fn sanitize_filename(name: &str) -> String {
    let mut name = name.trim().replace(
        ['/', '\\', ':', '?', '&', '=', '#', '%', '*', '"', '<', '>', '|'],
        "_",
    );
    name = name.split_whitespace().collect::<Vec<_>>().join("_");

    // Limit filename length
    if name.chars().count() > 100 {
        name.chars().take(100).collect()
    } else {
        name
    }
}

/// Path of a raw HTML snapshot for the given city
pub fn snapshot_path(datadir: &Path, city: &str, snapshot: Snapshot) -> PathBuf {
    let city = sanitize_filename(city);
    let file_name = match snapshot {
        Snapshot::Tourism => format!("{}-tourism-page.html", city),
        Snapshot::HotelList(page) => format!("{}-hotelist-{}.html", city, page),
        Snapshot::Hotel(seq) => format!("{}-hotel-{}.html", city, seq),
    };
    datadir.join(file_name)
}

/// CSV file name used when no output path is configured
pub fn default_output_path(city: &str) -> PathBuf {
    PathBuf::from(format!("{}Hotels.csv", sanitize_filename(city)))
}

/// Builds the tourism landing page URL for a city/state pair
pub fn locator_url(base: &Url, city: &str, state: &str) -> Result<Url> {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("city", city)
        .append_pair("state", state)
        .finish();
    Ok(base.join(&query)?)
}

/// Resolves a page reference found in an href against the site root
pub fn resolve(base: &Url, href: &str) -> Result<Url> {
    Ok(base.join(href.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://www.tripadvisor.com/").unwrap()
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Boston"), "Boston");
        assert_eq!(sanitize_filename(" New York "), "New_York");
        assert_eq!(sanitize_filename("a/b:c"), "a_b_c");
        assert_eq!(sanitize_filename(&"x".repeat(150)).len(), 100);
    }

    #[test]
    fn test_snapshot_paths() {
        let dir = Path::new("data");
        assert_eq!(
            snapshot_path(dir, "Boston", Snapshot::Tourism),
            PathBuf::from("data/Boston-tourism-page.html")
        );
        assert_eq!(
            snapshot_path(dir, "Boston", Snapshot::HotelList(3)),
            PathBuf::from("data/Boston-hotelist-3.html")
        );
        assert_eq!(
            snapshot_path(dir, "San Diego", Snapshot::Hotel(0)),
            PathBuf::from("data/San_Diego-hotel-0.html")
        );
    }

    #[test]
    fn test_default_output_path_follows_city() {
        assert_eq!(default_output_path("Boston"), PathBuf::from("BostonHotels.csv"));
        assert_eq!(
            default_output_path("Salt Lake City"),
            PathBuf::from("Salt_Lake_CityHotels.csv")
        );
    }

    #[test]
    fn test_locator_url_is_encoded() {
        let url = locator_url(&base(), "Boston", "Massachusetts").unwrap();
        assert_eq!(
            url.as_str(),
            "http://www.tripadvisor.com/city=Boston&state=Massachusetts"
        );

        let url = locator_url(&base(), "New York", "New York").unwrap();
        assert_eq!(
            url.as_str(),
            "http://www.tripadvisor.com/city=New+York&state=New+York"
        );

        let url = locator_url(&base(), "A&B", "C").unwrap();
        assert!(url.as_str().ends_with("city=A%26B&state=C"));
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let url = resolve(&base(), "/Hotels-g60745-Boston_Massachusetts-Hotels.html").unwrap();
        assert_eq!(
            url.as_str(),
            "http://www.tripadvisor.com/Hotels-g60745-Boston_Massachusetts-Hotels.html"
        );

        let url = resolve(&base(), "http://other.example/x.html").unwrap();
        assert_eq!(url.as_str(), "http://other.example/x.html");
    }
}

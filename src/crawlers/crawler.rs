use crate::error::Result;
use async_trait::async_trait;
use url::Url;

/// Source of raw page HTML.
///
/// The crawl loop only ever issues GET requests through this trait, so it can
/// run against the live site or against canned pages.
#[async_trait]
pub trait PageSource {
    /// Fetch the body of the page at `url`
    async fn fetch(&self, url: &Url) -> Result<String>;
}

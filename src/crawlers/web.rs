use crate::config::CrawlConfig;
use crate::crawlers::crawler::PageSource;
use crate::error::{CrawlError, Result};
use async_trait::async_trait;
use url::Url;

/// Fetches pages over HTTP with a browser-like User-Agent
pub struct WebSource {
    client: reqwest::Client,
}

impl WebSource {
    /// Creates an HTTP client from the crawl configuration
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for WebSource {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let start = std::time::Instant::now();
        ::log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            ::log::error!("{} returned {}", url, status);
            return Err(CrawlError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        ::log::debug!(
            "Fetched {} ({} bytes) in {:.2} seconds",
            url,
            body.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(body)
    }
}

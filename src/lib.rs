// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::CrawlConfig;
pub use error::{CrawlError, Result};
pub use results::{CrawlSummary, CrawlTarget, HotelRecord, PageRef};

use crawlers::hotels::HotelCrawler;
use crawlers::web::WebSource;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Main builder for a hotel crawl of one city
pub struct HotelCrawl {
    city: String,
    state: String,
    config: CrawlConfig,
}

impl HotelCrawl {
    /// Create a new crawl for the given city and state with default settings
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            config: CrawlConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: CrawlConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = CrawlConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Set the directory raw pages are saved to
    pub fn with_datadir(mut self, datadir: impl Into<PathBuf>) -> Self {
        self.config.datadir = datadir.into();
        self
    }

    /// Set the politeness delay before each list and detail request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.config.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the site root page references are resolved against
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the CSV output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.config.output = Some(output.into());
        self
    }

    /// The CSV file this crawl writes to
    pub fn output_path(&self) -> PathBuf {
        self.config
            .output
            .clone()
            .unwrap_or_else(|| utils::default_output_path(&self.city))
    }

    /// Crawl every list page and write one row per hotel
    pub async fn run(self) -> Result<CrawlSummary> {
        let base_url = Url::parse(&self.config.base_url)?;
        let source = WebSource::new(&self.config)?;

        let output = self.output_path();
        ::log::info!("Writing hotels to {}", output.display());
        let writer = BufWriter::new(File::create(&output)?);

        let target = CrawlTarget::new(self.city, self.state, self.config.datadir.clone());
        let mut crawler = HotelCrawler::new(source, target, base_url, self.config.delay(), writer)?;
        crawler.run().await
    }
}

use thiserror::Error;

/// Errors that abort a crawl run
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Request could not be sent or the body could not be read
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// A page reference could not be turned into a URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A node the crawl cannot continue without is missing
    #[error("{what} not found in {page}")]
    MarkupNotFound { page: String, what: String },

    /// The pagination block has neither a last-page marker nor a next link
    #[error("list page {page_index} has no next link and no last-page marker")]
    PaginationMissing { page_index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file could not be parsed
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CrawlError>;

use crate::crawlers::crawler::PageSource;
use crate::error::{CrawlError, Result};
use crate::parsers::listing::{self, Pagination};
use crate::parsers::{detail, tourism};
use crate::results::{CrawlSummary, CrawlTarget, DetailFields, HEADERS, HotelRecord, PageRef};
use crate::utils::{self, Snapshot};
use std::io::Write;
use std::time::Duration;
use url::Url;

/// Where the crawl goes after a list page has been processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// Fetch this list page next
    Next(PageRef),
    /// No more list pages
    LastPage,
}

/// Sequential crawl of one city's hotel listings.
///
/// Owns the running hotel counter and the CSV writer; every fetched page is
/// written to the target's data directory before it is parsed.
pub struct HotelCrawler<S, W: Write> {
    source: S,
    target: CrawlTarget,
    base_url: Url,
    delay: Duration,
    sink: csv::Writer<W>,
    hotel_count: usize,
    list_pages: usize,
}

impl<S: PageSource, W: Write> HotelCrawler<S, W> {
    /// Creates a crawler and writes the header row to `writer`
    pub fn new(
        source: S,
        target: CrawlTarget,
        base_url: Url,
        delay: Duration,
        writer: W,
    ) -> Result<Self> {
        let mut sink = csv::Writer::from_writer(writer);
        sink.write_record(HEADERS)?;
        sink.flush()?;

        Ok(Self {
            source,
            target,
            base_url,
            delay,
            sink,
            hotel_count: 0,
            list_pages: 0,
        })
    }

    /// Hotels processed so far; also the sequence number of the next hotel
    pub fn hotel_count(&self) -> usize {
        self.hotel_count
    }

    /// Runs the whole crawl: locate the hotel list, then walk its pages
    pub async fn run(&mut self) -> Result<CrawlSummary> {
        tokio::fs::create_dir_all(&self.target.datadir).await?;

        let mut page_ref = self.locate().await?;
        let mut page_index = 1;

        loop {
            let html = self.fetch_list(&page_ref, page_index).await?;
            match self.parse_list(&html, page_index).await? {
                ListOutcome::Next(next) => {
                    page_ref = next;
                    page_index += 1;
                }
                ListOutcome::LastPage => break,
            }
        }

        let summary = CrawlSummary {
            list_pages: self.list_pages,
            hotels: self.hotel_count,
        };
        ::log::info!(
            "Crawl complete - {} hotels on {} list pages",
            summary.hotels,
            summary.list_pages
        );
        Ok(summary)
    }

    /// Finds the relative URL of the city's hotel list via its tourism page
    pub async fn locate(&self) -> Result<PageRef> {
        let url = utils::locator_url(&self.base_url, &self.target.city, &self.target.state)?;
        ::log::info!("Locating hotel list for {}, {}", self.target.city, self.target.state);

        let html = self.get(&url, Snapshot::Tourism).await?;
        let page_ref = tourism::parse(&html)?;

        ::log::info!("Hotel list is at {}", page_ref);
        Ok(page_ref)
    }

    /// Fetches one hotel list page after the politeness delay
    pub async fn fetch_list(&self, page_ref: &PageRef, page_index: usize) -> Result<String> {
        let url = utils::resolve(&self.base_url, page_ref.as_str())?;
        self.pause().await;

        ::log::info!("Fetching list page {}: {}", page_index, url);
        self.get(&url, Snapshot::HotelList(page_index)).await
    }

    /// Emits one record per hotel on the page and decides where to go next.
    ///
    /// Each hotel's detail page is fetched before its row is written.
    pub async fn parse_list(&mut self, html: &str, page_index: usize) -> Result<ListOutcome> {
        let page = listing::parse(html);
        self.list_pages += 1;

        for entry in page.entries {
            let seq = self.hotel_count;
            self.hotel_count += 1;
            ::log::info!("Hotel {}: {}", seq, entry.name);

            let detail = match &entry.detail_ref {
                Some(hotel_ref) => self.fetch_and_parse_hotel(hotel_ref, seq).await?,
                None => DetailFields::default(),
            };

            let record = HotelRecord {
                name: entry.name,
                stars: entry.stars,
                total_reviews: entry.total_reviews,
                detail,
            };
            self.sink.write_record(record.fields())?;
            self.sink.flush()?;
        }

        match page.pagination {
            Pagination::Next(next) => {
                ::log::info!("Next url is {}", next);
                Ok(ListOutcome::Next(next))
            }
            Pagination::LastPage => {
                ::log::info!("Reached the last list page ({})", page_index);
                Ok(ListOutcome::LastPage)
            }
            Pagination::Absent | Pagination::Dangling => {
                ::log::error!("List page {} has no next link and no last-page marker", page_index);
                Err(CrawlError::PaginationMissing { page_index })
            }
        }
    }

    /// Fetches a hotel's detail page and reads its 15 rating values
    pub async fn fetch_and_parse_hotel(&self, hotel_ref: &PageRef, seq: usize) -> Result<DetailFields> {
        let url = utils::resolve(&self.base_url, hotel_ref.as_str())?;
        self.pause().await;

        let html = self.get(&url, Snapshot::Hotel(seq)).await?;
        Ok(detail::parse(&html))
    }

    /// Flushes the CSV writer and hands back the underlying output
    pub fn into_writer(self) -> Result<W> {
        self.sink
            .into_inner()
            .map_err(|e| CrawlError::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    /// GETs a page and stores the raw body under the data directory
    async fn get(&self, url: &Url, snapshot: Snapshot) -> Result<String> {
        let html = self.source.fetch(url).await?;

        let path = utils::snapshot_path(&self.target.datadir, &self.target.city, snapshot);
        tokio::fs::write(&path, &html).await?;
        ::log::debug!("Saved {}", path.display());

        Ok(html)
    }
}

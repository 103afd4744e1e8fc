use hotel_crawl::HotelCrawl;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse_normalized();

    ::log::info!("Starting hotel crawl for {}, {}", args.city, args.state);

    let mut crawl = HotelCrawl::new(&args.city, &args.state);
    if let Some(path) = &args.config {
        crawl = match crawl.with_config_file(path) {
            Ok(crawl) => crawl,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
    }
    if let Some(datadir) = args.datadir {
        crawl = crawl.with_datadir(datadir);
    }
    if let Some(output) = args.output {
        crawl = crawl.with_output(output);
    }

    let start_time = std::time::Instant::now();
    match crawl.run().await {
        Ok(summary) => {
            ::log::info!(
                "Crawling complete - {} hotels from {} list pages in {:.2} seconds",
                summary.hotels,
                summary.list_pages,
                start_time.elapsed().as_secs_f64()
            );
        }
        Err(e) => {
            ::log::error!("Crawl failed: {}", e);
            std::process::exit(1);
        }
    }
}

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that may be spelled with a single dash (`-city Boston`)
const SINGLE_DASH_FLAGS: [&str; 5] = ["datadir", "state", "city", "config", "output"];

#[derive(Parser, Debug)]
#[command(name = "hotel-crawl")]
#[command(about = "Crawls a city's hotel listings into a CSV file")]
#[command(version)]
pub struct Args {
    /// Directory to store raw html files
    #[arg(long)]
    pub datadir: Option<PathBuf>,

    /// State for which the hotel data is required
    #[arg(long)]
    pub state: String,

    /// City for which the hotel data is required
    #[arg(long)]
    pub city: String,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// CSV output file (defaults to <City>Hotels.csv)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parse the process arguments, accepting single-dash long flags
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }
}

/// Rewrites `-flag` and `-flag=value` to `--flag` for the known long flags
pub fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = s.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split('=').next().unwrap_or(rest);
            if SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{}", s))
            } else {
                arg
            }
        })
        .collect()
}

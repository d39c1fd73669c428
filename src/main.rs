use std::env;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use sls::{export, output_path, scrape_search, CsvWriterConfig, Dest, OnError, ScraperConfig};

/// Search Listing Scraper
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Args {
    /// Product search query
    pub query: String,
    /// Number of result pages to scrape
    #[clap(long, short, default_value_t = 1)]
    pub pages: u32,
    /// Path of the output csv file, derived from the query by default
    #[clap(parse(from_os_str), long, short)]
    pub output_file: Option<PathBuf>,
    /// Write csv records to stdout instead of a file
    #[clap(long, conflicts_with = "output-file")]
    pub stdout: bool,
    /// Optional default scraper yaml configuration file
    #[clap(env = "SLS_SCRAPER_CONFIG", parse(from_os_str), long)]
    pub scraper_config: Option<PathBuf>,
    /// Override scraper's user agent
    #[clap(long)]
    pub user_agent: Option<String>,
    /// Override scraper's search url template
    #[clap(long)]
    pub base_url: Option<String>,
    /// Override scraper's request timeout in seconds
    #[clap(long)]
    pub timeout: Option<u64>,
    /// Delay in seconds between page fetches
    #[clap(long)]
    pub throttle: Option<f32>,
    /// Override scraper's fetch error handling strategy
    #[clap(arg_enum, long)]
    pub on_fetch_error: Option<OnError>,
    /// When quiet no logs are outputted
    #[clap(long, short)]
    pub quiet: bool,
}

impl TryFrom<&Args> for ScraperConfig {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let mut conf = if let Some(file) = &args.scraper_config {
            ScraperConfig::load(file)?
        } else {
            ScraperConfig::default()
        };
        if let Some(user_agent) = &args.user_agent {
            conf.user_agent = user_agent.to_string();
        }
        if let Some(base_url) = &args.base_url {
            conf.base_url = base_url.to_string();
        }
        if let Some(timeout) = args.timeout {
            conf.timeout = timeout;
        }
        if let Some(throttle) = args.throttle {
            conf.throttle = Some(throttle);
        }
        if let Some(on_fetch_error) = args.on_fetch_error {
            conf.on_fetch_error = on_fetch_error;
        }
        conf.validate()?;
        Ok(conf)
    }
}

pub fn scrape(args: Args) -> anyhow::Result<()> {
    let conf: ScraperConfig = (&args).try_into()?;

    let dest = if args.stdout {
        Dest::Stdout
    } else {
        let path = args.output_file.clone();
        Dest::File(path.unwrap_or_else(|| output_path(&args.query)))
    };
    let notice = |msg: String| {
        if dest.owns_stdout() {
            eprintln!("{msg}");
        } else {
            println!("{msg}");
        }
    };

    notice(format!(
        "Scraping listings for '{}' over {} page(s)...",
        args.query, args.pages
    ));
    let start = Instant::now();

    let records = scrape_search(&conf, &args.query, args.pages)?;

    if records.is_empty() {
        notice(format!("No listings found for '{}'", args.query));
        return Ok(());
    }

    export(&records, &dest, &CsvWriterConfig::default())?;

    if let Dest::File(path) = &dest {
        println!("Saved {} listing(s) to {}", records.len(), path.display());
    }
    notice(format!(
        "Time taken: {:.2} seconds",
        start.elapsed().as_secs_f64()
    ));

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if !args.quiet {
        env::set_var("RUST_LOG", "sls=info");
        env_logger::init();
    }
    scrape(args)
}

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::config::{OnError, ScraperConfig};
use crate::extract::Extractor;
use crate::fetch::{Fetcher, PageSource, PageStatus};
use crate::record::ListingRecord;

/// Fetches and extracts `pages` result pages from the live site. See
/// [`scrape_search_with`] for the loop itself.
pub fn scrape_search(
    config: &ScraperConfig,
    query: &str,
    pages: u32,
) -> Result<Vec<ListingRecord>> {
    let fetcher = Fetcher::new(config)?;
    scrape_search_with(&fetcher, config, query, pages)
}

/// Fetches and extracts `pages` result pages sequentially from `source`,
/// accumulating records in page then document order. A failed page
/// contributes nothing and never aborts the run, except for transport
/// errors when `on_fetch_error` is [`OnError::Fail`].
pub fn scrape_search_with<S: PageSource>(
    source: &S,
    config: &ScraperConfig,
    query: &str,
    pages: u32,
) -> Result<Vec<ListingRecord>> {
    config.validate()?;

    let extractor = Extractor::default();
    let mut records = Vec::new();

    for page in 1..=pages {
        match source.fetch_page(query, page) {
            Ok(PageStatus::Ok(body)) => {
                let listings = extractor.extract(&body);
                log::info!("Page {page}: {} listing(s)", listings.len());
                records.extend(listings);
            }
            Ok(PageStatus::Failed(status)) => {
                log::warn!("Failed to retrieve page {page}, status: {status}");
            }
            Err(e) => match config.on_fetch_error {
                OnError::SkipAndLog => log::warn!("Skipping page {page}: {e}"),
                OnError::Fail => return Err(e),
            },
        }

        if let Some(delay) = config.throttle {
            if page < pages {
                thread::sleep(Duration::from_secs_f32(delay));
            }
        }
    }

    Ok(records)
}

//! Search listing scraper: downloads commerce search-result pages one at a
//! time, extracts a fixed set of fields per listing, and writes them out as
//! one CSV table.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod record;
pub mod scrape;
pub mod sink;

pub use config::{OnError, ScraperConfig};
pub use extract::{Extractor, FieldRule, FieldValue, PostProcess, PLACEHOLDER};
pub use fetch::{page_url, Fetcher, PageSource, PageStatus};
pub use record::{ListingRecord, LISTING_HEADERS};
pub use scrape::{scrape_search, scrape_search_with};
pub use sink::{export, output_path, CsvSink, CsvWriterConfig, Dest, RecordSink};

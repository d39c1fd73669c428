use std::time::Duration;

use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::StatusCode;

use crate::config::ScraperConfig;

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANG: &str = "en-US,en;q=0.5";

/// Outcome of one page download.
#[derive(Debug)]
pub enum PageStatus {
    /// A 200 response and its body.
    Ok(String),
    /// Any other status; the caller logs it and skips the page.
    Failed(StatusCode),
}

/// Source of search-result pages. The network collaborator sits behind this
/// seam so the page loop can be driven without real I/O.
pub trait PageSource {
    fn fetch_page(&self, query: &str, page: u32) -> Result<PageStatus>;
}

/// Blocking page downloader with a browser-like header set.
pub struct Fetcher {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl Fetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
        })
    }
}

impl PageSource for Fetcher {
    /// Downloads one search-result page. Non-200 responses are classified
    /// as [`PageStatus::Failed`] rather than errors; transport failures
    /// propagate as errors.
    fn fetch_page(&self, query: &str, page: u32) -> Result<PageStatus> {
        let url = page_url(&self.base_url, query, page);
        log::info!("Fetching {url}");

        let resp = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, ACCEPT_HTML)
            .header(ACCEPT_LANGUAGE, ACCEPT_LANG)
            .send()?;

        if resp.status() != StatusCode::OK {
            return Ok(PageStatus::Failed(resp.status()));
        }
        Ok(PageStatus::Ok(resp.text()?))
    }
}

/// Builds the URL of one search-result page.
pub fn page_url(base_url: &str, query: &str, page: u32) -> String {
    format!("{base_url}{query}&page={page}")
}

use anyhow::anyhow;
use reqwest::StatusCode;
use sls::{scrape_search_with, OnError, PageSource, PageStatus, ScraperConfig};

/// Serves a fixed outcome per page number, in order.
struct ScriptedSource(Vec<ScriptedPage>);

enum ScriptedPage {
    Body(&'static str),
    Status(StatusCode),
    Broken,
}

impl PageSource for ScriptedSource {
    fn fetch_page(&self, _query: &str, page: u32) -> anyhow::Result<PageStatus> {
        match &self.0[(page - 1) as usize] {
            ScriptedPage::Body(body) => Ok(PageStatus::Ok((*body).to_owned())),
            ScriptedPage::Status(status) => Ok(PageStatus::Failed(*status)),
            ScriptedPage::Broken => Err(anyhow!("connection reset")),
        }
    }
}

const ONE_LISTING: &str = r#"
<html><body>
<div data-component-type="s-search-result">
  <h2 class="a-size-mini">Second Page Hit</h2>
  <span class="a-price-whole">999</span>
</div>
</body></html>"#;

#[test]
fn failed_page_contributes_nothing_and_later_pages_still_run() {
    let source = ScriptedSource(vec![
        ScriptedPage::Status(StatusCode::SERVICE_UNAVAILABLE),
        ScriptedPage::Body(ONE_LISTING),
    ]);

    let records = scrape_search_with(&source, &ScraperConfig::default(), "laptop", 2).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Second Page Hit");
}

#[test]
fn transport_error_is_skipped_by_default() {
    let source = ScriptedSource(vec![ScriptedPage::Broken, ScriptedPage::Body(ONE_LISTING)]);

    let records = scrape_search_with(&source, &ScraperConfig::default(), "laptop", 2).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn transport_error_aborts_when_configured_to_fail() {
    let source = ScriptedSource(vec![ScriptedPage::Broken, ScriptedPage::Body(ONE_LISTING)]);
    let conf = ScraperConfig {
        on_fetch_error: OnError::Fail,
        ..Default::default()
    };

    assert!(scrape_search_with(&source, &conf, "laptop", 2).is_err());
}

#[test]
fn negative_throttle_is_rejected_before_any_fetch() {
    let source = ScriptedSource(vec![
        ScriptedPage::Body(ONE_LISTING),
        ScriptedPage::Body(ONE_LISTING),
    ]);
    let conf = ScraperConfig {
        throttle: Some(-1.0),
        ..Default::default()
    };

    let err = scrape_search_with(&source, &conf, "laptop", 2).unwrap_err();
    assert!(err.to_string().contains("throttle"));
}

use csv::StringRecord;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Header row of the output table, in column order.
    pub static ref LISTING_HEADERS: StringRecord =
        StringRecord::from(vec!["Title", "Price", "Rating", "Reviews"]);
}

/// One scraped search-result listing.
///
/// Every field holds either the trimmed text extracted from the page or the
/// `"N/A"` placeholder, so a record is always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListingRecord {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub reviews: String,
}

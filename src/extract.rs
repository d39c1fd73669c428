use select::document::Document;
use select::node::Node;
use select::predicate::{Attr, Class, Name, Predicate};

use crate::record::ListingRecord;

/// Substituted for any field whose element is absent from a listing.
pub const PLACEHOLDER: &str = "N/A";

/// Attribute marking one search-result listing container.
const CONTAINER_MARKER: (&str, &str) = ("data-component-type", "s-search-result");

/// How a field's raw text is turned into its record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Trim surrounding whitespace.
    Trim,
    /// Keep only the first whitespace-delimited token,
    /// e.g. "4.5 out of 5 stars" becomes "4.5".
    FirstToken,
}

impl PostProcess {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Trim => text.trim().to_owned(),
            Self::FirstToken => text.split_whitespace().next().unwrap_or_default().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Found(String),
    Missing,
}

impl FieldValue {
    /// The record value: the extracted text, or the placeholder when missing.
    pub fn into_text(self) -> String {
        match self {
            Self::Found(text) => text,
            Self::Missing => PLACEHOLDER.to_owned(),
        }
    }
}

/// One declarative extraction rule: where a field lives inside a listing
/// container (tag name plus CSS class) and how its text is post-processed.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub tag: &'static str,
    pub class: &'static str,
    pub post: PostProcess,
}

impl FieldRule {
    /// Applies the rule to one listing container. The first matching
    /// descendant wins; no match yields [`FieldValue::Missing`].
    pub fn extract(&self, listing: &Node) -> FieldValue {
        listing
            .find(Name(self.tag).and(Class(self.class)))
            .next()
            .map(|node| FieldValue::Found(self.post.apply(&node.text())))
            .unwrap_or(FieldValue::Missing)
    }
}

/// Extracts [`ListingRecord`]s from a search-result page, one per listing
/// container, with each field located independently by its own rule.
#[derive(Debug, Clone)]
pub struct Extractor {
    pub title: FieldRule,
    pub price: FieldRule,
    pub rating: FieldRule,
    pub reviews: FieldRule,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            title: FieldRule {
                tag: "h2",
                class: "a-size-mini",
                post: PostProcess::Trim,
            },
            price: FieldRule {
                tag: "span",
                class: "a-price-whole",
                post: PostProcess::Trim,
            },
            rating: FieldRule {
                tag: "span",
                class: "a-icon-alt",
                post: PostProcess::FirstToken,
            },
            reviews: FieldRule {
                tag: "span",
                class: "a-size-base",
                post: PostProcess::Trim,
            },
        }
    }
}

impl Extractor {
    /// Extracts one record per listing container, in document order.
    /// A page without any container simply yields an empty vec.
    pub fn extract(&self, page: &str) -> Vec<ListingRecord> {
        let document = Document::from(page);
        document
            .find(Name("div").and(Attr(CONTAINER_MARKER.0, CONTAINER_MARKER.1)))
            .map(|listing| self.record(&listing))
            .collect()
    }

    fn record(&self, listing: &Node) -> ListingRecord {
        ListingRecord {
            title: self.title.extract(listing).into_text(),
            price: self.price.extract(listing).into_text(),
            rating: self.rating.extract(listing).into_text(),
            reviews: self.reviews.extract(listing).into_text(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// One product scraped from a detail page.
///
/// Field order is the column order of the CSV output and the key order of
/// each JSON line. Optional fields serialize as `null` / an empty cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Universal product code from the product information table
    pub upc: String,

    /// Page heading
    pub title: Option<String>,

    /// Third breadcrumb entry (Home / Books / <Category> / <Title>)
    pub category: Option<String>,

    /// Meta description content
    pub description: Option<String>,

    /// Displayed price in pounds sterling
    pub price_gbp: Option<f64>,

    /// Number of copies available
    pub stock: Option<i64>,
}

/// The product information block of a detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInformation {
    pub upc: String,
    pub price_gbp: Option<f64>,
    pub stock: Option<i64>,
}

/// A detail page that produced no record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedPage {
    pub url: String,
    pub reason: String,
}

/// Everything a crawl produced, in discovery order
#[derive(Debug, Clone, Default)]
pub struct ScrapeOutcome {
    pub records: Vec<BookRecord>,
    pub dropped: Vec<DroppedPage>,
}

impl ScrapeOutcome {
    /// Number of detail pages that were attempted
    pub fn attempted(&self) -> usize {
        self.records.len() + self.dropped.len()
    }
}

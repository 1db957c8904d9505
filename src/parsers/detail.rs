//! Field extraction for a single product detail page.
//!
//! Every optional field is looked up on its own and degrades to `None`, so a
//! page missing one piece of markup still yields the rest of its record. Only
//! the UPC is required.

use crate::error::ExtractError;
use crate::parsers::selector;
use crate::parsers::text::{clean_text, extract_price, extract_stock};
use crate::results::{BookRecord, ProductInformation};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static BREADCRUMB: LazyLock<Selector> = LazyLock::new(|| selector("ul.breadcrumb"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="description"]"#));
static PRICE: LazyLock<Selector> = LazyLock::new(|| selector("p.price_color"));
static TABLE_ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static ROW_HEADER: LazyLock<Selector> = LazyLock::new(|| selector("th"));
static ROW_VALUE: LazyLock<Selector> = LazyLock::new(|| selector("td"));

const UPC_LABEL: &str = "UPC";
const AVAILABILITY_LABEL: &str = "Availability";

/// Breadcrumbs read Home / Books / <Category> / <Title>
const CATEGORY_CRUMB: usize = 2;

fn element_text(element: ElementRef<'_>) -> String {
    clean_text(element.text())
}

/// Value cell of the product table row whose header reads exactly `label`
pub fn table_value(doc: &Html, label: &str) -> Option<String> {
    doc.select(&TABLE_ROW).find_map(|row| {
        let header = row.select(&ROW_HEADER).next()?;
        if element_text(header) != label {
            return None;
        }
        row.select(&ROW_VALUE).next().map(element_text)
    })
}

pub fn upc(doc: &Html) -> Option<String> {
    table_value(doc, UPC_LABEL)
}

pub fn title(doc: &Html) -> Option<String> {
    doc.select(&HEADING).next().map(element_text)
}

pub fn category(doc: &Html) -> Option<String> {
    doc.select(&BREADCRUMB)
        .next()?
        .select(&LINK)
        .nth(CATEGORY_CRUMB)
        .map(element_text)
}

pub fn description(doc: &Html) -> Option<String> {
    doc.select(&META_DESCRIPTION)
        .next()?
        .value()
        .attr("content")
        .map(|content| content.trim().to_string())
}

pub fn price_gbp(doc: &Html) -> Option<f64> {
    let text = doc.select(&PRICE).next()?.text().collect::<String>();
    extract_price(&text)
}

pub fn stock(doc: &Html) -> Option<i64> {
    extract_stock(&table_value(doc, AVAILABILITY_LABEL)?)
}

/// Reads the product information block: UPC, price and availability
pub fn product_information(doc: &Html) -> Result<ProductInformation, ExtractError> {
    Ok(ProductInformation {
        upc: upc(doc).ok_or(ExtractError::MissingUpc)?,
        price_gbp: price_gbp(doc),
        stock: stock(doc),
    })
}

/// Builds the full record for a detail page.
///
/// Fails only when the page has no UPC row.
pub fn parse_book(doc: &Html) -> Result<BookRecord, ExtractError> {
    let ProductInformation {
        upc,
        price_gbp,
        stock,
    } = product_information(doc)?;

    Ok(BookRecord {
        upc,
        title: title(doc),
        category: category(doc),
        description: description(doc),
        price_gbp,
        stock,
    })
}

use regex::Regex;
use std::sync::LazyLock;

/// A pound sign followed by a decimal amount, e.g. "£56.13"
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"£(\d+\.\d+)").expect("price pattern should compile"));

static DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digits pattern should compile"));

/// Extracts the price in pounds from displayed price text
///
/// Returns `None` when the text holds no `£<digits>.<digits>` amount.
pub fn extract_price(text: &str) -> Option<f64> {
    let captures = PRICE_PATTERN.captures(text)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Extracts the first integer embedded in availability text,
/// e.g. "In stock (16 available)" gives 16
pub fn extract_stock(text: &str) -> Option<i64> {
    DIGITS_PATTERN.find(text)?.as_str().parse().ok()
}

/// Trims surrounding whitespace from text collected out of the markup
pub fn clean_text<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments.into_iter().collect::<String>().trim().to_string()
}

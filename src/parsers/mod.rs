pub mod detail;
pub mod listing;
pub mod text;


use scraper::Selector;

/// Compiles one of the crate's fixed CSS selectors
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

use crate::parsers::selector;
use crate::utils::resolve_link;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static PRODUCT_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector("article.product_pod h3 a[href]"));
static NEXT_PAGE_LINK: LazyLock<Selector> = LazyLock::new(|| selector("li.next a[href]"));

/// What one page of the catalog index points at
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    /// Absolute detail-page URLs, in page order
    pub product_urls: Vec<String>,

    /// The following listing page, if this is not the last one
    pub next_page: Option<Url>,
}

/// Parses a listing page, resolving every link against `page_url`
pub fn parse_listing(html: &str, page_url: &Url) -> ListingPage {
    let doc = Html::parse_document(html);

    let product_urls = doc
        .select(&PRODUCT_LINK)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(|href| resolve_link(page_url, href))
        .map(String::from)
        .collect::<Vec<_>>();

    let next_page = doc
        .select(&NEXT_PAGE_LINK)
        .filter_map(|e| e.value().attr("href"))
        .find_map(|href| resolve_link(page_url, href));

    ::log::debug!(
        "Listing {} has {} product links, next page: {:?}",
        page_url,
        product_urls.len(),
        next_page.as_ref().map(Url::as_str)
    );

    ListingPage {
        product_urls,
        next_page,
    }
}

use crate::error::CrawlError;
use crate::fetch::PageFetcher;
use crate::parsers::listing::parse_listing;
use url::Url;

/// Walks the paginated catalog index from `start_url` and returns every
/// product URL, page by page.
///
/// The walk stops at the first page without a "next" control. Any listing
/// page that cannot be fetched aborts the whole walk.
pub async fn traverse<F: PageFetcher>(
    fetcher: &F,
    start_url: &str,
) -> Result<Vec<String>, CrawlError> {
    let start = Url::parse(start_url).map_err(|source| CrawlError::InvalidUrl {
        url: start_url.to_string(),
        source,
    })?;

    let mut product_urls = Vec::new();
    let mut pages_visited = 0;
    let mut next_page = Some(start);

    while let Some(page_url) = next_page {
        let html = fetcher
            .fetch(page_url.as_str())
            .await
            .map_err(|source| CrawlError::Listing {
                url: page_url.to_string(),
                source,
            })?;

        let page = parse_listing(&html, &page_url);
        pages_visited += 1;
        ::log::info!(
            "Listing page {} ({}): {} products",
            pages_visited,
            page_url,
            page.product_urls.len()
        );

        product_urls.extend(page.product_urls);
        next_page = page.next_page;
    }

    ::log::info!(
        "Discovered {} product URLs across {} listing pages",
        product_urls.len(),
        pages_visited
    );
    Ok(product_urls)
}

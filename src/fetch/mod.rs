pub mod http;
pub mod webdriver;

pub use self::http::HttpFetcher;
pub use self::webdriver::WebDriverFetcher;

use crate::error::FetchError;
use scraper::Html;
use std::future::Future;

/// Retrieves the source of a page by URL.
///
/// Failures are returned as values so callers decide whether a missing page
/// is fatal (listing pages) or just drops one item (detail pages).
pub trait PageFetcher: Send + Sync {
    /// Fetch the page source at `url`
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;

    /// Release any resources held by the fetcher
    fn shutdown(&self) -> impl Future<Output = ()> + Send {
        async {}
    }
}

/// Fetches a page and parses it into a queryable document
pub async fn fetch_document<F: PageFetcher>(fetcher: &F, url: &str) -> Result<Html, FetchError> {
    let source = fetcher.fetch(url).await?;
    ::log::debug!("Fetched {} ({} bytes)", url, source.len());
    Ok(Html::parse_document(&source))
}

use crate::error::ExtractError;
use crate::fetch::{PageFetcher, fetch_document};
use crate::parsers::detail::parse_book;
use crate::results::{BookRecord, DroppedPage, ScrapeOutcome};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Fetches one detail page and extracts its record
pub async fn extract_book<F: PageFetcher>(
    fetcher: &F,
    url: &str,
) -> Result<BookRecord, ExtractError> {
    let doc = fetch_document(fetcher, url).await?;
    parse_book(&doc)
}

/// Extracts a record from every URL, keeping input order.
///
/// A page that fails is logged and listed in [`ScrapeOutcome::dropped`]; it
/// never stops the batch. With `max_concurrency` above one, up to that many
/// pages are fetched at once.
pub async fn extract_books<F>(
    fetcher: Arc<F>,
    urls: Vec<String>,
    max_concurrency: usize,
) -> ScrapeOutcome
where
    F: PageFetcher + 'static,
{
    // Capped at the page count and at tokio's MAX_PERMITS
    let permits = max_concurrency
        .min(urls.len())
        .min(Semaphore::MAX_PERMITS)
        .max(1);
    ::log::info!(
        "Extracting {} detail pages (concurrency {})",
        urls.len(),
        permits
    );

    let mut outcome = ScrapeOutcome::default();

    if permits == 1 {
        for url in urls {
            let result = extract_book(fetcher.as_ref(), &url).await;
            record_result(&mut outcome, url, result);
        }
    } else {
        let semaphore = Arc::new(Semaphore::new(permits));

        let handles = urls
            .into_iter()
            .map(|url| {
                let fetcher = Arc::clone(&fetcher);
                let semaphore = Arc::clone(&semaphore);
                let task_url = url.clone();
                let handle = tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await;
                    extract_book(fetcher.as_ref(), &task_url).await
                });
                (url, handle)
            })
            .collect::<Vec<_>>();

        // Awaiting in spawn order keeps records in input order
        for (url, handle) in handles {
            match handle.await {
                Ok(result) => record_result(&mut outcome, url, result),
                Err(e) => drop_page(&mut outcome, url, format!("extraction task failed: {e}")),
            }
        }
    }

    ::log::info!(
        "Extracted {} records, dropped {} pages",
        outcome.records.len(),
        outcome.dropped.len()
    );
    outcome
}

fn record_result(
    outcome: &mut ScrapeOutcome,
    url: String,
    result: Result<BookRecord, ExtractError>,
) {
    match result {
        Ok(book) => {
            ::log::debug!("Extracted {} from {}", book.upc, url);
            outcome.records.push(book);
        }
        Err(e) => drop_page(outcome, url, e.to_string()),
    }
}

fn drop_page(outcome: &mut ScrapeOutcome, url: String, reason: String) {
    ::log::warn!("Dropping {}: {}", url, reason);
    outcome.dropped.push(DroppedPage { url, reason });
}

pub mod config;
pub mod crawlers;
pub mod error;
pub mod fetch;
pub mod output;
pub mod parsers;
pub mod results;
pub mod utils;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types for convenience
pub use config::{FetchBackend, ScraperConfig};
pub use error::Error;
pub use results::{BookRecord, DroppedPage, ScrapeOutcome};

use fetch::{HttpFetcher, PageFetcher, WebDriverFetcher};
use std::path::Path;
use std::sync::Arc;

/// Main builder for a catalog crawl
pub struct BookCrawl {
    config: ScraperConfig,
}

impl BookCrawl {
    /// Create a crawl of the catalog starting at `start_url`, with default settings
    pub fn new(start_url: &str) -> Self {
        Self {
            config: ScraperConfig::new(start_url),
        }
    }

    /// Create a crawl from a complete configuration
    pub fn from_config(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, Error> {
        let config = ScraperConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Error> {
        let config = ScraperConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Set the maximum number of detail pages fetched at once
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Choose how pages are retrieved
    pub fn with_backend(mut self, backend: FetchBackend) -> Self {
        self.config.backend = backend;
        self
    }

    /// The configuration the crawl will run with
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Run the crawl with the configured backend
    pub async fn run(self) -> Result<ScrapeOutcome, Error> {
        match self.config.backend {
            FetchBackend::Http => {
                let fetcher = Arc::new(HttpFetcher::new(&self.config)?);
                self.run_with(fetcher).await
            }
            FetchBackend::WebDriver => {
                let fetcher = Arc::new(WebDriverFetcher::new(&self.config.webdriver_url));
                let outcome = self.run_with(Arc::clone(&fetcher)).await;
                fetcher.shutdown().await;
                outcome
            }
        }
    }

    /// Run the crawl with a caller-supplied fetcher
    ///
    /// Every listing page is walked before any detail page is fetched.
    pub async fn run_with<F>(&self, fetcher: Arc<F>) -> Result<ScrapeOutcome, Error>
    where
        F: PageFetcher + 'static,
    {
        ::log::info!("Crawling catalog from {}", self.config.start_url);

        let urls = crawlers::listing::traverse(fetcher.as_ref(), &self.config.start_url).await?;
        Ok(crawlers::detail::extract_books(fetcher, urls, self.config.max_concurrency).await)
    }
}

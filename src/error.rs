use thiserror::Error;

/// Failure to retrieve a page's source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("could not connect to any WebDriver server (tried {0})")]
    NoSession(String),
}

/// Failure to turn one detail page into a record
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] FetchError),

    #[error("page has no UPC row in its product table")]
    MissingUpc,
}

/// Failure while walking the paginated listing
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid listing URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to fetch listing page {url}: {source}")]
    Listing {
        url: String,
        #[source]
        source: FetchError,
    },
}

/// Failure while writing result files
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("no records to write; a CSV header needs at least one record")]
    Empty,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error returned by the crawl entry points
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Crawl(#[from] CrawlError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

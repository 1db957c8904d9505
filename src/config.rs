use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// How pages are retrieved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchBackend {
    /// Plain HTTP GET requests
    #[default]
    Http,
    /// A browser session driven over the WebDriver protocol
    WebDriver,
}

/// Configuration for a catalog crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// First listing page of the catalog
    #[serde(default = "default_start_url")]
    pub start_url: String,

    /// Directory the result files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name of the CSV output inside `output_dir`
    #[serde(default = "default_csv_file")]
    pub csv_file: String,

    /// File name of the JSON Lines output inside `output_dir`
    #[serde(default = "default_jsonl_file")]
    pub jsonl_file: String,

    /// Maximum number of detail pages fetched at once
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Page retrieval backend
    #[serde(default)]
    pub backend: FetchBackend,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Per-request timeout for the HTTP backend
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User agent sent by the HTTP backend
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_start_url() -> String {
    "http://books.toscrape.com/catalogue/page-1.html".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_csv_file() -> String {
    "results.csv".to_string()
}

fn default_jsonl_file() -> String {
    "results.jsonl".to_string()
}

/// One detail page at a time unless asked otherwise
fn default_max_concurrency() -> usize {
    1
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self::new(&default_start_url())
    }
}

impl ScraperConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            output_dir: default_output_dir(),
            csv_file: default_csv_file(),
            jsonl_file: default_jsonl_file(),
            max_concurrency: default_max_concurrency(),
            backend: FetchBackend::default(),
            webdriver_url: default_webdriver_url(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_file)
    }

    pub fn jsonl_path(&self) -> PathBuf {
        self.output_dir.join(&self.jsonl_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config = ScraperConfig::from_json("{}").unwrap();
        assert_eq!(
            config.start_url,
            "http://books.toscrape.com/catalogue/page-1.html"
        );
        assert_eq!(config.max_concurrency, 1);
        assert_eq!(config.backend, FetchBackend::Http);
        assert_eq!(config.csv_path(), PathBuf::from("artifacts/results.csv"));
        assert_eq!(
            config.jsonl_path(),
            PathBuf::from("artifacts/results.jsonl")
        );
    }

    #[test]
    fn test_overrides_from_json() {
        let json = r#"{
            "start_url": "http://localhost:8000/index.html",
            "output_dir": "out",
            "max_concurrency": 8,
            "backend": "webdriver"
        }"#;
        let config = ScraperConfig::from_json(json).unwrap();
        assert_eq!(config.start_url, "http://localhost:8000/index.html");
        assert_eq!(config.max_concurrency, 8);
        assert_eq!(config.backend, FetchBackend::WebDriver);
        assert_eq!(config.csv_path(), PathBuf::from("out/results.csv"));
        assert_eq!(config.webdriver_url, "http://localhost:4444");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            ScraperConfig::from_json("{\"max_concurrency\": \"lots\"}"),
            Err(ConfigError::Json(_))
        ));
    }
}

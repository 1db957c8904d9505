use book_crawl::{FetchBackend, ScraperConfig, error::ConfigError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "book-crawl")]
#[command(about = "Crawls a paginated book catalog and writes every product to CSV and JSON Lines")]
#[command(version)]
pub struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// First listing page of the catalog
    #[arg(long)]
    pub start_url: Option<String>,

    /// Directory the result files are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Number of detail pages fetched at once
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Page retrieval backend
    #[arg(short, long, value_enum)]
    pub backend: Option<BackendArg>,

    /// WebDriver server used by the webdriver backend; takes precedence over
    /// the WEBDRIVER_URL environment variable, which beats the config file
    #[arg(long)]
    pub webdriver_url: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Http,
    Webdriver,
}

impl From<BackendArg> for FetchBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Http => FetchBackend::Http,
            BackendArg::Webdriver => FetchBackend::WebDriver,
        }
    }
}

impl Args {
    /// Build the run configuration: file (or defaults), then the environment,
    /// then flag overrides
    pub fn into_config(self) -> Result<ScraperConfig, ConfigError> {
        let env_webdriver_url = std::env::var("WEBDRIVER_URL").ok();
        self.into_config_with_env(env_webdriver_url)
    }

    fn into_config_with_env(
        self,
        env_webdriver_url: Option<String>,
    ) -> Result<ScraperConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };

        if let Some(webdriver_url) = env_webdriver_url.filter(|url| !url.is_empty()) {
            config.webdriver_url = webdriver_url;
        }

        if let Some(start_url) = self.start_url {
            config.start_url = start_url;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(concurrency) = self.concurrency {
            config.max_concurrency = concurrency;
        }
        if let Some(backend) = self.backend {
            config.backend = backend.into();
        }
        if let Some(webdriver_url) = self.webdriver_url {
            config.webdriver_url = webdriver_url;
        }

        Ok(config)
    }
}

use crate::error::FetchError;
use crate::fetch::PageFetcher;
use fantoccini::{Client, ClientBuilder};
use tokio::sync::Mutex;

/// Well-known local WebDriver endpoints tried when the configured one is down
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444",
];

/// Fetches pages through a browser session driven over WebDriver.
///
/// The session is opened lazily on the first fetch and shared by all callers;
/// concurrent fetches take turns on it.
pub struct WebDriverFetcher {
    webdriver_url: String,
    client: Mutex<Option<Client>>,
}

impl WebDriverFetcher {
    pub fn new(webdriver_url: &str) -> Self {
        Self {
            webdriver_url: webdriver_url.to_string(),
            client: Mutex::new(None),
        }
    }
}

impl PageFetcher for WebDriverFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut session = self.client.lock().await;

        if session.is_none() {
            *session = Some(connect_to_webdriver(&self.webdriver_url).await?);
        }
        let Some(client) = session.as_ref() else {
            return Err(FetchError::NoSession(self.webdriver_url.clone()));
        };

        client.goto(url).await?;
        Ok(client.source().await?)
    }

    async fn shutdown(&self) {
        if let Some(client) = self.client.lock().await.take() {
            if let Err(e) = client.close().await {
                ::log::warn!("Failed to close WebDriver session: {}", e);
            }
        }
    }
}

/// Connects to the configured WebDriver instance, falling back to common local ports
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client, FetchError> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!(
                "Failed to connect to WebDriver at {}: {}",
                webdriver_url,
                e
            );
        }
    }

    for url in FALLBACK_WEBDRIVER_URLS {
        if url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(FetchError::NoSession(webdriver_url.to_string()))
}

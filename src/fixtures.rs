//! In-memory catalog pages for tests.

use crate::error::FetchError;
use crate::fetch::PageFetcher;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub const BASE_URL: &str = "http://books.test/catalogue/";

/// Serves page sources from a map and records every requested and answered URL
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<String>>,
    completions: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    /// Hold the answer for `url` back by `delay`
    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// URLs in the order their answers were returned
    pub fn completions(&self) -> Vec<String> {
        self.completions.lock().unwrap().clone()
    }
}

impl PageFetcher for FixtureFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
        self.completions.lock().unwrap().push(url.to_string());

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

pub fn page_url(page: usize) -> String {
    format!("{BASE_URL}page-{page}.html")
}

pub fn book_url(slug: &str) -> String {
    format!("{BASE_URL}{slug}/index.html")
}

/// A listing page linking to `slugs` with an optional "next" control
pub fn listing_html(slugs: &[&str], next: Option<&str>) -> String {
    let products = slugs
        .iter()
        .map(|slug| {
            format!(
                r#"<li><article class="product_pod">
                    <div class="image_container"><a href="{slug}/index.html"><img src="x.jpg"></a></div>
                    <h3><a href="{slug}/index.html" title="{slug}">{slug}</a></h3>
                    <p class="price_color">£10.00</p>
                </article></li>"#
            )
        })
        .collect::<String>();

    let pager = match next {
        Some(href) => format!(
            r#"<ul class="pager"><li class="current">Page</li><li class="next"><a href="{href}">next</a></li></ul>"#
        ),
        None => r#"<ul class="pager"><li class="previous"><a href="page-1.html">previous</a></li></ul>"#
            .to_string(),
    };

    format!(
        r#"<html><body><section><ol class="row">{products}</ol><div>{pager}</div></section></body></html>"#
    )
}

/// Pieces of a detail page; `None` leaves that markup out entirely
pub struct DetailPage<'a> {
    pub upc: Option<&'a str>,
    pub title: Option<&'a str>,
    pub breadcrumb: &'a [&'a str],
    pub description: Option<&'a str>,
    pub price: Option<&'a str>,
    pub availability: Option<&'a str>,
}

impl Default for DetailPage<'_> {
    fn default() -> Self {
        Self {
            upc: Some("b5ea0b5dabed25a8"),
            title: Some("The Secret of Dreadwillow Carse"),
            breadcrumb: &["Home", "Books", "Childrens"],
            description: Some("The last heir of a cursed kingdom sets out alone."),
            price: Some("£56.13"),
            availability: Some("In stock (16 available)"),
        }
    }
}

impl DetailPage<'_> {
    pub fn html(&self) -> String {
        let meta = self
            .description
            .map(|d| format!("<meta name=\"description\" content=\"\n    {d}\n\">"))
            .unwrap_or_default();
        let crumbs = self
            .breadcrumb
            .iter()
            .map(|c| format!(r#"<li><a href="{c}.html"> {c} </a></li>"#))
            .collect::<String>();
        let heading = self
            .title
            .map(|t| format!("<h1>{t}</h1>"))
            .unwrap_or_default();
        let price = self
            .price
            .map(|p| format!(r#"<p class="price_color">{p}</p>"#))
            .unwrap_or_default();
        let upc_row = self
            .upc
            .map(|u| format!("<tr><th>UPC</th><td>{u}</td></tr>"))
            .unwrap_or_default();
        let availability_row = self
            .availability
            .map(|a| format!("<tr><th>Availability</th>\n<td>{a}</td></tr>"))
            .unwrap_or_default();

        format!(
            r#"<html><head><title>Book</title>{meta}</head><body>
            <ul class="breadcrumb">{crumbs}<li class="active">{title}</li></ul>
            <div class="product_main">{heading}{price}</div>
            <table class="table table-striped">
                {upc_row}
                <tr><th>Product Type</th><td>Books</td></tr>
                <tr><th>Price (excl. tax)</th><td>£56.13</td></tr>
                {availability_row}
            </table>
            </body></html>"#,
            title = self.title.unwrap_or_default(),
        )
    }
}

/// A complete detail page for `upc` with every field present
pub fn book_html(upc: &str, title: &str) -> String {
    DetailPage {
        upc: Some(upc),
        title: Some(title),
        ..DetailPage::default()
    }
    .html()
}

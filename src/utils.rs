use url::Url;

/// Resolve an href found on `base` into an absolute URL without a fragment
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    match base.join(href) {
        Ok(mut resolved) => {
            resolved.set_fragment(None);
            Some(resolved)
        }
        Err(e) => {
            ::log::debug!("Skipping unresolvable link {:?} on {}: {}", href, base, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_link() {
        let base = Url::parse("http://books.toscrape.com/catalogue/page-2.html").unwrap();

        let resolved = resolve_link(&base, "a-light-in-the-attic_1000/index.html").unwrap();
        assert_eq!(
            resolved.as_str(),
            "http://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html"
        );

        let resolved = resolve_link(&base, "page-3.html").unwrap();
        assert_eq!(
            resolved.as_str(),
            "http://books.toscrape.com/catalogue/page-3.html"
        );
    }

    #[test]
    fn test_resolve_link_from_site_root() {
        let base = Url::parse("http://books.toscrape.com/").unwrap();
        let resolved = resolve_link(&base, "catalogue/page-2.html").unwrap();
        assert_eq!(
            resolved.as_str(),
            "http://books.toscrape.com/catalogue/page-2.html"
        );
    }

    #[test]
    fn test_resolve_link_strips_fragment() {
        let base = Url::parse("https://example.com/docs/").unwrap();
        let resolved = resolve_link(&base, "page.html#section").unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/docs/page.html");
    }

    #[test]
    fn test_absolute_link_is_kept() {
        let base = Url::parse("https://example.com/docs/").unwrap();
        let resolved = resolve_link(&base, "https://other.org/x").unwrap();
        assert_eq!(resolved.as_str(), "https://other.org/x");
    }
}

//! Listing page parser
//!
//! Finds the "watch" buttons on the event listing and turns them into an
//! ordered, deduplicated list of detail page links.

use scraper::{Html, Selector};

use crate::url::normalize_link;

/// Marker class carried by every watch button on the listing page
pub const WATCH_BUTTON_SELECTOR: &str = ".btn-watch";

/// Links containing this are external and never followed
const EXCLUDED_MARKER: &str = "www";

/// What one pass over the listing page found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingScan {
    /// Every watch button on the page, before any filtering
    pub watch_buttons: usize,
    /// Candidate detail page links, as returned by [`discover_links`]
    pub links: Vec<String>,
}

/// Parses listing HTML and returns candidate detail page links
///
/// Links keep document order. Missing/empty hrefs and anything containing
/// `"www"` are dropped, duplicates collapse onto their first occurrence, and
/// `fallback_path` is put in front unless the page already linked it.
///
/// # Arguments
/// * `html` - Raw HTML string from the listing page
/// * `base` - Site origin; absolute links on it are reduced to their path
/// * `fallback_path` - Detail page that must always be attempted
///
/// # Returns
/// Candidate links. Never fails: unusable markup just yields fewer links.
pub fn discover_links(html: &str, base: &str, fallback_path: &str) -> Vec<String> {
    scan_listing(html, base, fallback_path).links
}

/// Same as [`discover_links`], also counting the raw watch buttons
///
/// The `"www"` check looks at the href as written, so a link on a `www`
/// origin is dropped even though normalization would shorten it to a path.
pub fn scan_listing(html: &str, base: &str, fallback_path: &str) -> ListingScan {
    let mut scan = ListingScan::default();

    if let Ok(selector) = Selector::parse(WATCH_BUTTON_SELECTOR) {
        let document = Html::parse_document(html);

        for element in document.select(&selector) {
            scan.watch_buttons += 1;

            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let href = href.trim();
            if href.is_empty() || href.contains(EXCLUDED_MARKER) {
                continue;
            }

            let href = normalize_link(base, href);
            if !scan.links.iter().any(|l| l == href) {
                scan.links.push(href.to_string());
            }
        }
    }

    let fallback = normalize_link(base, fallback_path);
    if !scan.links.iter().any(|l| l == fallback) {
        scan.links.insert(0, fallback.to_string());
    }

    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BASE: &str = "https://hoadaotv.org";
    const FALLBACK: &str = "/havre-athletic-club-vs-paris-saint-germain-2397996";

    fn listing(hrefs: &[&str]) -> String {
        let buttons: String = hrefs
            .iter()
            .map(|h| format!(r#"<a class="btn btn-watch" href="{}">Xem</a>"#, h))
            .collect();
        format!("<html><body><div class=\"matches\">{}</div></body></html>", buttons)
    }

    #[test]
    fn test_empty_listing_yields_fallback_only() {
        let links = discover_links("<html><body></body></html>", BASE, FALLBACK);
        assert_eq!(links, vec![FALLBACK.to_string()]);
    }

    #[test]
    fn test_malformed_markup_never_fails() {
        let links = discover_links("<div class=\"btn-watch\" href=\"/a\"><<<", BASE, FALLBACK);
        assert_eq!(links, vec![FALLBACK.to_string(), "/a".to_string()]);
    }

    #[test]
    fn test_document_order_kept_with_fallback_prepended() {
        let html = listing(&["/match-1", "/match-2", "/match-3"]);
        let links = discover_links(&html, BASE, FALLBACK);
        assert_eq!(links, vec![FALLBACK, "/match-1", "/match-2", "/match-3"]);
    }

    #[test]
    fn test_fallback_not_duplicated_when_linked() {
        let html = listing(&["/match-1", FALLBACK, "/match-2"]);
        let links = discover_links(&html, BASE, FALLBACK);
        assert_eq!(links, vec!["/match-1", FALLBACK, "/match-2"]);
    }

    #[test]
    fn test_fallback_linked_absolute_on_same_origin() {
        let absolute = format!("{}{}", BASE, FALLBACK);
        let html = listing(&["/match-1", &absolute]);
        let links = discover_links(&html, BASE, FALLBACK);
        assert_eq!(links, vec!["/match-1", FALLBACK]);
    }

    #[test]
    fn test_www_and_empty_links_filtered() {
        let html = r#"
        <html><body>
            <a class="btn-watch" href="https://www.bet-site.com/promo">Bet</a>
            <a class="btn-watch" href="">Empty</a>
            <a class="btn-watch">No href</a>
            <a class="btn-watch" href="   ">Blank</a>
            <a class="btn-watch" href="/match-1">Watch</a>
        </body></html>
        "#;
        let links = discover_links(html, BASE, FALLBACK);
        assert_eq!(links, vec![FALLBACK, "/match-1"]);
    }

    #[test]
    fn test_duplicates_collapse_to_first() {
        let html = listing(&["/match-1", "/match-2", "/match-1", "/match-2"]);
        let links = discover_links(&html, BASE, FALLBACK);
        assert_eq!(links, vec![FALLBACK, "/match-1", "/match-2"]);
    }

    #[test]
    fn test_only_watch_buttons_selected() {
        let html = r#"
        <html><body>
            <a class="btn-detail" href="/not-a-watch">Details</a>
            <a href="/plain">Plain</a>
            <a class="btn-watch" href="/match-1">Watch</a>
        </body></html>
        "#;
        let links = discover_links(html, BASE, FALLBACK);
        assert_eq!(links, vec![FALLBACK, "/match-1"]);
    }

    #[test]
    fn test_foreign_absolute_link_kept() {
        let html = listing(&["https://mirror.tv/match-9"]);
        let links = discover_links(&html, BASE, FALLBACK);
        assert_eq!(links, vec![FALLBACK, "https://mirror.tv/match-9"]);
    }

    #[test]
    fn test_www_link_dropped_on_www_origin() {
        let html = r#"<a class="btn-watch" href="https://www.site.tv/m1">Xem</a>"#;
        let links = discover_links(html, "https://www.site.tv", "/fb");
        assert_eq!(links, vec!["/fb"]);
    }

    #[test]
    fn test_scan_counts_every_watch_button() {
        let html = r#"
        <html><body>
            <a class="btn-watch" href="/match-1">Watch</a>
            <a class="btn-watch" href="/match-1">Again</a>
            <a class="btn-watch" href="https://www.bet-site.com/promo">Bet</a>
            <a class="btn-watch">No href</a>
            <a class="btn-detail" href="/match-2">Details</a>
        </body></html>
        "#;
        let scan = scan_listing(html, BASE, FALLBACK);
        assert_eq!(scan.watch_buttons, 4);
        assert_eq!(scan.links, vec![FALLBACK, "/match-1"]);
    }

    fn href_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just(FALLBACK.to_string()),
            Just(format!("{}{}", BASE, FALLBACK)),
            "/match-[0-9]{1,2}",
            "https://www\\.[a-z]{3}\\.com/[a-z]{1,4}",
            "/[a-z]{1,3}www[a-z]{0,3}",
        ]
    }

    proptest! {
        #[test]
        fn prop_no_duplicates_and_fallback_once(hrefs in prop::collection::vec(href_strategy(), 0..20)) {
            let refs: Vec<&str> = hrefs.iter().map(String::as_str).collect();
            let links = discover_links(&listing(&refs), BASE, FALLBACK);

            let mut seen = std::collections::HashSet::new();
            for link in &links {
                prop_assert!(seen.insert(link.clone()), "duplicate link {}", link);
            }
            prop_assert_eq!(links.iter().filter(|l| l.as_str() == FALLBACK).count(), 1);
        }

        #[test]
        fn prop_no_www_or_empty_links(hrefs in prop::collection::vec(href_strategy(), 0..20)) {
            let refs: Vec<&str> = hrefs.iter().map(String::as_str).collect();
            let links = discover_links(&listing(&refs), BASE, FALLBACK);

            for link in &links {
                prop_assert!(!link.is_empty());
                prop_assert!(!link.contains("www"));
            }
        }
    }
}

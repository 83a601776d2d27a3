//! URL helper functions
//!
//! Provides functions for turning listing links into detail page URLs and labels.

/// Builds the fully-qualified detail page URL for a discovered link
///
/// # Arguments
/// * `origin` - Site origin (e.g., "https://hoadaotv.org")
/// * `link` - Path or absolute URL taken from the listing page
///
/// # Returns
/// `link` unchanged if it is already absolute, otherwise `origin` + `link`
///
/// # Example
/// ```
/// use livescrape_core::url::resolve_detail_url;
/// let url = resolve_detail_url("https://hoadaotv.org", "/team-a-vs-team-b-1");
/// assert_eq!(url, "https://hoadaotv.org/team-a-vs-team-b-1");
/// ```
pub fn resolve_detail_url(origin: &str, link: &str) -> String {
    if link.starts_with("http") {
        link.to_string()
    } else {
        format!("{}{}", origin, link)
    }
}

/// Derives the channel display label from a discovered link
///
/// Strips one leading `/`; anything else is kept as-is.
///
/// # Example
/// ```
/// use livescrape_core::url::derive_label;
/// assert_eq!(derive_label("/team-a-vs-team-b-1"), "team-a-vs-team-b-1");
/// ```
pub fn derive_label(link: &str) -> String {
    link.strip_prefix('/').unwrap_or(link).to_string()
}

/// Reduces an absolute link on `origin` to its path
///
/// Lets `/x` and `https://origin/x` compare equal during dedup. Links on
/// other hosts, and paths, come back untouched.
///
/// # Example
/// ```
/// use livescrape_core::url::normalize_link;
/// assert_eq!(normalize_link("https://hoadaotv.org", "https://hoadaotv.org/live-1"), "/live-1");
/// assert_eq!(normalize_link("https://hoadaotv.org", "/live-1"), "/live-1");
/// ```
pub fn normalize_link<'a>(origin: &str, link: &'a str) -> &'a str {
    let origin = origin.trim_end_matches('/');
    if origin.is_empty() {
        return link;
    }
    match link.strip_prefix(origin) {
        Some(path) if path.starts_with('/') => path,
        _ => link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://hoadaotv.org";

    #[test]
    fn test_resolve_relative_link() {
        let url = resolve_detail_url(ORIGIN, "/havre-vs-psg-2397996");
        assert_eq!(url, "https://hoadaotv.org/havre-vs-psg-2397996");
    }

    #[test]
    fn test_resolve_absolute_link() {
        let url = resolve_detail_url(ORIGIN, "https://mirror.example/live/1");
        assert_eq!(url, "https://mirror.example/live/1");
    }

    #[test]
    fn test_derive_label_strips_one_leading_slash() {
        assert_eq!(derive_label("/havre-vs-psg"), "havre-vs-psg");
        assert_eq!(derive_label("//double"), "/double");
        assert_eq!(derive_label("no-slash"), "no-slash");
    }

    #[test]
    fn test_derive_label_keeps_inner_slashes() {
        assert_eq!(derive_label("/live/match-1"), "live/match-1");
    }

    #[test]
    fn test_normalize_same_origin() {
        assert_eq!(normalize_link(ORIGIN, "https://hoadaotv.org/match-1"), "/match-1");
        assert_eq!(normalize_link("https://hoadaotv.org/", "https://hoadaotv.org/match-1"), "/match-1");
    }

    #[test]
    fn test_normalize_other_host_untouched() {
        assert_eq!(
            normalize_link(ORIGIN, "https://hoadaotv.org.evil/match-1"),
            "https://hoadaotv.org.evil/match-1"
        );
        assert_eq!(normalize_link(ORIGIN, "https://other.tv/x"), "https://other.tv/x");
    }

    #[test]
    fn test_normalize_empty_origin() {
        assert_eq!(normalize_link("", "https://hoadaotv.org/x"), "https://hoadaotv.org/x");
    }
}

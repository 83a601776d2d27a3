//! Stream link extraction for detail pages
//!
//! Detail pages don't expose stream URLs in markup. They live in an inline
//! script as `const serverStreamLinks = {...};`, so this is a textual match
//! over the raw page source rather than a DOM query.

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{Result, ScrapeError};
use crate::types::StreamLinkSet;

/// Matches the script assignment and captures the shortest `{...}` before `;`
const STREAM_LINKS_PATTERN: &str = r"(?s)const\s+serverStreamLinks\s*=\s*(\{.*?\});";

/// Extracts the embedded stream link object from detail page HTML
///
/// # Arguments
/// * `html` - Raw HTML string from a detail page
///
/// # Returns
/// * `Ok(Some(links))` - the object, verbatim
/// * `Ok(None)` - no assignment on the page (event not live yet)
///
/// # Errors
/// Returns `MalformedStreamData` if the assignment is there but the captured
/// text is not a JSON object
pub fn parse_stream_links(html: &str) -> Result<Option<StreamLinkSet>> {
    let Ok(re) = Regex::new(STREAM_LINKS_PATTERN) else {
        return Ok(None);
    };

    let Some(raw) = re
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return Ok(None);
    };

    let links: Map<String, Value> = serde_json::from_str(raw)
        .map_err(|e| ScrapeError::MalformedStreamData(e.to_string()))?;

    Ok(Some(StreamLinkSet::new(links)))
}

//! Core data types for the live-stream scraper
//!
//! Contains the records passed between the collector and the playlist builder.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Quality labels tried, in order, when picking the stream URL of a channel
pub const QUALITY_PRECEDENCE: [&str; 3] = ["hd", "fullhd", "sd"];

/// Quality-label to stream-URL mapping recovered from a detail page
///
/// Kept verbatim as the JSON object the page embedded: keys are whatever
/// the source used (e.g. "hd", "fullhd", "sd") and values are not checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamLinkSet(Map<String, Value>);

impl StreamLinkSet {
    /// Wrap an already parsed JSON object
    pub fn new(links: Map<String, Value>) -> Self {
        Self(links)
    }

    /// Look up a non-empty URL string for a quality label
    pub fn url(&self, quality: &str) -> Option<&str> {
        self.0
            .get(quality)
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Pick the first available URL following [`QUALITY_PRECEDENCE`]
    pub fn preferred_url(&self) -> Option<&str> {
        QUALITY_PRECEDENCE.iter().find_map(|quality| self.url(quality))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the raw JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StreamLinkSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }
}

/// A live event whose detail page exposed stream links
///
/// Only created when extraction succeeded for the link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRecord {
    /// Display label derived from the link path (e.g., "team-a-vs-team-b-123")
    pub label: String,

    /// Fully-qualified detail page URL
    pub link: String,

    /// Stream URLs embedded in the detail page
    #[serde(rename = "streamLinks")]
    pub stream_links: StreamLinkSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preferred_url_hd_first() {
        let links: StreamLinkSet = [("sd", "http://x/sd.m3u8"), ("hd", "http://x/hd.m3u8")]
            .into_iter()
            .collect();
        assert_eq!(links.preferred_url(), Some("http://x/hd.m3u8"));
    }

    #[test]
    fn test_preferred_url_falls_back_to_fullhd_then_sd() {
        let links: StreamLinkSet = [("fullhd", "http://x/fhd.m3u8"), ("sd", "http://x/sd.m3u8")]
            .into_iter()
            .collect();
        assert_eq!(links.preferred_url(), Some("http://x/fhd.m3u8"));

        let links: StreamLinkSet = [("sd", "http://x/sd.m3u8")].into_iter().collect();
        assert_eq!(links.preferred_url(), Some("http://x/sd.m3u8"));
    }

    #[test]
    fn test_preferred_url_skips_empty_and_non_string() {
        let map = json!({ "hd": "", "fullhd": 1080, "sd": "http://x/sd.m3u8" });
        let links = StreamLinkSet::new(map.as_object().cloned().unwrap_or_default());
        assert_eq!(links.preferred_url(), Some("http://x/sd.m3u8"));
    }

    #[test]
    fn test_preferred_url_none() {
        let links: StreamLinkSet = [("4k", "http://x/4k.m3u8")].into_iter().collect();
        assert_eq!(links.preferred_url(), None);
    }

    #[test]
    fn test_channel_record_serialization() {
        let record = ChannelRecord {
            label: "team-a-vs-team-b-1".to_string(),
            link: "https://hoadaotv.org/team-a-vs-team-b-1".to_string(),
            stream_links: [("hd", "http://x/a.m3u8")].into_iter().collect(),
        };

        let value = serde_json::to_value(&record).expect("Serialization should succeed");
        assert_eq!(
            value,
            json!({
                "label": "team-a-vs-team-b-1",
                "link": "https://hoadaotv.org/team-a-vs-team-b-1",
                "streamLinks": { "hd": "http://x/a.m3u8" }
            })
        );
    }
}

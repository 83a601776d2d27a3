//! Channel playlist document builder
//!
//! Turns collected [`ChannelRecord`]s into the playlist schema and merges
//! them into a template document. The template is only read; a fresh
//! document is returned.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, ScrapeError};
use crate::id::{
    CHANNEL_PREFIX, CONTENT_PREFIX, IdSource, SOURCE_PREFIX, STREAM_LINK_PREFIX, STREAM_PREFIX,
};
use crate::types::ChannelRecord;

const SERVER_NAME: &str = "Server 1";
const DEFAULT_IMAGE_URL: &str = "https://kaytee1012.github.io/buncha_logo.png";

/// Overlay badge shown on a channel tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelLabel {
    pub position: String,
    pub text: String,
    pub color: String,
    pub text_color: String,
}

impl ChannelLabel {
    /// Red "● Live" badge in the top-left corner
    pub fn live() -> Self {
        Self {
            position: "top-left".to_string(),
            text: "● Live".to_string(),
            color: "#FF0000".to_string(),
            text_color: "#FFFFFF".to_string(),
        }
    }
}

/// Image descriptor used when the template has none
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub url: String,
    pub height: u32,
    pub width: u32,
    pub display: String,
    pub shape: String,
}

impl Default for Image {
    fn default() -> Self {
        Self {
            url: DEFAULT_IMAGE_URL.to_string(),
            height: 480,
            width: 640,
            display: "cover".to_string(),
            shape: "square".to_string(),
        }
    }
}

/// Channel image: copied from the template when it has one
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChannelImage {
    Template(Value),
    Default(Image),
}

impl ChannelImage {
    /// Image of the template's first channel, or the built-in default
    ///
    /// Falsy template values (`null`, `false`, `""`, `0`) count as missing.
    pub fn from_template(template: &Value) -> Self {
        match template.pointer("/groups/0/channels/0/image") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Self::Default(Image::default()),
            Some(Value::String(s)) if s.is_empty() => Self::Default(Image::default()),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Self::Default(Image::default()),
            Some(image) => Self::Template(image.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestHeader {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamLink {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub default: bool,
    /// Omitted when the page offered none of hd/fullhd/sd
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub request_headers: Vec<RequestHeader>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stream {
    pub id: String,
    pub name: String,
    pub stream_links: Vec<StreamLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub id: String,
    pub name: String,
    pub streams: Vec<Stream>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    pub id: String,
    pub name: String,
    pub contents: Vec<Content>,
}

/// One channel entry of the output playlist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputChannel {
    pub id: String,
    pub name: String,
    pub labels: Vec<ChannelLabel>,
    pub description: String,
    pub image: ChannelImage,
    #[serde(rename = "type")]
    pub kind: String,
    pub display: String,
    pub sources: Vec<Source>,
}

/// Builds the output channel for one record
///
/// Produces exactly one source, content, stream and "HD" stream link. The
/// stream URL is the first of `hd`, `fullhd`, `sd` the record offers.
pub fn build_channel<I: IdSource + ?Sized>(
    record: &ChannelRecord,
    image: &ChannelImage,
    ids: &I,
) -> OutputChannel {
    let channel_id = ids.generate(CHANNEL_PREFIX);
    let source_id = ids.generate(SOURCE_PREFIX);
    let content_id = ids.generate(CONTENT_PREFIX);
    let stream_id = ids.generate(STREAM_PREFIX);

    let stream_link = StreamLink {
        id: ids.generate(STREAM_LINK_PREFIX),
        name: "HD".to_string(),
        kind: "hls".to_string(),
        default: true,
        url: record.stream_links.preferred_url().map(str::to_string),
        request_headers: vec![
            RequestHeader {
                key: "Referer".to_string(),
                value: record.link.clone(),
            },
            RequestHeader {
                key: "User-Agent".to_string(),
                value: "Mozilla/5.0".to_string(),
            },
        ],
    };

    let stream = Stream {
        id: stream_id,
        name: SERVER_NAME.to_string(),
        stream_links: vec![stream_link],
    };

    let content = Content {
        id: content_id,
        name: record.label.clone(),
        streams: vec![stream],
    };

    let source = Source {
        id: source_id,
        name: SERVER_NAME.to_string(),
        contents: vec![content],
    };

    OutputChannel {
        id: channel_id,
        name: record.label.clone(),
        labels: vec![ChannelLabel::live()],
        description: "Live Stream".to_string(),
        image: image.clone(),
        kind: "single".to_string(),
        display: "text-below".to_string(),
        sources: vec![source],
    }
}

/// Builds the output document from collected records and a template
///
/// `groups[0].channels` is replaced wholesale by the new channels; every
/// other field of the template is carried over unchanged. A missing or
/// non-array `groups` becomes `[{}]` first.
///
/// # Errors
/// Returns `InvalidTemplate` if the template root is not a JSON object
pub fn build_playlist<I: IdSource + ?Sized>(
    records: &[ChannelRecord],
    template: &Value,
    ids: &I,
) -> Result<Value> {
    let Value::Object(root) = template else {
        return Err(ScrapeError::InvalidTemplate(
            "template root must be a JSON object".to_string(),
        ));
    };

    let image = ChannelImage::from_template(template);
    let channels: Vec<OutputChannel> = records
        .iter()
        .map(|record| build_channel(record, &image, ids))
        .collect();
    let channels = serde_json::to_value(channels)?;

    let mut document = root.clone();
    if !matches!(document.get("groups"), Some(Value::Array(_))) {
        document.insert("groups".to_string(), Value::Array(Vec::new()));
    }
    if let Some(Value::Array(groups)) = document.get_mut("groups") {
        if groups.is_empty() {
            groups.push(Value::Object(Map::new()));
        }
        if !groups[0].is_object() {
            groups[0] = Value::Object(Map::new());
        }
        if let Value::Object(first) = &mut groups[0] {
            first.insert("channels".to_string(), channels);
        }
    }

    Ok(Value::Object(document))
}

//! Template loading and output writing

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Result, ScrapeError};

/// Reads the template document from disk
///
/// # Errors
/// - `TemplateNotFound` if nothing exists at `path`
/// - `InvalidTemplate` if the file is not valid JSON
/// - `Io` for any other read failure
pub fn load_template(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(ScrapeError::TemplateNotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| ScrapeError::InvalidTemplate(e.to_string()))
}

/// Serializes `document` as JSON with 4-space indentation
pub fn to_pretty_json(document: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    document.serialize(&mut serializer)?;
    Ok(buf)
}

/// Writes `document` to `path`, replacing whatever was there
pub fn write_document(path: &Path, document: &Value) -> Result<()> {
    let bytes = to_pretty_json(document)?;
    let mut file = fs::File::create(path)?;
    file.write_all(&bytes)?;
    Ok(())
}

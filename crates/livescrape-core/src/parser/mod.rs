//! HTML parsers for the live-event site
//!
//! Contains modules for parsing different page types.

pub mod listing;
pub mod stream_links;

pub use listing::{ListingScan, discover_links, scan_listing};
pub use stream_links::parse_stream_links;

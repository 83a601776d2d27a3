//! Identifier generation for output entities

use std::sync::atomic::{AtomicU64, Ordering};

pub const CHANNEL_PREFIX: &str = "ch";
pub const SOURCE_PREFIX: &str = "src";
pub const CONTENT_PREFIX: &str = "ct";
pub const STREAM_PREFIX: &str = "st";
pub const STREAM_LINK_PREFIX: &str = "lnk";

/// Produces opaque string IDs tagged with a caller-supplied prefix
pub trait IdSource {
    fn generate(&self, prefix: &str) -> String;
}

/// Random `<prefix>-<12 hex chars>` IDs (6 random bytes)
///
/// Uniqueness is probabilistic only.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn generate(&self, prefix: &str) -> String {
        let bytes = fastrand::u64(..) & 0xffff_ffff_ffff;
        format!("{}-{:012x}", prefix, bytes)
    }
}

/// Deterministic `<prefix>-<n>` IDs counting up from 1
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn generate(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", prefix, n)
    }
}

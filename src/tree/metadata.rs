//! Per-entry filesystem metadata captured during traversal

use std::fs::Metadata;

use chrono::{DateTime, Utc};

/// Snapshot of an entry's metadata, taken once when the entry is walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub name: String,
    pub size: u64,
    pub mode: u32,
    pub modified: Option<DateTime<Utc>>,
    pub is_dir: bool,
}

impl FileMetadata {
    pub fn from_metadata(name: impl Into<String>, meta: &Metadata) -> Self {
        Self {
            name: name.into(),
            size: meta.len(),
            mode: mode_bits(meta),
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
            is_dir: meta.is_dir(),
        }
    }
}

#[cfg(unix)]
fn mode_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}

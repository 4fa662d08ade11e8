//! Error types for tree building and JSON output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while walking the filesystem and linking nodes.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("cannot resolve '{path}': {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("traversal failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("cannot read metadata for '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("no root node found after traversal")]
    MissingRoot,

    #[error("entries '{first}' and '{second}' both have no parent")]
    AmbiguousRoot { first: PathBuf, second: PathBuf },
}

/// Errors raised while encoding the tree or writing the output file.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to encode tree: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to move output into place at '{path}': {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Top-level error for a full run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

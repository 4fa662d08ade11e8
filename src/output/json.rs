//! JSON output

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::OutputError;
use crate::tree::Tree;

use super::config::OutputConfig;
use super::json_types::JsonNode;

/// Encode a tree as a JSON document.
pub fn to_json(tree: &Tree, config: &OutputConfig) -> Result<Vec<u8>, OutputError> {
    let node = JsonNode::from(&tree.root);
    let bytes = if config.pretty {
        serde_json::to_vec_pretty(&node)?
    } else {
        serde_json::to_vec(&node)?
    };
    Ok(bytes)
}

/// Encode a tree and write it to `path`, returning the number of bytes written.
///
/// The document goes to a temporary file next to `path` which is renamed over
/// the target only after a complete write, so a failure never leaves a
/// truncated document behind.
pub fn write_json(tree: &Tree, path: &Path, config: &OutputConfig) -> Result<usize, OutputError> {
    let bytes = to_json(tree, config)?;
    let write_err = |source: std::io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = temp_file_in(dir).map_err(write_err)?;
    debug!(tmp = %tmp.path().display(), "writing output");
    tmp.write_all(&bytes).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;

    tmp.persist(path).map_err(|source| OutputError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(bytes.len())
}

/// Read a document written by [`write_json`] back into wire nodes.
pub fn read_json(path: &Path) -> Result<JsonNode, OutputError> {
    let data = fs::read(path).map_err(|source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| OutputError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Temp file created with mode 0644, narrowed by the process umask.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o644))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

//! Output configuration types

/// Configuration for JSON output.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Indent the document instead of writing it on one line
    pub pretty: bool,
}

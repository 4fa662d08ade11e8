//! Configuration types for the tree builder

use super::color::ColorScheme;

/// Path prefixes skipped by default, relative to the scanned root.
pub const DEFAULT_EXCLUDE_PREFIXES: &[&str] = &[
    ".git", "build/", "bin/", "gradle/", "libs/", ".gradle/", "buildSrc/", ".ci/",
];

/// Configuration for tree building behavior.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Plain string prefixes tested against each entry's root-relative path
    pub exclude_prefixes: Vec<String>,
    /// Glob patterns tested against each entry's file name
    pub exclude_patterns: Vec<String>,
    /// Depth coloring; `None` skips the coloring pass
    pub color: Option<ColorScheme>,
}

impl BuilderConfig {
    /// A configuration that walks everything and adds no color.
    pub fn unfiltered() -> Self {
        Self {
            exclude_prefixes: Vec::new(),
            exclude_patterns: Vec::new(),
            color: None,
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            exclude_prefixes: DEFAULT_EXCLUDE_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            exclude_patterns: Vec::new(),
            color: Some(ColorScheme::default()),
        }
    }
}

//! Entry exclusion for tree building

use std::path::Path;

use glob::{Pattern, PatternError};

/// Decides which entries are left out of the walk.
///
/// Prefixes are matched with plain `starts_with` against the path relative to
/// the root, `/`-separated, with a trailing `/` on directories. Patterns are
/// globs matched against the file name alone.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    prefixes: Vec<String>,
    patterns: Vec<Pattern>,
}

impl ExclusionFilter {
    pub fn new(prefixes: &[String], patterns: &[String]) -> Result<Self, PatternError> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            prefixes: prefixes.to_vec(),
            patterns,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty() && self.patterns.is_empty()
    }

    /// Check if the entry at `path` under `root` should be skipped.
    /// The root itself is never excluded.
    pub fn is_excluded(&self, root: &Path, path: &Path, is_dir: bool) -> bool {
        let Ok(relative) = path.strip_prefix(root) else {
            return false;
        };
        if relative.as_os_str().is_empty() {
            return false;
        }

        let mut rel = relative_key(relative);
        if is_dir {
            rel.push('/');
        }
        if self.prefixes.iter().any(|p| rel.starts_with(p.as_str())) {
            return true;
        }

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        self.patterns.iter().any(|p| p.matches(&name))
    }
}

/// Join path components with `/` regardless of platform.
fn relative_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::DEFAULT_EXCLUDE_PREFIXES;

    fn defaults() -> ExclusionFilter {
        let prefixes: Vec<String> = DEFAULT_EXCLUDE_PREFIXES
            .iter()
            .map(|p| p.to_string())
            .collect();
        ExclusionFilter::new(&prefixes, &[]).unwrap()
    }

    #[test]
    fn test_directory_prefix_matches_dir_itself() {
        let f = defaults();
        let root = Path::new("/repo");
        assert!(f.is_excluded(root, Path::new("/repo/build"), true));
        assert!(f.is_excluded(root, Path::new("/repo/build/out.o"), false));
        assert!(f.is_excluded(root, Path::new("/repo/.git"), true));
    }

    #[test]
    fn test_prefix_is_anchored_at_root() {
        let f = defaults();
        let root = Path::new("/repo");
        assert!(!f.is_excluded(root, Path::new("/repo/src/build"), true));
        assert!(!f.is_excluded(root, Path::new("/repo/src/main.rs"), false));
    }

    #[test]
    fn test_file_named_like_dir_prefix_kept() {
        // "build/" needs the trailing slash, which files never get
        let f = defaults();
        assert!(!f.is_excluded(Path::new("/repo"), Path::new("/repo/build"), false));
    }

    #[test]
    fn test_git_prefix_is_plain_string_match() {
        let f = defaults();
        let root = Path::new("/repo");
        assert!(f.is_excluded(root, Path::new("/repo/.gitignore"), false));
        assert!(f.is_excluded(root, Path::new("/repo/.github"), true));
    }

    #[test]
    fn test_root_never_excluded() {
        let f = ExclusionFilter::new(&["".to_string()], &["*".to_string()]).unwrap();
        assert!(!f.is_excluded(Path::new("/repo"), Path::new("/repo"), true));
    }

    #[test]
    fn test_glob_patterns_match_file_name() {
        let f = ExclusionFilter::new(&[], &["*.log".to_string(), "tmp?".to_string()]).unwrap();
        let root = Path::new("/repo");
        assert!(f.is_excluded(root, Path::new("/repo/a/debug.log"), false));
        assert!(f.is_excluded(root, Path::new("/repo/tmp1"), true));
        assert!(!f.is_excluded(root, Path::new("/repo/tmp12"), true));
        assert!(!f.is_excluded(root, Path::new("/repo/main.rs"), false));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(ExclusionFilter::new(&[], &["[".to_string()]).is_err());
    }

    #[test]
    fn test_empty_filter() {
        let f = ExclusionFilter::default();
        assert!(f.is_empty());
        assert!(!f.is_excluded(Path::new("/repo"), Path::new("/repo/.git"), true));
    }
}

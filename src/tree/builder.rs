//! TreeBuilder - walks a directory and links every entry into a tree

use std::collections::{BTreeMap, HashMap};
use std::path::{Component, Path, PathBuf};

use glob::PatternError;
use ignore::WalkBuilder;
use tracing::{debug, info};

use crate::error::BuildError;

use super::config::BuilderConfig;
use super::filter::ExclusionFilter;
use super::metadata::FileMetadata;
use super::node::{Node, Tree};

/// Builds the full tree in memory.
///
/// The walk is single-threaded and all-or-nothing: the first traversal error
/// aborts the build and no partial tree is returned.
pub struct TreeBuilder {
    config: BuilderConfig,
    filter: ExclusionFilter,
}

impl TreeBuilder {
    pub fn new(config: BuilderConfig) -> Result<Self, PatternError> {
        let filter = ExclusionFilter::new(&config.exclude_prefixes, &config.exclude_patterns)?;
        Ok(Self { config, filter })
    }

    pub fn build(&self, root: &Path) -> Result<Tree, BuildError> {
        let root = std::path::absolute(root)
            .map(|abs| normalize(&abs))
            .map_err(|source| BuildError::Resolve {
                path: root.to_path_buf(),
                source,
            })?;
        info!(root = %root.display(), "building tree");

        let nodes = self.walk(&root)?;
        let node_count = nodes.len();
        let mut tree_root = link(nodes)?;
        debug!(nodes = node_count, "linked tree");

        if let Some(scheme) = self.config.color {
            scheme.apply(&mut tree_root);
        }

        Ok(Tree {
            root: tree_root,
            node_count,
        })
    }

    /// Visit every entry under `root` once and key a fresh node by its path.
    fn walk(&self, root: &Path) -> Result<BTreeMap<PathBuf, Node>, BuildError> {
        let mut walker = WalkBuilder::new(root);
        walker
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        if !self.filter.is_empty() {
            let filter = self.filter.clone();
            let base = root.to_path_buf();
            walker.filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                let excluded = filter.is_excluded(&base, entry.path(), is_dir);
                if excluded {
                    debug!(path = %entry.path().display(), "excluded");
                }
                !excluded
            });
        }

        let mut nodes = BTreeMap::new();
        for result in walker.build() {
            let entry = result?;
            let path = entry.path().to_path_buf();
            let meta = entry.metadata().map_err(|source| BuildError::Metadata {
                path: path.clone(),
                source,
            })?;

            let mut node = Node::new(
                path.clone(),
                FileMetadata::from_metadata(entry_name(&path), &meta),
            );
            if !meta.is_dir() {
                node.size = meta.len();
            }
            nodes.insert(path, node);
        }

        Ok(nodes)
    }
}

/// Attach each node to the node keyed by its parent path.
///
/// The map is ordered, so every parent's children end up sorted by name.
fn link(nodes: BTreeMap<PathBuf, Node>) -> Result<Node, BuildError> {
    let paths: Vec<PathBuf> = nodes.keys().cloned().collect();
    let index: HashMap<&Path, usize> = paths
        .iter()
        .enumerate()
        .map(|(i, p)| (p.as_path(), i))
        .collect();
    let mut slots: Vec<Option<Node>> = nodes.into_values().map(Some).collect();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); slots.len()];
    let mut root: Option<usize> = None;

    for (i, path) in paths.iter().enumerate() {
        match path.parent().and_then(|p| index.get(p)) {
            Some(&parent) => {
                let parent_name = slots[parent].as_ref().map(|n| n.name.clone());
                if let Some(node) = slots[i].as_mut() {
                    node.parent_name = parent_name;
                    node.parent = Some(paths[parent].clone());
                }
                children[parent].push(i);
            }
            None => {
                if let Some(first) = root {
                    return Err(BuildError::AmbiguousRoot {
                        first: paths[first].clone(),
                        second: path.clone(),
                    });
                }
                root = Some(i);
            }
        }
    }

    let Some(root) = root else {
        return Err(BuildError::MissingRoot);
    };
    assemble(root, &mut slots, &children).ok_or(BuildError::MissingRoot)
}

fn assemble(idx: usize, slots: &mut [Option<Node>], children: &[Vec<usize>]) -> Option<Node> {
    let mut node = slots[idx].take()?;
    node.children = children[idx]
        .iter()
        .filter_map(|&child| assemble(child, slots, children))
        .collect();
    Some(node)
}

/// Drop `.` and fold `..` into its parent without touching the filesystem,
/// so symlinks are left unresolved.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Final path component, or the whole path for `/` and similar roots.
fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

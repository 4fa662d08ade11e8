//! In-memory tree of filesystem entries

use std::path::{Path, PathBuf};

use super::metadata::FileMetadata;

/// One filesystem entry and the entries beneath it.
///
/// Children are owned; the link back to the parent is the parent's path,
/// which is a key into the traversal map rather than a pointer.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub path: PathBuf,
    /// Byte length for files, 0 for directories.
    pub size: u64,
    pub children: Vec<Node>,
    pub parent_name: Option<String>,
    pub parent: Option<PathBuf>,
    pub color: Option<String>,
    pub metadata: FileMetadata,
}

impl Node {
    pub fn new(path: PathBuf, metadata: FileMetadata) -> Self {
        Self {
            name: metadata.name.clone(),
            path,
            size: 0,
            children: Vec::new(),
            parent_name: None,
            parent: None,
            color: None,
            metadata,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Sum of file sizes in this subtree. Not stored on any node.
    pub fn total_size(&self) -> u64 {
        self.size + self.children.iter().map(Node::total_size).sum::<u64>()
    }

    /// Depth of the deepest node below this one (0 for a leaf).
    pub fn max_depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.max_depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Find a node in this subtree by absolute path.
    pub fn find(&self, path: &Path) -> Option<&Node> {
        if self.path == path {
            return Some(self);
        }
        if !path.starts_with(&self.path) {
            return None;
        }
        self.children.iter().find_map(|c| c.find(path))
    }

    /// Pre-order iterator over this subtree.
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter { stack: vec![self] }
    }
}

pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A fully linked tree and the number of entries that went into it.
#[derive(Debug, Clone)]
pub struct Tree {
    pub root: Node,
    pub node_count: usize,
}

impl Tree {
    pub fn iter(&self) -> NodeIter<'_> {
        self.root.iter()
    }
}

//! Tree statistics
//!
//! Aggregate counts over a built tree: files, directories, bytes, depth.
//! Computed on demand; nothing is stored back on the nodes.

use crate::tree::{Node, Tree};

/// Collected statistics about a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of non-directory entries
    pub files: usize,
    /// Total number of directories, including the root
    pub directories: usize,
    /// Sum of file sizes in bytes
    pub total_bytes: u64,
    /// Depth of the deepest entry (root = 0)
    pub max_depth: usize,
}

impl TreeStats {
    pub fn collect(tree: &Tree) -> Self {
        let mut collector = StatsCollector::default();
        collector.visit(&tree.root, 0);
        collector.finalize()
    }

    pub fn nodes(&self) -> usize {
        self.files + self.directories
    }
}

/// Statistics collector that accumulates data during a tree visit.
#[derive(Debug, Default)]
struct StatsCollector {
    stats: TreeStats,
}

impl StatsCollector {
    fn visit(&mut self, node: &Node, depth: usize) {
        if node.is_dir() {
            self.record_directory();
        } else {
            self.record_file(node.size);
        }
        self.stats.max_depth = self.stats.max_depth.max(depth);
        for child in &node.children {
            self.visit(child, depth + 1);
        }
    }

    fn record_file(&mut self, size: u64) {
        self.stats.files += 1;
        self.stats.total_bytes += size;
    }

    fn record_directory(&mut self) {
        self.stats.directories += 1;
    }

    fn finalize(self) -> TreeStats {
        self.stats
    }
}

//! JSON wire types for tree output

use std::path::PathBuf;

use serde::{Deserialize, Serialize, Serializer};

use crate::tree::Node;

/// One node as it appears in the output document.
///
/// Parent links and raw metadata stay internal and are never written.
/// `value` is the node's size and is omitted when zero, which includes every
/// directory. `children` is omitted when empty. Paths that are not valid
/// UTF-8 are written with U+FFFD in place of the bad bytes, like `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub value: u64,
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonNode>,
}

fn is_zero(v: &u64) -> bool {
    *v == 0
}

fn serialize_path_lossy<S: Serializer>(path: &PathBuf, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl From<&Node> for JsonNode {
    fn from(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            value: node.size,
            path: node.path.clone(),
            color: node.color.clone(),
            children: node.children.iter().map(JsonNode::from).collect(),
        }
    }
}

impl JsonNode {
    /// Number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(JsonNode::count).sum::<usize>()
    }

    /// All nodes in this subtree, pre-order.
    pub fn flatten(&self) -> Vec<&JsonNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.flatten());
        }
        out
    }
}

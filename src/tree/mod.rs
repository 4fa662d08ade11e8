//! Directory tree building
//!
//! `TreeBuilder` walks a root path once, keys a `Node` per entry by absolute
//! path, then links each node under the node keyed by its parent path. An
//! optional coloring pass shades nodes by depth.

mod builder;
mod color;
mod config;
mod filter;
mod metadata;
mod node;

// Re-export public types
pub use builder::TreeBuilder;
pub use color::{ColorScheme, DEFAULT_COLOR_STEP};
pub use config::{BuilderConfig, DEFAULT_EXCLUDE_PREFIXES};
pub use filter::ExclusionFilter;
pub use metadata::FileMetadata;
pub use node::{Node, NodeIter, Tree};

//! treejson - walk a directory tree and write it out as JSON for treemaps

pub mod error;
pub mod logging;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{BuildError, Error, OutputError};
pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use output::{JsonNode, OutputConfig, read_json, to_json, write_json};
pub use stats::TreeStats;
pub use tree::{BuilderConfig, ColorScheme, FileMetadata, Node, Tree, TreeBuilder};

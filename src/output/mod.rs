//! Tree serialization
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `json_types` - Wire format of a node
//! - `json` - Encoding, atomic file output, and decoding

mod config;
mod json;
mod json_types;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{read_json, to_json, write_json};
pub use json_types::JsonNode;

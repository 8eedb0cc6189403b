//! infoextract - Text extraction for documentation analysis pipelines
//!
//! This library converts Markdown documents into plain text and associates
//! source-code comments with the function names and parameters they mention.

pub mod cli;
pub mod corpus;
pub mod extract;

/// Re-export commonly used types
pub use corpus::{find_files, DiscoveryError, ExtractConfig, MatchingFiles};
pub use extract::{
    associate, extract_comment_lines, extract_function_params, markdown_to_text, AssociationMap,
    FunctionSignature,
};

/// Application-wide error type
pub use anyhow::Result;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "infoextract";

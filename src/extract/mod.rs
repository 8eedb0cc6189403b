//! Text and comment extraction module
//!
//! This module handles extracting plain, analyzable text from:
//! - Documentation files (Markdown rendered to HTML, code stripped)
//! - Source files (comment lines, function signatures and the
//!   comments that mention their identifiers)

pub mod associate;
pub mod code;
pub mod doc;

pub use associate::{associate, AssociationMap};
pub use code::{extract_comment_lines, extract_function_params, FunctionSignature, COMMENT_MARKER};
pub use doc::markdown_to_text;

use sha2::{Digest, Sha256};

/// Compute a stable hash for content
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

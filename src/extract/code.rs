//! Line-based extraction from Julia-style source code
//!
//! Extracts two things from an ordered sequence of source lines:
//! - `#` comment lines
//! - `function name(args)` signatures with their raw parameter lists
//!
//! Matching is purely textual. Multi-line signatures and nested
//! parentheses in default values are not understood.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Marker that opens a single-line comment
pub const COMMENT_MARKER: char = '#';

/// `function <name>(<args>)`, both groups non-greedy
static FUNCTION_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s*(.*?)\((.*?)\)").unwrap());

/// A function name and its unparsed parameter list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Everything between the `function` keyword and the first `(`
    pub name: String,
    /// Comma-split argument text, whitespace and defaults left intact
    pub parameters: Vec<String>,
}

impl FunctionSignature {
    /// Create a new signature
    pub fn new<S: Into<String>>(name: S, parameters: Vec<String>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// Parse the first declaration found in a single line
    pub fn from_line(line: &str) -> Option<Self> {
        let captures = FUNCTION_DECL.captures(line)?;
        let name = captures.get(1).map_or("", |m| m.as_str());
        let args = captures.get(2).map_or("", |m| m.as_str());

        Some(Self::new(name, args.split(',').map(String::from).collect()))
    }
}

impl std::fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.parameters.join(","))
    }
}

/// Check whether a line is a comment
///
/// Only spaces are skipped before the marker; a tab-indented `#` line is
/// not a comment.
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start_matches(' ').starts_with(COMMENT_MARKER)
}

/// Keep the comment lines, unmodified and in their original order
pub fn extract_comment_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .copied()
        .filter(|line| is_comment_line(line))
        .collect()
}

/// Extract one signature per declaring line, in line order
pub fn extract_function_params(lines: &[&str]) -> Vec<FunctionSignature> {
    lines
        .iter()
        .filter_map(|line| FunctionSignature::from_line(line))
        .collect()
}

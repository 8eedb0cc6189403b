//! Association of comment lines with function identifiers
//!
//! A comment is associated with a function name when it contains the name
//! anywhere, and with a parameter when it contains the parameter followed
//! by a space (single-character parameters must also be preceded by one).

use super::code::FunctionSignature;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Identifier to mentioning comments, in first-association order
///
/// Entries only exist once at least one comment has been associated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationMap {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl AssociationMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment under a key, creating the entry on first use
    pub fn push(&mut self, key: &str, comment: &str) {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.entries.push((key.to_string(), Vec::new()));
                self.index.insert(key.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[slot].1.push(comment.to_string());
    }

    /// Comments associated with a key
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in the order they were first associated
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, comments)| (key.as_str(), comments.as_slice()))
    }
}

impl Serialize for AssociationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, comments) in &self.entries {
            map.serialize_entry(key, comments)?;
        }
        map.end()
    }
}

impl std::fmt::Display for AssociationMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, comments) in self.iter() {
            writeln!(f, "{:?}:", key)?;
            for comment in comments {
                writeln!(f, "    {}", comment)?;
            }
        }
        Ok(())
    }
}

/// The text a comment must contain to mention a parameter
pub fn mention_token(param: &str) -> String {
    if param.chars().count() == 1 {
        format!(" {} ", param)
    } else {
        format!("{} ", param)
    }
}

/// Associate comments with the names and parameters of each signature
///
/// Iterates signatures, then comments. Nothing is deduplicated: the same
/// comment can be recorded more than once under one key.
pub fn associate(comments: &[&str], signatures: &[FunctionSignature]) -> AssociationMap {
    let mut associations = AssociationMap::new();

    for signature in signatures {
        let tokens: Vec<String> = signature
            .parameters
            .iter()
            .map(|param| mention_token(param))
            .collect();

        for comment in comments {
            if comment.contains(signature.name.as_str()) {
                associations.push(&signature.name, comment);
            }

            for (param, token) in signature.parameters.iter().zip(&tokens) {
                if comment.contains(token.as_str()) {
                    associations.push(param, comment);
                }
            }
        }
    }

    tracing::debug!(
        "Associated {} identifiers from {} signatures and {} comments",
        associations.len(),
        signatures.len(),
        comments.len()
    );

    associations
}

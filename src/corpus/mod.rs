//! Corpus discovery module
//!
//! This module handles locating the input files of an extraction run:
//! - Recursive, lazy enumeration of files by extension
//! - Run configuration (input and output locations)

mod config;

pub use config::{ExtractConfig, DEFAULT_CONFIG_FILE};

use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors raised before a traversal starts
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The root does not exist or is not a directory
    #[error("{0:?} is not a valid directory")]
    InvalidDirectory(PathBuf),
}

/// Files under a directory with a given extension
///
/// This only describes the walk. Every call to [`MatchingFiles::iter`]
/// starts a fresh traversal that reads the directory tree incrementally.
#[derive(Debug, Clone)]
pub struct MatchingFiles {
    root: PathBuf,
    suffix: String,
}

/// Find files ending in `.<extension>` anywhere below `directory`
pub fn find_files<P: AsRef<Path>>(directory: P, extension: &str) -> Result<MatchingFiles, DiscoveryError> {
    let root = directory.as_ref();
    if !root.is_dir() {
        return Err(DiscoveryError::InvalidDirectory(root.to_path_buf()));
    }

    Ok(MatchingFiles {
        root: root.to_path_buf(),
        suffix: format!(".{}", extension.trim_start_matches('.')),
    })
}

impl MatchingFiles {
    /// Get the directory being searched
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a new traversal
    pub fn iter(&self) -> FileIter {
        FileIter {
            root: self.root.clone(),
            suffix: self.suffix.clone(),
            walker: Some(WalkDir::new(&self.root).sort_by_file_name().into_iter()),
        }
    }
}

impl IntoIterator for &MatchingFiles {
    type Item = PathBuf;
    type IntoIter = FileIter;

    fn into_iter(self) -> FileIter {
        self.iter()
    }
}

impl IntoIterator for MatchingFiles {
    type Item = PathBuf;
    type IntoIter = FileIter;

    fn into_iter(self) -> FileIter {
        self.iter()
    }
}

/// A single pass over the matching files
///
/// The first traversal error is logged and ends the iteration.
pub struct FileIter {
    root: PathBuf,
    suffix: String,
    walker: Option<walkdir::IntoIter>,
}

impl Iterator for FileIter {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let walker = self.walker.as_mut()?;

        loop {
            match walker.next() {
                Some(Ok(entry)) => {
                    // Symlinked files count; symlinked directories are not descended
                    let matches = entry.path().is_file()
                        && entry
                            .file_name()
                            .to_str()
                            .is_some_and(|name| name.ends_with(&self.suffix));
                    if matches {
                        return Some(entry.into_path());
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!("Unable to gather files at path {:?}: {}", self.root, e);
                    self.walker = None;
                    return None;
                }
                None => {
                    self.walker = None;
                    return None;
                }
            }
        }
    }
}

impl FusedIterator for FileIter {}

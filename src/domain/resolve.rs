//! Pattern-to-line resolution
//!
//! Converts a stored search pattern into the 1-based line number of its
//! first occurrence in a target file. Two interchangeable strategies exist
//! behind the `LineResolver` trait: an in-memory substring scan over cached
//! file contents, and an external fixed-string line search. Not-found is a
//! recoverable condition, never an error.

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-session cache of target file contents, keyed by path.
///
/// Write-once per key: a file is read at most once and never invalidated
/// until the process exits.
#[derive(Debug, Default)]
pub struct FileCache {
    contents: HashMap<PathBuf, Vec<String>>,
}

impl FileCache {
    pub fn new() -> Self {
        FileCache::default()
    }

    /// Get the lines of a file, reading it on first access.
    pub fn lines(&mut self, path: &Path) -> Result<&[String]> {
        if !self.contents.contains_key(path) {
            let text = fs::read_to_string(path)?;
            let lines = text.lines().map(|l| l.to_string()).collect();
            self.contents.insert(path.to_path_buf(), lines);
        }
        Ok(self.contents.get(path).map(|v| v.as_slice()).unwrap_or(&[]))
    }
}

/// Strategy for resolving a literal pattern to a 1-based line number.
///
/// `Ok(None)` means the pattern does not occur in the file; the caller
/// renders a diagnostic instead of content.
pub trait LineResolver {
    fn resolve(&self, cache: &mut FileCache, path: &Path, pattern: &str) -> Result<Option<usize>>;
}

/// Find the first line containing `pattern` as a substring, 1-based.
pub fn find_line(lines: &[String], pattern: &str) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.contains(pattern))
        .map(|idx| idx + 1)
}

/// In-memory scan over the session file cache
#[derive(Debug, Default)]
pub struct MemoryResolver;

impl LineResolver for MemoryResolver {
    fn resolve(&self, cache: &mut FileCache, path: &Path, pattern: &str) -> Result<Option<usize>> {
        let lines = cache.lines(path)?;
        Ok(find_line(lines, pattern))
    }
}

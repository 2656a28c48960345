//! External line search
//!
//! Alternative `LineResolver` backed by a fixed-string, line-numbered
//! search over the target file (`grep -n -F`). Interchangeable with the
//! in-memory scan; selected by the `resolver` configuration key.

use crate::domain::resolve::{FileCache, LineResolver, MemoryResolver};
use crate::error::{DoctagError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

/// Line resolution strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    /// Scan cached file contents in memory
    #[default]
    Memory,
    /// Invoke an external grep process
    Grep,
}

impl FromStr for ResolverKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(ResolverKind::Memory),
            "grep" => Ok(ResolverKind::Grep),
            _ => Err(format!(
                "Invalid resolver: {} (expected memory or grep)",
                s
            )),
        }
    }
}

/// Build the configured resolver.
pub fn make_resolver(kind: ResolverKind) -> Box<dyn LineResolver> {
    match kind {
        ResolverKind::Memory => Box::new(MemoryResolver),
        ResolverKind::Grep => Box::new(GrepResolver::new()),
    }
}

/// Resolver shelling out to `grep -n -F -m1`
#[derive(Debug)]
pub struct GrepResolver {
    program: String,
}

impl GrepResolver {
    pub fn new() -> Self {
        GrepResolver {
            program: "grep".to_string(),
        }
    }

    /// Parse the leading line number from `grep -n` output
    /// (`<line>:<content>`). Non-numeric or less-than-1 values count as
    /// not-found.
    fn parse_line_number(output: &str) -> Option<usize> {
        let first_line = output.lines().next()?;
        let number = first_line.split(':').next()?;
        match number.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Some(n),
            _ => None,
        }
    }
}

impl Default for GrepResolver {
    fn default() -> Self {
        GrepResolver::new()
    }
}

impl LineResolver for GrepResolver {
    fn resolve(&self, _cache: &mut FileCache, path: &Path, pattern: &str) -> Result<Option<usize>> {
        let output = Command::new(&self.program)
            .arg("-n")
            .arg("-F")
            .arg("-m1")
            .arg("--")
            .arg(pattern)
            .arg(path)
            .output()
            .map_err(|e| {
                DoctagError::Search(format!("Failed to launch '{}': {}", self.program, e))
            })?;

        // grep exits 1 on no match; only exit codes above 1 are failures.
        if let Some(code) = output.status.code() {
            if code > 1 {
                return Err(DoctagError::Search(format!(
                    "'{}' failed on {}: {}",
                    self.program,
                    path.display(),
                    String::from_utf8_lossy(&output.stderr).trim()
                )));
            }
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(Self::parse_line_number(&stdout))
    }
}

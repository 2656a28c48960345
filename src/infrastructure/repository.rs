//! File system repository

use crate::domain::tags::is_tag_file_name;
use crate::error::{DoctagError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for configuration operations
pub trait DoctagRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .doctag/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .doctag/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .doctag directory exists
    fn is_initialized(&self) -> bool;

    /// Create .doctag directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of DoctagRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the configuration root by walking up from the current
    /// directory. Checks the DOCTAG_ROOT environment variable first.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DOCTAG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_doctag_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DoctagError::Config(format!(
                    "DOCTAG_ROOT is set to '{}' but no .doctag directory found. \
                    Run 'doctag init' in that directory or unset DOCTAG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the configuration root by walking up from a specific
    /// starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_doctag_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(DoctagError::NotDoctagDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .doctag directory
    fn has_doctag_dir(path: &Path) -> bool {
        path.join(".doctag").is_dir()
    }
}

impl DoctagRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_doctag_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let doctag_dir = self.root.join(".doctag");

        if doctag_dir.exists() {
            return Err(DoctagError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&doctag_dir)?;
        Ok(())
    }
}

/// Scan every search-path directory for files matching the tag-file naming
/// convention (`tags` or `tags-<code>`).
///
/// Hidden directories are skipped. The result is sorted and deduplicated so
/// the merged index is deterministic regardless of walk order.
pub fn find_tag_files(search_paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for dir in search_paths {
        let walker = WalkDir::new(dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if is_tag_file_name(name) {
                found.push(entry.path().to_path_buf());
            }
        }
    }

    found.sort();
    found.dedup();
    found
}

//! Configuration management

use crate::domain::tags::{IndexStyle, ReadmeFilter};
use crate::error::{DoctagError, Result};
use crate::infrastructure::resolver::ResolverKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directories scanned for tag files
    pub paths: Vec<PathBuf>,

    /// Preferred languages, comma-separated (mirrors the host's help
    /// language option)
    pub help_lang: String,

    /// Default projection style for duplicate tags
    pub style: IndexStyle,

    /// Policy for markdown-targeting tag entries
    pub readme: ReadmeFilter,

    /// Line resolution strategy
    pub resolver: ResolverKind,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: Vec::new(),
            help_lang: "en".to_string(),
            style: IndexStyle::default(),
            readme: ReadmeFilter::default(),
            resolver: ResolverKind::default(),
        }
    }
}

impl Config {
    /// Load config from .doctag/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".doctag").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DoctagError::NotDoctagDirectory(path.to_path_buf())
            } else {
                DoctagError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DoctagError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .doctag/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let doctag_dir = path.join(".doctag");
        let config_path = doctag_dir.join("config.toml");

        if !doctag_dir.exists() {
            fs::create_dir(&doctag_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DoctagError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Resolve the effective search-path list.
    ///
    /// Precedence: explicit overrides (CLI), then the DOCTAG_PATH
    /// environment variable, then the configured paths. An empty result is
    /// an error since nothing could be indexed.
    pub fn search_paths(&self, overrides: &[PathBuf]) -> Result<Vec<PathBuf>> {
        if !overrides.is_empty() {
            return Ok(overrides.to_vec());
        }

        if let Some(raw) = std::env::var_os("DOCTAG_PATH") {
            let paths: Vec<PathBuf> = std::env::split_paths(&raw).collect();
            if !paths.is_empty() {
                return Ok(paths);
            }
        }

        if self.paths.is_empty() {
            return Err(DoctagError::NoSearchPaths);
        }
        Ok(self.paths.clone())
    }

    /// Effective language filter: an explicit comma-separated override, else
    /// the configured preferred languages.
    pub fn language_filter(&self, override_langs: Option<&str>) -> Vec<String> {
        let source = override_langs.unwrap_or(&self.help_lang);
        crate::domain::tags::parse_language_list(source)
    }
}

//! Config management use case

use crate::domain::tags::{IndexStyle, ReadmeFilter};
use crate::error::{DoctagError, Result};
use crate::infrastructure::{Config, DoctagRepository, FileSystemRepository, ResolverKind};
use std::path::PathBuf;
use std::str::FromStr;

const VALID_KEYS: &str = "paths, help_lang, style, readme, resolver";

/// Service for managing doctag configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "paths" => Ok(join_paths(&config.paths)),
            "help_lang" => Ok(config.help_lang.clone()),
            "style" => Ok(format!("{:?}", config.style).to_lowercase()),
            "readme" => Ok(format!("{:?}", config.readme).to_lowercase()),
            "resolver" => Ok(format!("{:?}", config.resolver).to_lowercase()),
            _ => Err(DoctagError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "paths" => {
                config.paths = std::env::split_paths(value).collect();
            }
            "help_lang" => {
                config.help_lang = value.to_string();
            }
            "style" => {
                config.style = IndexStyle::from_str(value).map_err(DoctagError::Config)?;
            }
            "readme" => {
                config.readme = ReadmeFilter::from_str(value).map_err(DoctagError::Config)?;
            }
            "resolver" => {
                config.resolver = ResolverKind::from_str(value).map_err(DoctagError::Config)?;
            }
            _ => {
                return Err(DoctagError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(":")
}

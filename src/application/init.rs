//! Initialize configuration use case

use crate::error::Result;
use crate::infrastructure::{Config, DoctagRepository, FileSystemRepository};
use std::fs;
use std::path::{Path, PathBuf};

/// Initialize a new doctag configuration at the specified path.
pub fn init(path: &Path, search_paths: Vec<PathBuf>) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config {
        paths: search_paths,
        ..Config::default()
    };
    repo.save_config(&config)?;

    println!("Initialized doctag configuration at {}", path.display());
    if !config.paths.is_empty() {
        println!("Search paths: {}", config.paths.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), vec![PathBuf::from("/usr/share/vim/runtime")]).unwrap();

        assert!(temp.path().join(".doctag/config.toml").exists());
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("/usr/share/vim/runtime")]);
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), Vec::new()).unwrap();
        assert!(init(temp.path(), Vec::new()).is_err());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested/config");
        init(&target, Vec::new()).unwrap();
        assert!(target.join(".doctag/config.toml").exists());
    }
}

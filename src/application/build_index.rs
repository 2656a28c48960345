//! Index build use case
//!
//! Orchestrates discovery, parsing and merging of all tag files into the
//! searchable item list. The index is rebuilt fully on every request.

use crate::domain::tags::{
    language_from_path, parse_tag_file, IndexStyle, ReadmeFilter, SearchableItem, TagIndex,
};
use crate::error::{DoctagError, Result};
use crate::infrastructure::{find_tag_files, Config};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-request options, each falling back to the configured default
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    pub style: Option<IndexStyle>,

    /// Comma-separated language filter override
    pub langs: Option<String>,

    pub readme: Option<ReadmeFilter>,

    /// Search-path override (CLI `--path` flags)
    pub paths: Vec<PathBuf>,
}

/// Result of an index build
#[derive(Debug)]
pub struct IndexOutcome {
    pub items: Vec<SearchableItem>,

    /// Tag files that could not be read; their failure never aborts the
    /// build
    pub skipped: Vec<PathBuf>,
}

/// Service for building the tag index
pub struct IndexService {
    config: Config,
}

impl IndexService {
    /// Create a new index service
    pub fn new(config: Config) -> Self {
        IndexService { config }
    }

    /// Build the index and project it into searchable items.
    ///
    /// Tag files are merged in sorted-path order so candidate order per tag
    /// is deterministic.
    pub fn execute(&self, options: &IndexOptions) -> Result<IndexOutcome> {
        let search_paths = self.config.search_paths(&options.paths)?;
        let tag_files = find_tag_files(&search_paths);
        let readme = options.readme.unwrap_or(self.config.readme);

        let mut index = TagIndex::new();
        let mut skipped = Vec::new();

        for tag_file in &tag_files {
            let text = match fs::read_to_string(tag_file) {
                Ok(text) => text,
                Err(_) => {
                    skipped.push(tag_file.clone());
                    continue;
                }
            };

            let language = language_from_path(tag_file);
            let dir = tag_file.parent().unwrap_or_else(|| Path::new("."));

            for record in parse_tag_file(&text, dir, &language, readme) {
                index.insert(record);
            }
        }

        let style = options.style.unwrap_or(self.config.style);
        let langs = self.config.language_filter(options.langs.as_deref());

        Ok(IndexOutcome {
            items: index.items(style, &langs),
            skipped,
        })
    }

    /// Look up a single item by its display label.
    ///
    /// Accepts the exact label (`tag` or `tag@lang`) or a bare tag name,
    /// which matches the first language-disambiguated entry for that tag.
    pub fn find_item(&self, options: &IndexOptions, word: &str) -> Result<SearchableItem> {
        let outcome = self.execute(options)?;

        let exact = outcome.items.iter().find(|item| item.word == word);
        if let Some(item) = exact {
            return Ok(item.clone());
        }

        outcome
            .items
            .iter()
            .find(|item| {
                item.word
                    .split_once('@')
                    .is_some_and(|(tag, _)| tag == word)
            })
            .cloned()
            .ok_or_else(|| DoctagError::TagNotFound(word.to_string()))
    }
}

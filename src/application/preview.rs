//! Preview use case
//!
//! Resolves a selected item's stored pattern to a line number and extracts
//! the viewport window around it. A pattern that matches nothing produces a
//! diagnostic payload, never a failure; an item without action data is a
//! no-op.

use crate::application::build_index::{IndexOptions, IndexService};
use crate::domain::preview::{extract, Preview};
use crate::domain::resolve::{FileCache, LineResolver};
use crate::domain::tags::SearchableItem;
use crate::error::Result;
use crate::infrastructure::{make_resolver, Config};

/// Service for previewing tag locations.
///
/// Owns the session file cache: contents are read once per path and reused
/// across preview requests until the process exits.
pub struct PreviewService {
    config: Config,
    cache: FileCache,
    resolver: Box<dyn LineResolver>,
}

impl PreviewService {
    /// Create a new preview service with the configured resolver strategy
    pub fn new(config: Config) -> Self {
        let resolver = make_resolver(config.resolver);
        PreviewService {
            config,
            cache: FileCache::new(),
            resolver,
        }
    }

    /// Preview a tag selected by display label.
    ///
    /// Returns None when the selected item carries no action data.
    pub fn execute(
        &mut self,
        options: &IndexOptions,
        word: &str,
        height: usize,
    ) -> Result<Option<Preview>> {
        let item = IndexService::new(self.config.clone()).find_item(options, word)?;
        self.preview_item(&item, height)
    }

    /// Preview one resolved item.
    pub fn preview_item(&mut self, item: &SearchableItem, height: usize) -> Result<Option<Preview>> {
        if item.path.as_os_str().is_empty() || item.pattern.is_empty() {
            return Ok(None);
        }

        let line = self
            .resolver
            .resolve(&mut self.cache, &item.path, &item.pattern)?;

        let Some(line) = line else {
            return Ok(Some(Preview::Diagnostic {
                message: format!(
                    "Pattern '{}' not found in {}",
                    item.pattern,
                    item.path.display()
                ),
            }));
        };

        let lines = self.cache.lines(&item.path)?;
        Ok(Some(Preview::Content(extract(lines, line, height))))
    }
}

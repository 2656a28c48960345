//! Open/navigate use case
//!
//! Produces the request a host needs to open a tag's location: the target
//! path plus a normalized open-mode token derived from a free-form command
//! abbreviation.

use crate::application::build_index::{IndexOptions, IndexService};
use crate::domain::tags::SearchableItem;
use crate::domain::OpenMode;
use crate::error::Result;
use crate::infrastructure::Config;
use serde::Serialize;
use std::path::PathBuf;

/// Navigation request handed back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenRequest {
    pub word: String,
    pub path: PathBuf,
    pub pattern: String,
    pub mode: OpenMode,
}

/// Service for opening tag locations
pub struct OpenService {
    config: Config,
}

impl OpenService {
    /// Create a new open service
    pub fn new(config: Config) -> Self {
        OpenService { config }
    }

    /// Build the open request for a tag selected by display label.
    ///
    /// Returns None when the selected item carries no action data (no-op
    /// rather than a failure).
    pub fn execute(
        &self,
        options: &IndexOptions,
        word: &str,
        command: &str,
    ) -> Result<Option<OpenRequest>> {
        let item = IndexService::new(self.config.clone()).find_item(options, word)?;
        Ok(Self::request_for(&item, command))
    }

    /// Build the open request for one resolved item.
    pub fn request_for(item: &SearchableItem, command: &str) -> Option<OpenRequest> {
        if item.path.as_os_str().is_empty() {
            return None;
        }

        Some(OpenRequest {
            word: item.word.clone(),
            path: item.path.clone(),
            pattern: item.pattern.clone(),
            mode: OpenMode::normalize(command),
        })
    }
}

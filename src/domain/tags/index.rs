//! Tag index construction and projection
//!
//! Aggregates records from every discovered tag file into one map keyed by
//! tag name, then projects the map into the searchable items a selection UI
//! consumes. Duplicate tags across languages or sources become ordered
//! candidate lists; the projection style decides how duplicates surface.

use crate::domain::tags::parser::TagRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

/// One possible resolution of a tag when duplicates exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCandidate {
    pub language: String,
    pub path: PathBuf,
    pub pattern: String,
}

/// Projection style for duplicate tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexStyle {
    /// One item per distinct tag; first candidate wins
    #[default]
    Minimal,
    /// One item per (tag, language) passing the language filter
    AllLang,
}

impl FromStr for IndexStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(IndexStyle::Minimal),
            "all-lang" | "alllang" => Ok(IndexStyle::AllLang),
            _ => Err(format!(
                "Invalid style: {} (expected minimal or all-lang)",
                s
            )),
        }
    }
}

/// The externally exposed unit: enough for a host to request a preview or
/// open the location later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchableItem {
    /// Display label: the tag, or `tag@lang` when disambiguated
    pub word: String,
    pub path: PathBuf,
    pub pattern: String,
}

/// Mapping from tag name to ordered location candidates.
///
/// Candidate order per tag is insertion order; the caller makes the merge
/// deterministic by feeding tag files in sorted-path order. Tag iteration
/// order is lexicographic.
#[derive(Debug, Default)]
pub struct TagIndex {
    tags: BTreeMap<String, Vec<LocationCandidate>>,
}

impl TagIndex {
    pub fn new() -> Self {
        TagIndex::default()
    }

    /// Insert one parsed record, appending to the tag's candidate list.
    pub fn insert(&mut self, record: TagRecord) {
        self.tags.entry(record.tag).or_default().push(LocationCandidate {
            language: record.language,
            path: record.target_path,
            pattern: record.pattern,
        });
    }

    /// Number of distinct tags in the index.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Project the index into searchable items.
    ///
    /// `Minimal` emits one item per tag using its first candidate. `AllLang`
    /// emits one item per candidate whose language is in `langs`, labeled
    /// `tag@lang`; a tag with a single candidate is always emitted with its
    /// bare label, filter notwithstanding.
    pub fn items(&self, style: IndexStyle, langs: &[String]) -> Vec<SearchableItem> {
        let mut items = Vec::new();

        for (tag, candidates) in &self.tags {
            let Some(first) = candidates.first() else {
                continue;
            };

            if style == IndexStyle::Minimal || candidates.len() == 1 {
                items.push(SearchableItem {
                    word: tag.clone(),
                    path: first.path.clone(),
                    pattern: first.pattern.clone(),
                });
            } else {
                for candidate in candidates {
                    if !langs.contains(&candidate.language) {
                        continue;
                    }
                    items.push(SearchableItem {
                        word: format!("{}@{}", tag, candidate.language),
                        path: candidate.path.clone(),
                        pattern: candidate.pattern.clone(),
                    });
                }
            }
        }

        items
    }
}

/// Parse a comma-separated preferred-language list.
///
/// Empty input yields the `en` default.
pub fn parse_language_list(value: &str) -> Vec<String> {
    let langs: Vec<String> = value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    if langs.is_empty() {
        vec!["en".to_string()]
    } else {
        langs
    }
}

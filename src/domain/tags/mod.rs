//! Tag system

pub mod index;
pub mod parser;

// Re-export main types
pub use index::{parse_language_list, IndexStyle, LocationCandidate, SearchableItem, TagIndex};
pub use parser::{is_tag_file_name, language_from_path, parse_tag_file, ReadmeFilter, TagRecord};

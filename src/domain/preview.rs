//! Preview window extraction
//!
//! Given a resolved start line and a requested viewport height, computes the
//! inclusive display range and slices the matching lines out of the target's
//! content. Knows nothing about the host's window geometry beyond the
//! integer height it is given.

use serde::Serialize;

/// Content-type hint for syntax presentation of help documents.
pub const CONTENT_TYPE_HELP: &str = "help";

/// Inclusive display range for a resolved line and viewport height.
pub fn window(start: usize, height: usize) -> (usize, usize) {
    (start, start + height)
}

/// Lines to render plus their starting offset in the target file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentPayload {
    /// 1-based line number of the first rendered line
    pub start: usize,
    pub lines: Vec<String>,
    /// Hint for syntax presentation (always `help` here)
    pub content_type: String,
}

/// What the host renders for a preview request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Preview {
    Content(ContentPayload),
    /// Pattern was not found; the message replaces the content pane
    Diagnostic { message: String },
}

/// Slice the inclusive `[start, start + height]` range out of `lines`.
///
/// `start` is 1-based; the range is clamped to the end of the file.
pub fn extract(lines: &[String], start: usize, height: usize) -> ContentPayload {
    let (from, to) = window(start, height);
    let from_idx = from.saturating_sub(1);
    let to_idx = to.min(lines.len());

    let slice = if from_idx < lines.len() {
        lines[from_idx..to_idx].to_vec()
    } else {
        Vec::new()
    };

    ContentPayload {
        start: from,
        lines: slice,
        content_type: CONTENT_TYPE_HELP.to_string(),
    }
}

//! Output formatting utilities

use crate::application::OpenRequest;
use crate::domain::preview::Preview;
use crate::domain::tags::SearchableItem;

/// Format searchable items for display, one `word<TAB>path` per line
pub fn format_item_list(items: &[SearchableItem]) -> String {
    if items.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for item in items {
        output.push_str(&format!("{}\t{}\n", item.word, item.path.display()));
    }
    output
}

/// Format a preview payload for display.
///
/// Content payloads render numbered lines; diagnostics render the message
/// in place of content.
pub fn format_preview(preview: &Preview) -> String {
    match preview {
        Preview::Content(payload) => {
            let mut output = String::new();
            for (offset, line) in payload.lines.iter().enumerate() {
                output.push_str(&format!("{:>6}  {}\n", payload.start + offset, line));
            }
            output
        }
        Preview::Diagnostic { message } => format!("{}\n", message),
    }
}

/// Format an open request as `command<TAB>path`
pub fn format_open_request(request: &OpenRequest) -> String {
    format!("{}\t{}\n", request.mode.command(), request.path.display())
}

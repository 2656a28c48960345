//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_item_list, format_open_request, format_preview};

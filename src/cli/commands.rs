//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "doctag")]
#[command(about = "Help tag index and locator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a doctag configuration
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Documentation directories to record as search paths
        #[arg(short = 's', long = "search-path")]
        search_paths: Vec<PathBuf>,
    },

    /// Build the tag index and list searchable items
    List {
        /// Projection style for duplicate tags (minimal, all-lang)
        #[arg(short, long)]
        style: Option<String>,

        /// Language filter, comma-separated (e.g. "en,ja")
        #[arg(short, long)]
        lang: Option<String>,

        /// Policy for markdown-targeting entries (exclude, include, only)
        #[arg(long)]
        readme: Option<String>,

        /// Search-path override; may be repeated
        #[arg(short, long = "path")]
        paths: Vec<PathBuf>,

        /// Emit items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Preview the location a tag resolves to
    Preview {
        /// Tag display label (tag or tag@lang)
        tag: String,

        /// Viewport height in lines
        #[arg(long, default_value_t = 10)]
        height: usize,

        #[arg(short, long)]
        style: Option<String>,

        #[arg(short, long)]
        lang: Option<String>,

        #[arg(long)]
        readme: Option<String>,

        #[arg(short, long = "path")]
        paths: Vec<PathBuf>,

        /// Emit the payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// Emit the open request for a tag location
    Open {
        /// Tag display label (tag or tag@lang)
        tag: String,

        /// Open command abbreviation (vs, vsp, sp, tabe, ...)
        #[arg(short, long, default_value = "")]
        command: String,

        #[arg(short, long)]
        style: Option<String>,

        #[arg(short, long)]
        lang: Option<String>,

        #[arg(long)]
        readme: Option<String>,

        #[arg(short, long = "path")]
        paths: Vec<PathBuf>,

        /// Emit the request as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

//! doctag - Help tag index and locator
//!
//! A command-line tool that indexes Vim-help-style tag files (tab-separated
//! `tag<TAB>file<TAB>pattern` entries) across a configured search path and
//! resolves a selected tag to an exact line location for preview or
//! navigation.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DoctagError;

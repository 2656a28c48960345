//! Application layer - Use cases and orchestration

pub mod build_index;
pub mod init;
pub mod manage_config;
pub mod open;
pub mod preview;

pub use build_index::{IndexOptions, IndexOutcome, IndexService};
pub use manage_config::ConfigService;
pub use open::{OpenRequest, OpenService};
pub use preview::PreviewService;

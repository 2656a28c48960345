//! Domain layer - Business logic and domain models

pub mod open_mode;
pub mod preview;
pub mod resolve;
pub mod tags;

pub use open_mode::OpenMode;
pub use preview::{ContentPayload, Preview};
pub use resolve::{FileCache, LineResolver, MemoryResolver};

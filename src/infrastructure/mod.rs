//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod resolver;

pub use config::Config;
pub use repository::{find_tag_files, DoctagRepository, FileSystemRepository};
pub use resolver::{make_resolver, GrepResolver, ResolverKind};

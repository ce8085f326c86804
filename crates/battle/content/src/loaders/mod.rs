//! Content loaders for reading battle data from files.
//!
//! Unit lists are RON (`Vec<UnitTemplate>`); battle configuration is TOML.

pub mod config;
pub mod factory;
pub mod units;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use units::RosterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

use std::path::PathBuf;

use crate::domain::types::Configuration;

/// A validated configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfiguration {
    /// File stem of the source document, used to name the saved result.
    pub name: String,
    pub path: PathBuf,
    pub config: Configuration,
}

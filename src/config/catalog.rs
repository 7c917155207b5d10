//! Content library configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where templates, examples and course modules come from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// YAML file replacing the built-in library
    pub library_path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.library_path {
            Some(path) if !path.is_file() => Err(ValidationError::LibraryNotFound(path.clone())),
            _ => Ok(()),
        }
    }
}

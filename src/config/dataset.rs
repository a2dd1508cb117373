//! Dataset configuration module.
//!
//! This module defines where the word list comes from and how its lines are
//! filtered before insertion.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default dataset file, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "dictionary-dataset.txt";

/// Dataset configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetConfig {
    /// Path to the word list, one word per line
    pub path: PathBuf,

    /// Lines starting with this marker are headings or comments and are skipped
    pub comment_marker: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
            comment_marker: "#".to_string(),
        }
    }
}

impl Validate for DatasetConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dataset path cannot be empty".to_string(),
            ));
        }

        // An empty or padded marker would match every line after trimming
        if self.comment_marker.is_empty() || self.comment_marker.trim() != self.comment_marker {
            return Err(ConfigError::ValidationError(format!(
                "Invalid comment marker: {:?}",
                self.comment_marker
            )));
        }

        Ok(())
    }
}

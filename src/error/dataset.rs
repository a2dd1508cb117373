//! Dataset error module.
//!
//! This module defines error types that may occur while reading a word list.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Error when the dataset file does not exist.
    #[error("Dataset file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the dataset cannot be read.
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        /// The dataset being read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when the dataset yields no words.
    #[error("No words were read from {0}")]
    Empty(PathBuf),
}

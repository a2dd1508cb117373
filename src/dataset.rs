//! Word list loading.
//!
//! A dataset is a text file with one word per line. Surrounding whitespace is
//! trimmed, blank lines are skipped, and lines starting with the comment
//! marker (`#` by default, so `#` and `##` headings too) are ignored. The
//! remaining lines are kept verbatim: no case folding, no normalization.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::config::DatasetConfig;
use crate::error::dataset::DatasetError;

/// Characters stripped from both ends of each line.
const TRIM_CHARS: &[char] = &[' ', '\t', '\r', '\n'];

/// Reads word lists according to a [`DatasetConfig`].
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    comment_marker: String,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::from_config(&DatasetConfig::default())
    }
}

impl DatasetLoader {
    /// Creates a loader using the comment marker from `config`.
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self {
            comment_marker: config.comment_marker.clone(),
        }
    }

    /// Returns the word on `line`, or `None` if the line is blank or a comment.
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let trimmed = line.trim_matches(TRIM_CHARS);
        if trimmed.is_empty() || trimmed.starts_with(self.comment_marker.as_str()) {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Reads every word from `reader`, in file order.
    pub fn parse_words<R: BufRead>(&self, reader: R) -> io::Result<Vec<String>> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(word) = self.parse_line(&line) {
                words.push(word.to_string());
            }
        }
        Ok(words)
    }

    /// Reads every word from the file at `path`.
    ///
    /// # Errors
    ///
    /// * `DatasetError::FileNotFound` - The file does not exist.
    /// * `DatasetError::Read` - The file could not be opened or read.
    pub fn load_words<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>, DatasetError> {
        let path = path.as_ref();
        let read_error = |source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DatasetError::FileNotFound(path.to_path_buf()),
            _ => read_error(e),
        })?;
        let words = self.parse_words(BufReader::new(file)).map_err(read_error)?;

        debug!(path = %path.display(), words = words.len(), "Read dataset");
        Ok(words)
    }

    /// Like [`load_words`](Self::load_words), but an empty word list is an error.
    pub fn load_non_empty<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>, DatasetError> {
        let path = path.as_ref();
        let words = self.load_words(path)?;
        if words.is_empty() {
            return Err(DatasetError::Empty(path.to_path_buf()));
        }

        info!(path = %path.display(), words = words.len(), "Loaded dataset");
        Ok(words)
    }
}

//! Hua Lexicon Library
//!
//! A prefix-indexed word dictionary. Words are loaded from a list, inserted
//! into a [`HuaTrie`](data_structures::HuaTrie), and queried for exact
//! membership, prefix existence and all words sharing a prefix.
//!
//! # Architecture
//!
//! - [`data_structures`]: the trie itself, with no I/O and no error paths
//! - [`dataset`]: reading word lists from files
//! - [`report`]: pairing answers with queries and writing them out
//! - [`demo`]: the scripted walkthrough run by the `hua` binary
//! - [`config`] and [`error`]: layered configuration and error types

pub mod config;
pub mod data_structures;
pub mod dataset;
pub mod demo;
pub mod error;
pub mod report;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Hua Lexicon.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::config::DatasetConfig;
use crate::data_structures::HuaTrie;
use crate::dataset::DatasetLoader;
use crate::error::dataset::DatasetError;
use crate::report::{Outcome, Reporter};

/// Message written when a dataset yields no words.
pub const EMPTY_DATASET_MESSAGE: &str = "No words were read from the file.";

/// Loads the word list named by `config`, requiring at least one word.
///
/// An empty list is announced through `reporter` before the
/// `DatasetError::Empty` error is returned.
pub fn load_dataset<W>(
    config: &DatasetConfig,
    reporter: &mut Reporter<W>,
) -> error::HuaResult<Vec<String>>
where
    W: std::io::Write,
{
    let loader = DatasetLoader::from_config(config);
    match loader.load_non_empty(&config.path) {
        Ok(words) => Ok(words),
        Err(e @ DatasetError::Empty(_)) => {
            reporter.message(EMPTY_DATASET_MESSAGE)?;
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Builds a trie from `words`, reporting each insertion when asked to.
///
/// Returns the trie and the number of words read, duplicates included.
pub fn build_trie<I, S, W>(
    words: I,
    mut reporter: Option<&mut Reporter<W>>,
) -> error::HuaResult<(HuaTrie, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: std::io::Write,
{
    let mut trie = HuaTrie::new();
    let mut read = 0;

    for word in words {
        let word = word.as_ref();
        trie.insert(word);
        read += 1;
        if let Some(reporter) = reporter.as_deref_mut() {
            reporter.outcome(&Outcome::Inserted {
                word: word.to_string(),
            })?;
        }
    }

    tracing::info!(read, distinct = trie.len(), nodes = trie.node_count(), "Built trie");
    Ok((trie, read))
}

//! Query outcomes and their presentation.
//!
//! The trie answers with booleans and word lists. This module pairs each
//! answer with its query as an [`Outcome`] and writes it out, either as the
//! familiar sentences ("Word 'do' found in the Trie.") or as JSON lines.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::config::{OutputFormat, ReportConfig};
use crate::data_structures::hua_trie::HuaTrie;
use crate::error::HuaResult;

/// A query together with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A word was inserted.
    Inserted {
        /// The inserted word
        word: String,
    },

    /// Exact membership lookup.
    Search {
        /// The word looked up
        word: String,
        /// Whether it is stored
        found: bool,
    },

    /// Prefix existence check.
    PrefixCheck {
        /// The prefix checked
        prefix: String,
        /// Whether any stored word has this prefix
        exists: bool,
    },

    /// Prefix enumeration.
    PrefixMatches {
        /// The prefix enumerated
        prefix: String,
        /// Stored words with this prefix
        words: Vec<String>,
    },
}

impl Outcome {
    /// Runs an exact lookup of `word`.
    pub fn search(trie: &HuaTrie, word: &str) -> Self {
        Self::Search {
            word: word.to_string(),
            found: trie.search(word),
        }
    }

    /// Runs a prefix existence check.
    pub fn prefix_check(trie: &HuaTrie, prefix: &str) -> Self {
        Self::PrefixCheck {
            prefix: prefix.to_string(),
            exists: trie.starts_with(prefix),
        }
    }

    /// Enumerates words under `prefix`, sorted if `sort` is set.
    pub fn prefix_matches(trie: &HuaTrie, prefix: &str, sort: bool) -> Self {
        let mut words = trie.find_words_with_prefix(prefix);
        if sort {
            words.sort_unstable();
        }
        Self::PrefixMatches {
            prefix: prefix.to_string(),
            words,
        }
    }

    /// Whether the query had a positive answer.
    pub fn is_hit(&self) -> bool {
        match self {
            Self::Inserted { .. } => true,
            Self::Search { found, .. } => *found,
            Self::PrefixCheck { exists, .. } => *exists,
            Self::PrefixMatches { words, .. } => !words.is_empty(),
        }
    }
}

fn write_no_prefix(f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
    write!(f, "No words starting with prefix '{prefix}' found in the Trie.")
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted { word } => write!(f, "Inserted word: '{word}' into the Trie."),
            Self::Search { word, found: true } => write!(f, "Word '{word}' found in the Trie."),
            Self::Search { word, found: false } => {
                write!(f, "Word '{word}' not found in the Trie.")
            }
            Self::PrefixCheck {
                prefix,
                exists: true,
            } => write!(f, "There are words starting with prefix '{prefix}' in the Trie."),
            Self::PrefixCheck { prefix, .. } => write_no_prefix(f, prefix),
            Self::PrefixMatches { prefix, words } if words.is_empty() => {
                write_no_prefix(f, prefix)
            }
            Self::PrefixMatches { prefix, words } => {
                write!(f, "Words starting with prefix '{prefix}':")?;
                for word in words {
                    write!(f, "\n{word}")?;
                }
                Ok(())
            }
        }
    }
}

/// Writes outcomes and section headings to a sink.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing `format` to `out`.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Creates a reporter from report configuration.
    pub fn from_config(out: W, config: &ReportConfig) -> Self {
        Self::new(out, config.format)
    }

    /// Writes a section heading. JSON output has no headings.
    pub fn heading(&mut self, title: &str) -> HuaResult<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.out, "\n{title}")?;
        }
        Ok(())
    }

    /// Writes one outcome.
    pub fn outcome(&mut self, outcome: &Outcome) -> HuaResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{outcome}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, outcome)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Writes a plain message. JSON output skips it.
    pub fn message(&mut self, message: &str) -> HuaResult<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.out, "{message}")?;
        }
        Ok(())
    }

    /// Flushes the sink and returns it.
    pub fn finish(mut self) -> HuaResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

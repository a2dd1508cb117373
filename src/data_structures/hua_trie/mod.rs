// Copyright (c) 2025 Hua Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hua Trie Implementation
//!
//! A prefix tree over words, indexed one `char` per level. It answers exact
//! membership, prefix existence and prefix enumeration queries.
//!
//! Symbols are compared exactly: `"JavaScript"` and `"javascript"` are
//! different words, and hyphens or digits are ordinary symbols.
//!
//! # Example
//!
//! ```
//! use hua_lexicon_lib::data_structures::hua_trie::HuaTrie;
//!
//! let mut trie = HuaTrie::new();
//! trie.insert("data");
//! trie.insert("do");
//!
//! assert!(trie.search("do"));
//! assert!(!trie.search("d"));
//! assert!(trie.starts_with("d"));
//!
//! let mut words = trie.find_words_with_prefix("d");
//! words.sort();
//! assert_eq!(words, vec!["data", "do"]);
//! ```
//!
//! None of the queries fail. A missing word is `false` and a prefix with no
//! matches is an empty `Vec`.

mod node;

#[cfg(test)]
mod tests;

pub use node::TrieNode;

use tracing::{debug, trace};

/// Prefix tree of words.
///
/// The trie owns its root node, which always exists and stands for the empty
/// prefix. Nodes are created lazily on insertion and never removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HuaTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct words stored
    len: usize,
}

impl HuaTrie {
    /// Creates a new empty `HuaTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the path are created and the last one is marked
    /// terminal. Inserting a word that is already stored changes nothing.
    /// The empty word marks the root.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    pub fn insert<W>(&mut self, word: W)
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();

        let mut node = &mut self.root;
        for symbol in word.chars() {
            node = node.child_or_insert(symbol);
        }

        if node.mark_terminal() {
            self.len += 1;
            trace!(word, "Inserted word");
        }
    }

    /// Checks whether `word` was inserted.
    ///
    /// A path that exists only as the prefix of longer words is not a match.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to look up.
    ///
    /// # Returns
    ///
    /// `true` if the word is stored, `false` otherwise.
    pub fn search<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref())
            .is_some_and(TrieNode::is_terminal)
    }

    /// Checks whether any stored word begins with `prefix`.
    ///
    /// The empty prefix always matches, even on an empty trie.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to look for.
    ///
    /// # Returns
    ///
    /// `true` if every symbol of `prefix` can be followed from the root.
    pub fn starts_with<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        self.find_node(prefix.as_ref()).is_some()
    }

    /// Returns every stored word that begins with `prefix`.
    ///
    /// The prefix itself is included when it is a stored word. The order
    /// follows child iteration order and is not specified. Each word appears
    /// exactly once.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to enumerate.
    ///
    /// # Returns
    ///
    /// The matching words, or an empty `Vec` if there are none.
    pub fn find_words_with_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let mut words = Vec::new();

        let Some(start) = self.find_node(prefix) else {
            debug!(prefix, "Prefix not present");
            return words;
        };

        let mut buffer = String::from(prefix);
        Self::collect_words(start, &mut buffer, &mut words);

        debug!(prefix, matches = words.len(), "Collected words with prefix");
        words
    }

    /// Returns every stored word, in unspecified order.
    pub fn words(&self) -> Vec<String> {
        self.find_words_with_prefix("")
    }

    /// Returns the number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the trie, root included.
    ///
    /// This walks the whole tree.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Walks from the root along `path`, stopping at the first missing child.
    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for symbol in path.chars() {
            node = node.child(symbol)?;
        }
        Some(node)
    }

    /// Depth-first collection of every terminal node below `start`.
    ///
    /// `buffer` holds the word spelled so far. Each stack entry records the
    /// buffer length at its parent, so the buffer is cut back to that length
    /// before the entry's symbol is appended.
    fn collect_words(start: &TrieNode, buffer: &mut String, words: &mut Vec<String>) {
        let mut pending: Vec<(&TrieNode, usize, Option<char>)> = vec![(start, buffer.len(), None)];

        while let Some((node, depth, symbol)) = pending.pop() {
            buffer.truncate(depth);
            if let Some(symbol) = symbol {
                buffer.push(symbol);
            }

            if node.is_terminal() {
                words.push(buffer.clone());
            }

            let depth = buffer.len();
            pending.extend(
                node.children()
                    .map(|(symbol, child)| (child, depth, Some(symbol))),
            );
        }
    }
}

impl<W> FromIterator<W> for HuaTrie
where
    W: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<W> Extend<W> for HuaTrie
where
    W: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

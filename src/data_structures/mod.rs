//! Data structures for Hua Lexicon.
//!
//! Currently a single prefix tree used as the word index.

pub mod hua_trie;

pub use hua_trie::HuaTrie;

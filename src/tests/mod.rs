//! Test modules for Hua Lexicon.
//!
//! Suites here exercise components together, with shared fixtures in
//! [`test_utils`]. Tests for the trie itself live next to it in
//! `data_structures::hua_trie::tests`.

pub mod config_tests;
pub mod error_tests;

pub use test_utils::{word_list_strategy, TestFixture};

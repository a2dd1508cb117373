// Copyright (c) 2025 Hua Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Hua Trie.
//!
//! Each node owns its children by value, so the trie is a plain tree of
//! owned storage: dropping a node drops its whole subtree.
//!
//! Tree depth equals the length of the longest word and is unbounded, so
//! every whole-subtree operation here (drop, clone, equality, size) walks an
//! explicit stack instead of recursing.

use std::fmt;

use fnv::FnvHashMap;

/// A vertex in the Hua Trie.
///
/// The path of symbols from the root to a node spells a prefix; the node is
/// terminal iff that prefix was itself inserted as a word.
#[derive(Default)]
pub struct TrieNode {
    /// Child nodes keyed by the next symbol
    children: FnvHashMap<char, TrieNode>,

    /// Whether an inserted word ends exactly at this node
    is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty, non-terminal node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached by `symbol`, if any.
    pub fn child(&self, symbol: char) -> Option<&TrieNode> {
        self.children.get(&symbol)
    }

    /// Returns the child reached by `symbol`, creating it when missing.
    pub fn child_or_insert(&mut self, symbol: char) -> &mut TrieNode {
        self.children.entry(symbol).or_default()
    }

    /// Iterates over `(symbol, child)` pairs in map order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(symbol, child)| (*symbol, child))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether a word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Marks this node as the end of a word.
    ///
    /// Returns `true` if the node was not terminal before.
    pub fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.is_terminal, true)
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.values());
        }
        count
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach descendants so each node is dropped with no children left
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// Step of the post-order walk used by `Clone`.
enum CloneStep<'a> {
    Enter(char, &'a TrieNode),
    Build {
        symbol: char,
        is_terminal: bool,
        child_count: usize,
    },
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        // Finished copies wait here until their parent is built
        let mut built: Vec<(char, TrieNode)> = Vec::new();
        let mut steps = vec![CloneStep::Enter('\0', self)];

        while let Some(step) = steps.pop() {
            match step {
                CloneStep::Enter(symbol, node) => {
                    steps.push(CloneStep::Build {
                        symbol,
                        is_terminal: node.is_terminal,
                        child_count: node.children.len(),
                    });
                    steps.extend(
                        node.children
                            .iter()
                            .map(|(symbol, child)| CloneStep::Enter(*symbol, child)),
                    );
                }
                CloneStep::Build {
                    symbol,
                    is_terminal,
                    child_count,
                } => {
                    let children = built.split_off(built.len() - child_count);
                    built.push((
                        symbol,
                        TrieNode {
                            children: children.into_iter().collect(),
                            is_terminal,
                        },
                    ));
                }
            }
        }

        built.pop().map(|(_, node)| node).unwrap_or_default()
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.is_terminal != right.is_terminal
                || left.children.len() != right.children.len()
            {
                return false;
            }
            for (symbol, child) in &left.children {
                match right.children.get(symbol) {
                    Some(other_child) => pending.push((child, other_child)),
                    None => return false,
                }
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl fmt::Debug for TrieNode {
    /// Shallow: lists the child symbols, not the subtrees.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut symbols: Vec<char> = self.children.keys().copied().collect();
        symbols.sort_unstable();
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &symbols)
            .finish()
    }
}

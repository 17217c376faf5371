//! In-memory prefix index over song titles

mod trie;

pub use trie::{PrefixIndex, TrieNode};

//! Case-insensitive prefix tree over song titles.

use crate::domain::Song;
use std::collections::BTreeMap;

// ===========================================
// TrieNode
// ===========================================

/// One character position in the indexed title space.
///
/// Children are keyed by a single lowercased character and iterate in
/// ascending character order, which fixes the order of search results.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    songs: Vec<Song>,
}

impl TrieNode {
    /// Returns true if at least one indexed title ends at this node.
    pub fn is_terminal(&self) -> bool {
        !self.songs.is_empty()
    }

    /// Songs whose lowercased title ends exactly here, in insertion order.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Returns the child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Iterates over children in ascending character order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, node)| (*c, node))
    }
}

// Titles can be arbitrarily long, so tear chains down with a work list
// instead of the default recursive drop.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

// ===========================================
// PrefixIndex
// ===========================================

/// A trie over song titles answering "every song whose title starts with X".
///
/// Keys are the lowercased titles; stored songs keep their original casing.
/// Songs sharing a title are all kept, in the order they were inserted.
///
/// Results of [`search_prefix`](Self::search_prefix) come from a pre-order
/// walk of the landing node: a node's own songs first, then its children
/// in ascending character order.
///
/// The index has no interior mutability, so a built index can be shared
/// across threads by reference and queried without locking.
///
/// # Examples
///
/// ```
/// use trackdex::domain::Song;
/// use trackdex::index::PrefixIndex;
///
/// let index = PrefixIndex::build_from_songs(vec![
///     Song::new("Beat It", "Michael Jackson", ""),
///     Song::new("Beautiful Day", "U2", ""),
///     Song::new("Bohemian Rhapsody", "Queen", ""),
/// ]);
///
/// let titles: Vec<_> = index.search_prefix("BEA").iter().map(|s| s.title()).collect();
/// assert_eq!(titles, ["Beat It", "Beautiful Day"]);
/// assert!(index.search_prefix("z").is_empty());
/// assert_eq!(index.search_prefix("").len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

impl PrefixIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from songs, inserting them in the given order.
    pub fn build_from_songs<I>(songs: I) -> Self
    where
        I: IntoIterator<Item = Song>,
    {
        let mut index = Self::new();
        index.rebuild(songs);
        index
    }

    /// Discards all indexed songs and re-indexes `songs` in order.
    pub fn rebuild<I>(&mut self, songs: I)
    where
        I: IntoIterator<Item = Song>,
    {
        self.root = TrieNode::default();
        self.len = 0;
        for song in songs {
            self.insert(song);
        }
        tracing::trace!(songs = self.len, "built prefix index");
    }

    /// Indexes a song under its lowercased title.
    ///
    /// An empty title is stored at the root and only matches the empty prefix.
    pub fn insert(&mut self, song: Song) {
        let mut node = &mut self.root;
        for c in fold(song.title()) {
            node = node.children.entry(c).or_default();
        }
        node.songs.push(song);
        self.len += 1;
    }

    /// Returns every song whose title starts with `prefix`, ignoring case.
    ///
    /// The empty prefix matches every song. A prefix that leaves the trie
    /// at any character yields an empty result.
    pub fn search_prefix(&self, prefix: &str) -> Vec<&Song> {
        match self.find_node(prefix) {
            Some(node) => collect_subtree(node),
            None => Vec::new(),
        }
    }

    /// Returns the node reached by walking the lowercased `prefix`.
    pub fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in fold(prefix) {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of songs indexed, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

/// Lowercases one character at a time, so a character folds the same way
/// wherever it sits in the string (no final-sigma context rule).
fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Pre-order walk: a node's songs, then each child subtree in key order.
fn collect_subtree(start: &TrieNode) -> Vec<&Song> {
    let mut out = Vec::new();
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        out.extend(node.songs.iter());
        // Reverse so the smallest key is popped first.
        stack.extend(node.children.values().rev());
    }
    out
}

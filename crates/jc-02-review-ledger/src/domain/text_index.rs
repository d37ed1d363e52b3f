//! # Text Index
//!
//! Hash-keyed review text. Several reviews may share one hash and therefore
//! one text; the last write wins. Entries are never removed.

use shared_types::entities::Hash;
use std::collections::HashMap;

/// `review_hash -> review_text`.
#[derive(Debug, Clone, Default)]
pub struct TextIndex {
    texts: HashMap<Hash, String>,
}

impl TextIndex {
    /// Empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the text stored under `hash`.
    pub fn write(&mut self, hash: Hash, text: String) {
        self.texts.insert(hash, text);
    }

    /// Text under `hash`; empty when never written.
    #[must_use]
    pub fn read(&self, hash: &Hash) -> &str {
        self.texts.get(hash).map_or("", String::as_str)
    }

    /// Number of distinct hashes with text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// True when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

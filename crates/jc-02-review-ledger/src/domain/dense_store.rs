//! # Dense Store
//!
//! Ordered sequence whose ids are always exactly `0..len`. Removing an
//! element shifts every later element down by one, so ids are positions
//! and are not stable across deletes.

use crate::errors::{ReviewLedgerError, StoreKind};

/// Gap-free, insertion-ordered storage.
#[derive(Debug, Clone)]
pub struct DenseStore<T> {
    kind: StoreKind,
    slots: Vec<T>,
}

impl<T> DenseStore<T> {
    /// Empty store reporting `kind` in range errors.
    #[must_use]
    pub fn new(kind: StoreKind) -> Self {
        Self {
            kind,
            slots: Vec::new(),
        }
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.slots.len() as u64
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends and returns the new id (the previous length).
    pub fn push(&mut self, value: T) -> u64 {
        self.slots.push(value);
        self.len() - 1
    }

    /// Element at `id`, or `IndexOutOfRange`.
    pub fn get(&self, id: u64) -> Result<&T, ReviewLedgerError> {
        let pos = self.position(id)?;
        Ok(&self.slots[pos])
    }

    /// Mutable element at `id`, or `IndexOutOfRange`.
    pub fn get_mut(&mut self, id: u64) -> Result<&mut T, ReviewLedgerError> {
        let pos = self.position(id)?;
        Ok(&mut self.slots[pos])
    }

    /// Removes `id`, shifting later elements down by one.
    pub fn remove(&mut self, id: u64) -> Result<T, ReviewLedgerError> {
        let pos = self.position(id)?;
        Ok(self.slots.remove(pos))
    }

    /// Keeps only elements matching `keep`, preserving relative order.
    /// Returns the number removed.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> u64 {
        let before = self.slots.len();
        self.slots.retain(keep);
        (before - self.slots.len()) as u64
    }

    /// Elements with their ids, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &T)> {
        self.slots.iter().enumerate().map(|(i, v)| (i as u64, v))
    }

    /// Mutable elements in id order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut()
    }

    fn position(&self, id: u64) -> Result<usize, ReviewLedgerError> {
        usize::try_from(id)
            .ok()
            .filter(|pos| *pos < self.slots.len())
            .ok_or(ReviewLedgerError::IndexOutOfRange {
                kind: self.kind,
                index: id,
                count: self.len(),
            })
    }
}

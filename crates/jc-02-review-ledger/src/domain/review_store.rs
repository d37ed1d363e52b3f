//! # Review Store
//!
//! Dense sequence of reviews. Listing links are plain ids, so the store
//! also owns the bookkeeping needed when a listing disappears: dropping its
//! reviews and relabelling links to listings that shifted down.

use super::dense_store::DenseStore;
use super::entities::{Review, ReviewSubject};
use crate::errors::{ReviewLedgerError, StoreKind};
use shared_types::entities::{ListingId, ReviewId};

/// Reviews indexed `0..count`.
#[derive(Debug, Clone)]
pub struct ReviewStore {
    reviews: DenseStore<Review>,
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reviews: DenseStore::new(StoreKind::Review),
        }
    }

    /// Number of reviews.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.reviews.len()
    }

    /// Appends a validated review.
    pub fn append(&mut self, review: Review) -> ReviewId {
        self.reviews.push(review)
    }

    /// Review at `id`.
    pub fn get(&self, id: ReviewId) -> Result<&Review, ReviewLedgerError> {
        self.reviews.get(id)
    }

    /// Mutable review at `id`.
    pub fn get_mut(&mut self, id: ReviewId) -> Result<&mut Review, ReviewLedgerError> {
        self.reviews.get_mut(id)
    }

    /// Removes `id`; later reviews shift down by one.
    pub fn remove(&mut self, id: ReviewId) -> Result<Review, ReviewLedgerError> {
        self.reviews.remove(id)
    }

    /// Reviews with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (ReviewId, &Review)> {
        self.reviews.iter()
    }

    /// Handles removal of `listing_id` from the listing store.
    ///
    /// Every review attached to it is dropped (surviving reviews keep their
    /// relative order) and links to higher listings are decremented so they
    /// keep naming the same listing after the shift. Returns the number of
    /// reviews dropped.
    pub fn detach_listing(&mut self, listing_id: ListingId) -> u64 {
        let removed = self
            .reviews
            .retain(|review| review.listing_id() != Some(listing_id));

        for review in self.reviews.values_mut() {
            if let ReviewSubject::Listing(id) = &mut review.subject {
                if *id > listing_id {
                    *id -= 1;
                }
            }
        }
        removed
    }
}

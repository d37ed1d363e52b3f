//! # Listing Store
//!
//! Dense sequence of job listings. Knows nothing about reviews; the
//! cascade on delete is driven by the ledger.

use super::dense_store::DenseStore;
use super::entities::{JobListing, ListingFields};
use crate::errors::{ReviewLedgerError, StoreKind};
use shared_types::entities::{Address, ListingId};

/// Listings indexed `0..count`.
#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: DenseStore<JobListing>,
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listings: DenseStore::new(StoreKind::Listing),
        }
    }

    /// Number of listings.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.listings.len()
    }

    /// Appends a listing; fields must already be validated.
    pub fn append(&mut self, fields: ListingFields, poster: Address) -> ListingId {
        self.listings.push(JobListing { fields, poster })
    }

    /// Listing at `id`.
    pub fn get(&self, id: ListingId) -> Result<&JobListing, ReviewLedgerError> {
        self.listings.get(id)
    }

    /// Fails with `IndexOutOfRange` unless `id` exists.
    pub fn ensure_exists(&self, id: ListingId) -> Result<(), ReviewLedgerError> {
        self.listings.get(id).map(|_| ())
    }

    /// Overwrites the content of `id`. The poster is kept.
    pub fn overwrite(
        &mut self,
        id: ListingId,
        fields: ListingFields,
    ) -> Result<&JobListing, ReviewLedgerError> {
        let listing = self.listings.get_mut(id)?;
        listing.fields = fields;
        Ok(listing)
    }

    /// Removes `id`; later listings shift down by one.
    pub fn remove(&mut self, id: ListingId) -> Result<JobListing, ReviewLedgerError> {
        self.listings.remove(id)
    }

    /// Listings with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (ListingId, &JobListing)> {
        self.listings.iter()
    }
}

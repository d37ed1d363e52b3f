//! # Driving Ports (API - Inbound)
//!
//! The public API of the review ledger. Mutating calls name their caller
//! explicitly; the host identity layer is responsible for authenticating it.

use crate::domain::entities::{AnnotatedReview, JobListing, ListingFields, ReviewContent, SalaryStats};
use crate::errors::ReviewLedgerError;
use crate::events::Receipt;
use async_trait::async_trait;
use shared_types::entities::{Address, Hash, ListingId, ReviewId};

// =============================================================================
// REVIEW LEDGER API (Primary Driving Port)
// =============================================================================

/// Primary API of the review ledger.
///
/// Mutations are applied one at a time in a single total order. A failed
/// mutation returns an error and changes nothing.
#[async_trait]
pub trait ReviewLedgerApi: Send + Sync {
    // ----- authorization -----

    /// Authorizes `lister` to create listings.
    ///
    /// # Arguments
    /// * `caller` - Must be the ledger owner
    /// * `lister` - Account to authorize
    ///
    /// # Returns
    /// * `Ok(receipt)` - `output` is false if `lister` was already authorized
    /// * `Err(Unauthorized)` - `caller` is not the owner
    async fn add_authorized_lister(
        &self,
        caller: Address,
        lister: Address,
    ) -> Result<Receipt<bool>, ReviewLedgerError>;

    /// Whether `account` may create listings.
    async fn is_authorized_lister(&self, account: Address) -> bool;

    /// The ledger owner.
    async fn owner(&self) -> Address;

    // ----- listings -----

    /// Creates a listing posted by `caller`, charging the posting fee when
    /// enabled.
    ///
    /// # Returns
    /// * `Ok(receipt)` - `output` is the new listing id
    /// * `Err(Unauthorized)` - `caller` is not an authorized lister
    /// * `Err(InvalidInput)` - A field was empty
    /// * `Err(InsufficientAllowance | InsufficientBalance)` - Fee not paid
    async fn create_job_listing(
        &self,
        caller: Address,
        fields: ListingFields,
    ) -> Result<Receipt<ListingId>, ReviewLedgerError>;

    /// Overwrites a listing's content.
    async fn update_job_listing(
        &self,
        caller: Address,
        listing_id: ListingId,
        fields: ListingFields,
    ) -> Result<Receipt<()>, ReviewLedgerError>;

    /// Deletes a listing and its reviews. `output` is the number of reviews
    /// removed.
    async fn delete_job_listing(
        &self,
        caller: Address,
        listing_id: ListingId,
    ) -> Result<Receipt<u64>, ReviewLedgerError>;

    /// Listing at `listing_id`.
    async fn get_job_listing(&self, listing_id: ListingId)
        -> Result<JobListing, ReviewLedgerError>;

    /// Number of listings.
    async fn get_job_listings_count(&self) -> u64;

    // ----- reviews -----

    /// Reviews an existing listing.
    ///
    /// # Returns
    /// * `Ok(receipt)` - `output` is the new review id
    /// * `Err(IndexOutOfRange)` - No such listing
    /// * `Err(InvalidInput)` - Zero hash or rating outside `1..=5`
    async fn create_review(
        &self,
        caller: Address,
        listing_id: ListingId,
        content: ReviewContent,
    ) -> Result<Receipt<ReviewId>, ReviewLedgerError>;

    /// Reviews a company and title without a listing.
    async fn submit_review(
        &self,
        caller: Address,
        company_name: String,
        job_title: String,
        content: ReviewContent,
    ) -> Result<Receipt<ReviewId>, ReviewLedgerError>;

    /// Overwrites hash, salary, rating and text of a review.
    async fn update_review(
        &self,
        caller: Address,
        review_id: ReviewId,
        content: ReviewContent,
    ) -> Result<Receipt<()>, ReviewLedgerError>;

    /// Deletes a review.
    async fn delete_review(
        &self,
        caller: Address,
        review_id: ReviewId,
    ) -> Result<Receipt<()>, ReviewLedgerError>;

    /// Review at `review_id`.
    async fn get_review(&self, review_id: ReviewId) -> Result<AnnotatedReview, ReviewLedgerError>;

    /// Number of reviews.
    async fn get_reviews_count(&self) -> u64;

    // ----- text index -----

    /// Writes text under an existing review's hash. `output` is that hash.
    async fn set_review_text(
        &self,
        caller: Address,
        review_id: ReviewId,
        review_text: String,
    ) -> Result<Receipt<Hash>, ReviewLedgerError>;

    /// Text stored under `review_hash`, empty if never written.
    async fn get_review_text(&self, review_hash: Hash) -> String;

    // ----- aggregation -----

    /// Reviews of one listing, in review-id order.
    async fn get_all_reviews_of_job_listing(&self, listing_id: ListingId) -> Vec<AnnotatedReview>;

    /// Reviews by one reviewer, in review-id order.
    async fn get_all_reviews_by_reviewer(&self, reviewer: Address) -> Vec<AnnotatedReview>;

    /// Salary statistics for one company.
    async fn get_company_salary_stats(&self, company_name: &str) -> SalaryStats;
}

//! # Review Ledger State
//!
//! The single owned state object behind every ledger operation. Each
//! mutating method validates everything first and writes only after all
//! checks (including the posting fee) have passed, so a failed call leaves
//! every store untouched.
//!
//! | Operation             | Gate            | Store writes                      |
//! |-----------------------|-----------------|-----------------------------------|
//! | `add_authorized_lister` | owner         | authorization set                 |
//! | `create_job_listing`  | authorized lister, fee | listing append             |
//! | `update_job_listing`  | -               | listing overwrite                 |
//! | `delete_job_listing`  | -               | listing remove, review cascade    |
//! | `create_review`       | -               | review append, text index         |
//! | `submit_review`       | -               | review append, text index         |
//! | `update_review`       | -               | review overwrite, text index      |
//! | `delete_review`       | -               | review remove                     |
//! | `set_review_text`     | -               | text index                        |

use super::aggregation;
use super::authorization::ListerRegistry;
use super::entities::{
    AnnotatedReview, JobListing, ListingFields, Review, ReviewContent, ReviewSubject, SalaryStats,
};
use super::listing_store::ListingStore;
use super::review_store::ReviewStore;
use super::text_index::TextIndex;
use crate::errors::{InvalidInput, ReviewLedgerError, StoreKind};
use crate::events::{review_record, Receipt};
use crate::ports::outbound::PostingFeeGateway;
use shared_bus::events::LedgerEvent;
use shared_types::entities::{Address, Hash, ListingId, ReviewId, U256};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Fee charged on every listing creation.
#[derive(Clone)]
pub struct PostingFee {
    /// Amount in token base units.
    pub amount: U256,
    /// Collaborator that moves the tokens.
    pub gateway: Arc<dyn PostingFeeGateway>,
}

impl fmt::Debug for PostingFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostingFee")
            .field("amount", &self.amount)
            .field("recipient", &self.gateway.recipient())
            .finish()
    }
}

/// Listings, reviews, text index and authorization set.
#[derive(Debug, Clone)]
pub struct ReviewLedger {
    registry: ListerRegistry,
    listings: ListingStore,
    reviews: ReviewStore,
    texts: TextIndex,
    fee: Option<PostingFee>,
}

impl ReviewLedger {
    /// Empty ledger owned by `owner`. `fee` of `None` disables the fee gate.
    #[must_use]
    pub fn new(owner: Address, fee: Option<PostingFee>) -> Self {
        Self {
            registry: ListerRegistry::new(owner),
            listings: ListingStore::new(),
            reviews: ReviewStore::new(),
            texts: TextIndex::new(),
            fee,
        }
    }

    /// Empty ledger that never charges a posting fee.
    #[must_use]
    pub fn without_fees(owner: Address) -> Self {
        Self::new(owner, None)
    }

    // =========================================================================
    // AUTHORIZATION
    // =========================================================================

    /// Adds `lister` to the authorization set. Owner only; re-adding an
    /// existing lister succeeds and returns `false`.
    pub fn add_authorized_lister(
        &mut self,
        caller: Address,
        lister: Address,
    ) -> Result<Receipt<bool>, ReviewLedgerError> {
        self.registry.require_owner(caller)?;
        let added = self.registry.authorize(lister);
        debug!(lister = %lister, added, "Lister authorized");
        Ok(Receipt::single(added, LedgerEvent::ListerAuthorized { lister }))
    }

    /// Whether `account` may create listings.
    #[must_use]
    pub fn is_authorized_lister(&self, account: &Address) -> bool {
        self.registry.is_authorized(account)
    }

    /// The deploying account.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.registry.owner()
    }

    /// Number of authorized listers.
    #[must_use]
    pub fn lister_count(&self) -> usize {
        self.registry.len()
    }

    /// Posting fee configuration, if the fee gate is enabled.
    #[must_use]
    pub fn posting_fee(&self) -> Option<&PostingFee> {
        self.fee.as_ref()
    }

    // =========================================================================
    // LISTING STORE
    // =========================================================================

    /// Appends a listing posted by `caller` and returns its id.
    ///
    /// Order of checks: authorization, field validation, fee collection.
    pub fn create_job_listing(
        &mut self,
        caller: Address,
        fields: ListingFields,
    ) -> Result<Receipt<ListingId>, ReviewLedgerError> {
        self.registry.require_lister(caller)?;
        fields.validate()?;

        if let Some(fee) = &self.fee {
            fee.gateway.charge(caller, fee.amount)?;
            debug!(payer = %caller, amount = %fee.amount, "Posting fee collected");
        }

        let event = LedgerEvent::JobListingCreated {
            listing_id: self.listings.count(),
            poster: caller,
            company_name: fields.company_name.clone(),
            job_title: fields.job_title.clone(),
        };
        let listing_id = self.listings.append(fields, caller);
        debug!(listing_id, poster = %caller, "Job listing created");
        Ok(Receipt::single(listing_id, event))
    }

    /// Overwrites the content of an existing listing. Poster is unchanged.
    pub fn update_job_listing(
        &mut self,
        listing_id: ListingId,
        fields: ListingFields,
    ) -> Result<Receipt<()>, ReviewLedgerError> {
        self.listings.ensure_exists(listing_id)?;
        fields.validate()?;

        let listing = self.listings.overwrite(listing_id, fields)?;
        let event = LedgerEvent::JobListingUpdated {
            listing_id,
            company_name: listing.fields.company_name.clone(),
            job_title: listing.fields.job_title.clone(),
        };
        debug!(listing_id, "Job listing updated");
        Ok(Receipt::single((), event))
    }

    /// Removes a listing and every review attached to it.
    ///
    /// Later listings shift down by one and surviving reviews are relinked
    /// accordingly. Returns the number of reviews removed.
    pub fn delete_job_listing(
        &mut self,
        listing_id: ListingId,
    ) -> Result<Receipt<u64>, ReviewLedgerError> {
        self.listings.remove(listing_id)?;
        let removed_reviews = self.reviews.detach_listing(listing_id);
        debug!(listing_id, removed_reviews, "Job listing deleted");
        Ok(Receipt::single(
            removed_reviews,
            LedgerEvent::JobListingDeleted {
                listing_id,
                removed_reviews,
            },
        ))
    }

    /// Listing at `listing_id`.
    pub fn get_job_listing(&self, listing_id: ListingId) -> Result<&JobListing, ReviewLedgerError> {
        self.listings.get(listing_id)
    }

    /// Number of listings.
    #[must_use]
    pub fn get_job_listings_count(&self) -> u64 {
        self.listings.count()
    }

    // =========================================================================
    // REVIEW STORE
    // =========================================================================

    /// Appends a review of an existing listing written by `caller`.
    pub fn create_review(
        &mut self,
        caller: Address,
        listing_id: ListingId,
        content: ReviewContent,
    ) -> Result<Receipt<ReviewId>, ReviewLedgerError> {
        self.listings.ensure_exists(listing_id)?;
        self.append_review(caller, ReviewSubject::Listing(listing_id), content)
    }

    /// Appends a review that names its company and title directly.
    pub fn submit_review(
        &mut self,
        caller: Address,
        company_name: String,
        job_title: String,
        content: ReviewContent,
    ) -> Result<Receipt<ReviewId>, ReviewLedgerError> {
        if company_name.is_empty() {
            return Err(InvalidInput::EmptyCompanyName.into());
        }
        if job_title.is_empty() {
            return Err(InvalidInput::EmptyJobTitle.into());
        }
        self.append_review(
            caller,
            ReviewSubject::Unlisted {
                company_name,
                job_title,
            },
            content,
        )
    }

    fn append_review(
        &mut self,
        caller: Address,
        subject: ReviewSubject,
        content: ReviewContent,
    ) -> Result<Receipt<ReviewId>, ReviewLedgerError> {
        let rating = content.validate()?;

        let review_id = self.reviews.append(Review {
            subject,
            reviewer: caller,
            review_hash: content.review_hash,
            salary: content.salary,
            rating,
        });
        self.texts
            .write(content.review_hash, content.review_text.clone());

        let annotated = self.get_review(review_id)?;
        debug!(review_id, reviewer = %caller, "Review submitted");
        Ok(Receipt::single(
            review_id,
            LedgerEvent::ReviewSubmitted(review_record(annotated, content.review_text)),
        ))
    }

    /// Overwrites hash, salary and rating of a review and writes its text.
    /// Listing link and reviewer are unchanged.
    pub fn update_review(
        &mut self,
        review_id: ReviewId,
        content: ReviewContent,
    ) -> Result<Receipt<()>, ReviewLedgerError> {
        self.reviews.get(review_id)?;
        let rating = content.validate()?;

        let review = self.reviews.get_mut(review_id)?;
        review.review_hash = content.review_hash;
        review.salary = content.salary;
        review.rating = rating;
        self.texts
            .write(content.review_hash, content.review_text.clone());

        let annotated = self.get_review(review_id)?;
        debug!(review_id, "Review updated");
        Ok(Receipt::single(
            (),
            LedgerEvent::ReviewUpdated(review_record(annotated, content.review_text)),
        ))
    }

    /// Removes a review; later reviews shift down by one. Its text stays in
    /// the index.
    pub fn delete_review(&mut self, review_id: ReviewId) -> Result<Receipt<()>, ReviewLedgerError> {
        self.reviews.remove(review_id)?;
        debug!(review_id, "Review deleted");
        Ok(Receipt::single((), LedgerEvent::ReviewDeleted { review_id }))
    }

    /// Review at `review_id` with company and title resolved.
    pub fn get_review(&self, review_id: ReviewId) -> Result<AnnotatedReview, ReviewLedgerError> {
        let review = self.reviews.get(review_id)?;
        aggregation::annotate(&self.listings, review_id, review).ok_or(
            ReviewLedgerError::IndexOutOfRange {
                kind: StoreKind::Listing,
                index: review.listing_id().unwrap_or_default(),
                count: self.listings.count(),
            },
        )
    }

    /// Number of reviews.
    #[must_use]
    pub fn get_reviews_count(&self) -> u64 {
        self.reviews.count()
    }

    // =========================================================================
    // TEXT INDEX
    // =========================================================================

    /// Writes `review_text` under the hash of an existing review.
    pub fn set_review_text(
        &mut self,
        review_id: ReviewId,
        review_text: String,
    ) -> Result<Receipt<Hash>, ReviewLedgerError> {
        let review_hash = self.reviews.get(review_id)?.review_hash;
        self.texts.write(review_hash, review_text);
        debug!(review_id, "Review text set");
        Ok(Receipt::single(
            review_hash,
            LedgerEvent::ReviewTextSet {
                review_id,
                review_hash,
            },
        ))
    }

    /// Text stored under `review_hash`; empty when never written.
    #[must_use]
    pub fn get_review_text(&self, review_hash: &Hash) -> &str {
        self.texts.read(review_hash)
    }

    // =========================================================================
    // AGGREGATION
    // =========================================================================

    /// Reviews attached to `listing_id`, in review-id order.
    #[must_use]
    pub fn get_all_reviews_of_job_listing(&self, listing_id: ListingId) -> Vec<AnnotatedReview> {
        aggregation::reviews_of_listing(&self.listings, &self.reviews, listing_id)
    }

    /// Reviews written by `reviewer`, in review-id order.
    #[must_use]
    pub fn get_all_reviews_by_reviewer(&self, reviewer: &Address) -> Vec<AnnotatedReview> {
        aggregation::reviews_by_reviewer(&self.listings, &self.reviews, reviewer)
    }

    /// Salary statistics for `company_name`.
    #[must_use]
    pub fn get_company_salary_stats(&self, company_name: &str) -> SalaryStats {
        aggregation::company_salary_stats(&self.listings, &self.reviews, company_name)
    }

    // =========================================================================
    // RAW ACCESS (invariant checks)
    // =========================================================================

    pub(crate) fn listing_store(&self) -> &ListingStore {
        &self.listings
    }

    pub(crate) fn review_store(&self) -> &ReviewStore {
        &self.reviews
    }
}

// =============================================================================
// TESTS
// =============================================================================

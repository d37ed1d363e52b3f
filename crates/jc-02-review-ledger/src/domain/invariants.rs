//! # Domain Invariants
//!
//! Structural properties that hold after every committed call. The service
//! re-checks them in debug builds after each mutation; tests check them
//! after randomized operation sequences.
//!
//! - Every listing-linked review names a listing in `[0, listing_count)`.
//! - No review carries the zero hash.
//! - Every stored listing has non-empty company, title and description.
//! - Every unlisted review has a non-empty company and title.

use super::entities::ReviewSubject;
use super::ledger::ReviewLedger;
use shared_types::entities::{ListingId, ReviewId};
use std::fmt;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Review links point at existing listings.
#[must_use]
pub fn check_review_links(ledger: &ReviewLedger) -> Vec<InvariantViolation> {
    let count = ledger.listing_store().count();
    ledger
        .review_store()
        .iter()
        .filter_map(|(review_id, review)| match review.listing_id() {
            Some(listing_id) if listing_id >= count => Some(InvariantViolation::DanglingReview {
                review_id,
                listing_id,
                listing_count: count,
            }),
            _ => None,
        })
        .collect()
}

/// Stored reviews never carry the zero hash.
#[must_use]
pub fn check_review_hashes(ledger: &ReviewLedger) -> Vec<InvariantViolation> {
    ledger
        .review_store()
        .iter()
        .filter(|(_, review)| review.review_hash.is_zero())
        .map(|(review_id, _)| InvariantViolation::ZeroHash { review_id })
        .collect()
}

/// Stored listings and unlisted reviews keep non-empty text fields.
#[must_use]
pub fn check_non_empty_fields(ledger: &ReviewLedger) -> Vec<InvariantViolation> {
    let mut violations: Vec<_> = ledger
        .listing_store()
        .iter()
        .filter(|(_, listing)| listing.fields.validate().is_err())
        .map(|(listing_id, _)| InvariantViolation::EmptyListingField { listing_id })
        .collect();

    for (review_id, review) in ledger.review_store().iter() {
        if let ReviewSubject::Unlisted {
            company_name,
            job_title,
        } = &review.subject
        {
            if company_name.is_empty() || job_title.is_empty() {
                violations.push(InvariantViolation::EmptyReviewSubject { review_id });
            }
        }
    }
    violations
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(ledger: &ReviewLedger) -> InvariantCheckResult {
    let mut violations = check_review_links(ledger);
    violations.extend(check_review_hashes(ledger));
    violations.extend(check_non_empty_fields(ledger));

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Review links to a listing past the end of the store.
    DanglingReview {
        review_id: ReviewId,
        listing_id: ListingId,
        listing_count: u64,
    },
    /// Review stored with the zero hash.
    ZeroHash { review_id: ReviewId },
    /// Listing stored with an empty field.
    EmptyListingField { listing_id: ListingId },
    /// Unlisted review stored without company or title.
    EmptyReviewSubject { review_id: ReviewId },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingReview {
                review_id,
                listing_id,
                listing_count,
            } => write!(
                f,
                "review {review_id} links listing {listing_id} but only {listing_count} exist"
            ),
            Self::ZeroHash { review_id } => write!(f, "review {review_id} has the zero hash"),
            Self::EmptyListingField { listing_id } => {
                write!(f, "listing {listing_id} has an empty field")
            }
            Self::EmptyReviewSubject { review_id } => {
                write!(f, "review {review_id} has an empty company or job title")
            }
        }
    }
}

//! # Domain Entities
//!
//! Records held by the listing and review stores, plus the views returned by
//! aggregation queries.

use crate::errors::InvalidInput;
use serde::{Deserialize, Serialize};
use shared_types::entities::{Address, Hash, ListingId, ReviewId};

// =============================================================================
// LISTINGS
// =============================================================================

/// Caller-supplied listing content. Used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFields {
    /// Company offering the job. Must be non-empty.
    pub company_name: String,
    /// Job title. Must be non-empty.
    pub job_title: String,
    /// Free-form description. Must be non-empty.
    pub description: String,
}

impl ListingFields {
    /// Convenience constructor.
    pub fn new(
        company_name: impl Into<String>,
        job_title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            job_title: job_title.into(),
            description: description.into(),
        }
    }

    /// Checks that no field is empty.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.company_name.is_empty() {
            return Err(InvalidInput::EmptyCompanyName);
        }
        if self.job_title.is_empty() {
            return Err(InvalidInput::EmptyJobTitle);
        }
        if self.description.is_empty() {
            return Err(InvalidInput::EmptyDescription);
        }
        Ok(())
    }
}

/// A stored job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    /// Listing content.
    pub fields: ListingFields,
    /// Authorized lister that created the listing.
    pub poster: Address,
}

// =============================================================================
// REVIEWS
// =============================================================================

/// Star rating, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;

    /// Validates a raw rating.
    pub fn new(value: u8) -> Result<Self, InvalidInput> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidInput::InvalidRating(value))
        }
    }

    /// Raw value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidInput;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// What a review is about.
///
/// Reviews created against a listing borrow company and title from it;
/// reviews submitted directly carry their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewSubject {
    /// Attached to a listing; removed when the listing is deleted.
    Listing(ListingId),
    /// Not attached to any listing.
    Unlisted {
        /// Company the review is about.
        company_name: String,
        /// Job title the review is about.
        job_title: String,
    },
}

/// Caller-supplied review content. Used for create, submit and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewContent {
    /// Key into the text index. Must be non-zero.
    pub review_hash: Hash,
    /// Text to store under `review_hash`.
    pub review_text: String,
    /// Reported salary.
    pub salary: u64,
    /// Raw rating; validated into a [`Rating`].
    pub rating: u8,
}

impl ReviewContent {
    /// Convenience constructor.
    pub fn new(review_hash: Hash, review_text: impl Into<String>, salary: u64, rating: u8) -> Self {
        Self {
            review_hash,
            review_text: review_text.into(),
            salary,
            rating,
        }
    }

    /// Content whose hash is the keccak digest of its text.
    pub fn hashed(review_text: impl Into<String>, salary: u64, rating: u8) -> Self {
        let review_text = review_text.into();
        Self {
            review_hash: Hash::of_text(&review_text),
            review_text,
            salary,
            rating,
        }
    }

    /// Checks the hash and rating, returning the validated rating.
    pub fn validate(&self) -> Result<Rating, InvalidInput> {
        if self.review_hash.is_zero() {
            return Err(InvalidInput::EmptyHash);
        }
        Rating::new(self.rating)
    }
}

/// A stored review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Listing link or inline company/title.
    pub subject: ReviewSubject,
    /// Account that wrote the review.
    pub reviewer: Address,
    /// Key into the text index. Never zero.
    pub review_hash: Hash,
    /// Reported salary.
    pub salary: u64,
    /// Validated rating.
    pub rating: Rating,
}

impl Review {
    /// Parent listing, if the review has one.
    #[must_use]
    pub fn listing_id(&self) -> Option<ListingId> {
        match self.subject {
            ReviewSubject::Listing(id) => Some(id),
            ReviewSubject::Unlisted { .. } => None,
        }
    }
}

// =============================================================================
// QUERY VIEWS
// =============================================================================

/// A review with company and title resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedReview {
    /// Current dense index.
    pub review_id: ReviewId,
    /// Parent listing, if any.
    pub listing_id: Option<ListingId>,
    /// Account that wrote the review.
    pub reviewer: Address,
    /// Company from the parent listing (or the review itself).
    pub company_name: String,
    /// Job title from the parent listing (or the review itself).
    pub job_title: String,
    /// Key into the text index.
    pub review_hash: Hash,
    /// Reported salary.
    pub salary: u64,
    /// Rating in `1..=5`.
    pub rating: u8,
}

/// Salary aggregate for one company. All zero when nothing matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStats {
    /// Truncated integer mean.
    pub average: u64,
    /// Smallest reported salary.
    pub minimum: u64,
    /// Largest reported salary.
    pub maximum: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert_eq!(Rating::new(1).unwrap().get(), 1);
        assert_eq!(Rating::new(5).unwrap().get(), 5);
        assert_eq!(Rating::try_from(6), Err(InvalidInput::InvalidRating(6)));
    }

    #[test]
    fn test_listing_fields_validation_order() {
        assert_eq!(
            ListingFields::new("", "", "").validate(),
            Err(InvalidInput::EmptyCompanyName)
        );
        assert_eq!(
            ListingFields::new("Acme", "", "").validate(),
            Err(InvalidInput::EmptyJobTitle)
        );
        assert_eq!(
            ListingFields::new("Acme", "Engineer", "").validate(),
            Err(InvalidInput::EmptyDescription)
        );
        assert!(ListingFields::new("Acme", "Engineer", "Builds things")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_review_content_validation() {
        let zero = ReviewContent::new(Hash::ZERO, "text", 100, 3);
        assert_eq!(zero.validate(), Err(InvalidInput::EmptyHash));

        let bad_rating = ReviewContent::hashed("text", 100, 7);
        assert_eq!(bad_rating.validate(), Err(InvalidInput::InvalidRating(7)));

        let ok = ReviewContent::hashed("text", 100, 4);
        assert_eq!(ok.validate().unwrap().get(), 4);
        assert_eq!(ok.review_hash, Hash::of_text("text"));
    }

    #[test]
    fn test_review_listing_id() {
        let review = Review {
            subject: ReviewSubject::Listing(3),
            reviewer: Address::new([1; 20]),
            review_hash: Hash::of_text("x"),
            salary: 1,
            rating: Rating::new(1).unwrap(),
        };
        assert_eq!(review.listing_id(), Some(3));

        let unlisted = Review {
            subject: ReviewSubject::Unlisted {
                company_name: "Acme".into(),
                job_title: "Engineer".into(),
            },
            ..review
        };
        assert_eq!(unlisted.listing_id(), None);
    }
}

//! # Aggregation Queries
//!
//! Read-only scans over the review store. Results are returned in review-id
//! order with company and title resolved through the parent listing.

use super::entities::{AnnotatedReview, Review, ReviewSubject, SalaryStats};
use super::listing_store::ListingStore;
use super::review_store::ReviewStore;
use shared_types::entities::{Address, ListingId, ReviewId};

/// Resolves company and title for `review`.
///
/// Returns `None` only if the review links to a listing that does not exist,
/// which the cascade on listing delete rules out.
pub fn annotate(
    listings: &ListingStore,
    review_id: ReviewId,
    review: &Review,
) -> Option<AnnotatedReview> {
    let (company_name, job_title) = match &review.subject {
        ReviewSubject::Listing(id) => {
            let listing = listings.get(*id).ok()?;
            (
                listing.fields.company_name.clone(),
                listing.fields.job_title.clone(),
            )
        }
        ReviewSubject::Unlisted {
            company_name,
            job_title,
        } => (company_name.clone(), job_title.clone()),
    };

    Some(AnnotatedReview {
        review_id,
        listing_id: review.listing_id(),
        reviewer: review.reviewer,
        company_name,
        job_title,
        review_hash: review.review_hash,
        salary: review.salary,
        rating: review.rating.get(),
    })
}

/// Every review attached to `listing_id`. Empty for unknown listings.
#[must_use]
pub fn reviews_of_listing(
    listings: &ListingStore,
    reviews: &ReviewStore,
    listing_id: ListingId,
) -> Vec<AnnotatedReview> {
    reviews
        .iter()
        .filter(|(_, review)| review.listing_id() == Some(listing_id))
        .filter_map(|(id, review)| annotate(listings, id, review))
        .collect()
}

/// Every review written by `reviewer`.
#[must_use]
pub fn reviews_by_reviewer(
    listings: &ListingStore,
    reviews: &ReviewStore,
    reviewer: &Address,
) -> Vec<AnnotatedReview> {
    reviews
        .iter()
        .filter(|(_, review)| review.reviewer == *reviewer)
        .filter_map(|(id, review)| annotate(listings, id, review))
        .collect()
}

/// Salary average, minimum and maximum over reviews about `company_name`.
///
/// Matching is exact and case-sensitive on the resolved company name. The
/// average truncates toward zero; no match yields all zeros.
#[must_use]
pub fn company_salary_stats(
    listings: &ListingStore,
    reviews: &ReviewStore,
    company_name: &str,
) -> SalaryStats {
    let mut count: u128 = 0;
    let mut total: u128 = 0;
    let mut minimum = u64::MAX;
    let mut maximum = 0;

    for (_, review) in reviews.iter() {
        let company = match &review.subject {
            ReviewSubject::Listing(id) => match listings.get(*id) {
                Ok(listing) => listing.fields.company_name.as_str(),
                Err(_) => continue,
            },
            ReviewSubject::Unlisted { company_name, .. } => company_name.as_str(),
        };
        if company != company_name {
            continue;
        }

        count += 1;
        total += u128::from(review.salary);
        minimum = minimum.min(review.salary);
        maximum = maximum.max(review.salary);
    }

    if count == 0 {
        return SalaryStats::default();
    }

    SalaryStats {
        // The mean of u64 values always fits in u64.
        average: (total / count) as u64,
        minimum,
        maximum,
    }
}

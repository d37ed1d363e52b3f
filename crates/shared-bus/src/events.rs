//! # Ledger Events
//!
//! Defines all event types that flow through the shared bus. Every committed
//! mutation of the review ledger produces exactly one of these.

use serde::{Deserialize, Serialize};
use shared_types::entities::{Address, Hash, ListingId, ReviewId};

/// Subsystem ID of the token ledger.
pub const TOKEN_LEDGER_SUBSYSTEM: u8 = 1;

/// Subsystem ID of the review ledger.
pub const REVIEW_LEDGER_SUBSYSTEM: u8 = 2;

/// Full field set carried by `ReviewSubmitted` and `ReviewUpdated`.
///
/// Company and job title are resolved from the parent listing at emission
/// time (or taken from the review itself for reviews without a listing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Dense review index at emission time.
    pub review_id: ReviewId,
    /// Account that wrote the review.
    pub reviewer: Address,
    /// Company the review is about.
    pub company_name: String,
    /// Job title the review is about.
    pub job_title: String,
    /// Content hash keying the review text.
    pub review_hash: Hash,
    /// Review text written under `review_hash`.
    pub review_text: String,
    /// Reported salary.
    pub salary: u64,
    /// Rating in `1..=5`.
    pub rating: u8,
}

/// All events that can be published to the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    // =========================================================================
    // AUTHORIZATION
    // =========================================================================
    /// An address was added to the authorized lister set.
    ListerAuthorized {
        /// The newly authorized lister.
        lister: Address,
    },

    // =========================================================================
    // LISTING STORE
    // =========================================================================
    /// A job listing was appended.
    JobListingCreated {
        /// Index of the new listing.
        listing_id: ListingId,
        /// Account that created it.
        poster: Address,
        /// Company name.
        company_name: String,
        /// Job title.
        job_title: String,
    },

    /// A job listing was overwritten in place.
    JobListingUpdated {
        /// Index of the updated listing.
        listing_id: ListingId,
        /// New company name.
        company_name: String,
        /// New job title.
        job_title: String,
    },

    /// A job listing was removed together with its reviews.
    JobListingDeleted {
        /// Index the listing occupied before removal.
        listing_id: ListingId,
        /// Number of reviews removed by the cascade.
        removed_reviews: u64,
    },

    // =========================================================================
    // REVIEW STORE
    // =========================================================================
    /// A review was appended.
    ReviewSubmitted(ReviewRecord),

    /// A review was overwritten in place.
    ReviewUpdated(ReviewRecord),

    /// A review was removed.
    ReviewDeleted {
        /// Index the review occupied before removal.
        review_id: ReviewId,
    },

    // =========================================================================
    // TEXT INDEX
    // =========================================================================
    /// Text was written under an existing review's hash.
    ReviewTextSet {
        /// Review whose hash was used as key.
        review_id: ReviewId,
        /// The hash the text is stored under.
        review_hash: Hash,
    },
}

impl LedgerEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ListerAuthorized { .. } => EventTopic::Authorization,
            Self::JobListingCreated { .. }
            | Self::JobListingUpdated { .. }
            | Self::JobListingDeleted { .. } => EventTopic::Listings,
            Self::ReviewSubmitted(_) | Self::ReviewUpdated(_) | Self::ReviewDeleted { .. } => {
                EventTopic::Reviews
            }
            Self::ReviewTextSet { .. } => EventTopic::TextIndex,
        }
    }

    /// Get the originating subsystem ID.
    #[must_use]
    pub fn source_subsystem(&self) -> u8 {
        REVIEW_LEDGER_SUBSYSTEM
    }

    /// Short event name, as it appears in transaction logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListerAuthorized { .. } => "ListerAuthorized",
            Self::JobListingCreated { .. } => "JobListingCreated",
            Self::JobListingUpdated { .. } => "JobListingUpdated",
            Self::JobListingDeleted { .. } => "JobListingDeleted",
            Self::ReviewSubmitted(_) => "ReviewSubmitted",
            Self::ReviewUpdated(_) => "ReviewUpdated",
            Self::ReviewDeleted { .. } => "ReviewDeleted",
            Self::ReviewTextSet { .. } => "ReviewTextSet",
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Lister authorization changes.
    Authorization,
    /// Listing store changes.
    Listings,
    /// Review store changes.
    Reviews,
    /// Text index writes that are not part of a review change.
    TextIndex,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Source subsystems to include. Empty means all sources.
    pub source_subsystems: Vec<u8>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            source_subsystems: Vec::new(),
        }
    }

    /// Create a filter for events from specific subsystems.
    #[must_use]
    pub fn from_subsystems(subsystems: Vec<u8>) -> Self {
        Self {
            topics: Vec::new(),
            source_subsystems: subsystems,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &LedgerEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let source_match = self.source_subsystems.is_empty()
            || self.source_subsystems.contains(&event.source_subsystem());

        topic_match && source_match
    }
}

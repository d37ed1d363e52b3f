//! # Call Receipts
//!
//! Every successful mutating call returns its output together with the
//! events it emitted, mirroring a transaction receipt's log list.

use crate::domain::entities::AnnotatedReview;
use shared_bus::events::{LedgerEvent, ReviewRecord};

/// Output of a committed call plus its emitted events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt<T> {
    /// Value returned by the call.
    pub output: T,
    /// Emitted events, in emission order.
    pub events: Vec<LedgerEvent>,
}

impl<T> Receipt<T> {
    /// Receipt for a call that emitted a single event.
    pub fn single(output: T, event: LedgerEvent) -> Self {
        Self {
            output,
            events: vec![event],
        }
    }

    /// First emitted event.
    #[must_use]
    pub fn event(&self) -> Option<&LedgerEvent> {
        self.events.first()
    }

    /// Replaces the output, keeping the events.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Receipt<U> {
        Receipt {
            output: f(self.output),
            events: self.events,
        }
    }
}

/// Full review payload for `ReviewSubmitted`/`ReviewUpdated`.
#[must_use]
pub fn review_record(review: AnnotatedReview, review_text: String) -> ReviewRecord {
    ReviewRecord {
        review_id: review.review_id,
        reviewer: review.reviewer,
        company_name: review.company_name,
        job_title: review.job_title,
        review_hash: review.review_hash,
        review_text,
        salary: review.salary,
        rating: review.rating,
    }
}

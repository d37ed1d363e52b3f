//! # JC-02 Review Ledger - Job Listings, Reviews, Salary Statistics
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Holds every job listing and review, resolves review text by content
//! hash, aggregates per-company salary statistics and gates listing creation
//! behind an owner-managed authorization set and a token posting fee.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Listing and review ids are exactly `0..count` | `domain/dense_store.rs` - `remove()` |
//! | INVARIANT-2 | No review outlives its listing | `domain/review_store.rs` - `detach_listing()` |
//! | INVARIANT-3 | Review links follow listings that shift down | `domain/review_store.rs` - `detach_listing()` |
//! | INVARIANT-4 | Stored hashes are non-zero, ratings in `1..=5` | `domain/entities.rs` - `ReviewContent::validate()` |
//! | INVARIANT-5 | Only authorized listers create listings | `domain/authorization.rs` - `require_lister()` |
//! | INVARIANT-6 | Failed calls change nothing (fee included) | `domain/ledger.rs` - checks precede writes |
//! | INVARIANT-7 | Mutations apply in one total order | `service.rs` - single write lock |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                    ReviewLedgerService                    │
//! │      write lock · event journal · bus publish · stats     │
//! ├───────────────────────────────────────────────────────────┤
//! │                      ReviewLedger                         │
//! │  ListerRegistry │ ListingStore │ ReviewStore │ TextIndex  │
//! │                  aggregation queries                      │
//! ├───────────────────────────────────────────────────────────┤
//! │  PostingFeeGateway  ◄──  TokenFeeGateway<FungibleToken>   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jc_02_review_ledger::prelude::*;
//!
//! let service = create_test_service(owner);
//! service.add_authorized_lister(owner, lister).await?;
//! let listing = service
//!     .create_job_listing(lister, ListingFields::new("Acme", "Engineer", "Builds things"))
//!     .await?;
//! service
//!     .create_review(reviewer, listing.output, ReviewContent::hashed("Great team", 90_000, 5))
//!     .await?;
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

/// Subsystem ID for the review ledger.
pub const SUBSYSTEM_ID: u8 = shared_bus::events::REVIEW_LEDGER_SUBSYSTEM;

/// Subsystem name, used as the `subsystem` log field.
pub const SUBSYSTEM_NAME: &str = "review-ledger";

/// Commonly used types.
pub mod prelude {
    pub use crate::adapters::TokenFeeGateway;
    pub use crate::config::{ConfigError, LedgerConfig};
    pub use crate::domain::entities::{
        AnnotatedReview, JobListing, ListingFields, Rating, Review, ReviewContent, ReviewSubject,
        SalaryStats,
    };
    pub use crate::domain::ledger::{PostingFee, ReviewLedger};
    pub use crate::errors::{InvalidInput, ReviewLedgerError, StoreKind};
    pub use crate::events::Receipt;
    pub use crate::ports::inbound::ReviewLedgerApi;
    pub use crate::ports::outbound::{FeeError, PostingFeeGateway};
    pub use crate::service::{
        create_test_service, JournalEntry, ReviewLedgerService, ServiceConfig, ServiceStats,
    };
}

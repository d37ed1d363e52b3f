//! # Jobchain Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion workloads per subsystem
//! │   └── jc_02_review_ledger.rs
//! │
//! └── integration/      # Cross-crate scenarios
//!     ├── listings.rs   # Listing lifecycle through an authorized lister
//!     ├── reviews.rs    # Free-standing reviews and the text index
//!     ├── composed.rs   # Listings, reviews, aggregation and the cascade
//!     └── fee_gate.rs   # Posting fee collected through the token
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p jc-tests
//!
//! # By category
//! cargo test -p jc-tests integration::composed
//!
//! # Benchmarks
//! cargo bench -p jc-tests
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod benchmarks;
pub mod integration;

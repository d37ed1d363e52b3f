//! # Shared Types Crate
//!
//! Value objects used across the Jobchain workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address`, `Hash` and `U256` are defined once
//!   here and re-used by the token ledger, the review ledger and the event bus.
//! - **Fixed-width identities**: addresses are 20 bytes, hashes 32 bytes. The
//!   all-zero value of either is reserved and never names a real party or
//!   review.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;

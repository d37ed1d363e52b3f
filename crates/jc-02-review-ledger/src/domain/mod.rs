//! # Domain Layer
//!
//! Pure ledger logic: entities, dense stores, the text index, the
//! authorization gate, aggregation queries and the state object tying them
//! together. No async, no I/O.

pub mod aggregation;
pub mod authorization;
pub mod dense_store;
pub mod entities;
pub mod invariants;
pub mod ledger;
pub mod listing_store;
pub mod review_store;
pub mod text_index;

pub use authorization::ListerRegistry;
pub use dense_store::DenseStore;
pub use entities::*;
pub use invariants::{check_all_invariants, InvariantCheckResult, InvariantViolation};
pub use ledger::{PostingFee, ReviewLedger};
pub use listing_store::ListingStore;
pub use review_store::ReviewStore;
pub use text_index::TextIndex;

//! # Integration Scenarios
//!
//! End-to-end ledger scenarios driven through `ReviewLedgerApi`, the same
//! surface the node runtime exposes.

#[cfg(test)]
pub(crate) mod fixtures;

pub mod composed;
pub mod fee_gate;
pub mod listings;
pub mod reviews;

//! # Ports Layer
//!
//! - `inbound`: the API the review ledger offers
//! - `outbound`: what it needs from the fee token

pub mod inbound;
pub mod outbound;

pub use inbound::ReviewLedgerApi;
pub use outbound::{FeeError, PostingFeeGateway};

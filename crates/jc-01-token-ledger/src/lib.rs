//! # JC-01 Token Ledger - Posting Fee Token
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! A standard fungible token (`JOBcoin`) whose only role in Jobchain is to
//! pay the listing fee. Listers `approve` the review ledger's address; the
//! review ledger then pulls the fee with `transfer_from` when a listing is
//! created.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Supply conservation | `domain/ledger.rs` - `move_tokens()` |
//! | INVARIANT-2 | Allowance never overspent | `domain/ledger.rs` - `transfer_from()` |
//! | INVARIANT-3 | Failed call changes nothing | checks precede writes |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/inbound.rs      - FungibleToken trait
//! domain/ledger.rs      - TokenLedger (balances, allowances, journal)
//! domain/entities.rs    - TokenMetadata, TokenEvent
//! domain/errors.rs      - TokenError
//! ```

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;

/// Subsystem ID for the token ledger.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Token Ledger";

//! # Domain Layer (Inner Hexagon)
//!
//! Pure balance and allowance bookkeeping. NO I/O, NO async.

pub mod entities;
pub mod errors;
pub mod ledger;

pub use entities::*;
pub use errors::*;
pub use ledger::*;

//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the review ledger needs from the outside world.

use shared_types::entities::{Address, U256};
use thiserror::Error;

/// Failure reported by the fee collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    /// The payer approved less than the fee.
    #[error("insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance {
        /// The fee.
        required: U256,
        /// Allowance the payer granted.
        available: U256,
    },

    /// The payer holds less than the fee.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// The fee.
        required: U256,
        /// Payer balance.
        available: U256,
    },

    /// Any other refusal.
    #[error("fee rejected: {0}")]
    Rejected(String),
}

/// Collects the posting fee from a lister.
///
/// `charge` either moves the full amount or moves nothing. The ledger calls
/// it after every precondition of `createJobListing` has passed and before
/// the listing is appended, so a refusal leaves the ledger unchanged.
pub trait PostingFeeGateway: Send + Sync {
    /// Pulls `amount` from `payer` using an allowance granted to the ledger.
    ///
    /// # Arguments
    /// * `payer` - The lister creating a listing
    /// * `amount` - Fee in token base units
    ///
    /// # Returns
    /// * `Ok(())` - The fee was transferred
    /// * `Err(FeeError)` - Nothing was transferred
    fn charge(&self, payer: Address, amount: U256) -> Result<(), FeeError>;

    /// Account that receives collected fees.
    fn recipient(&self) -> Address;

    /// Contract address of the token the fee is paid in.
    fn token_address(&self) -> Address;
}

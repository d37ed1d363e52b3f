//! # Error Types
//!
//! Every failed ledger call aborts with one of these and leaves all stores,
//! the text index, the authorization set and the token balances unchanged.

use crate::ports::outbound::FeeError;
use shared_types::entities::{Address, U256};
use std::fmt;
use thiserror::Error;

// =============================================================================
// INPUT VALIDATION
// =============================================================================

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Company name was empty.
    #[error("Company name must not be empty")]
    EmptyCompanyName,

    /// Job title was empty.
    #[error("Job title must not be empty")]
    EmptyJobTitle,

    /// Listing description was empty.
    #[error("Description must not be empty")]
    EmptyDescription,

    /// Review hash was the reserved zero value.
    #[error("Hash must not be empty")]
    EmptyHash,

    /// Rating outside `1..=5`.
    #[error("Invalid rating: {0} (expected 1..=5)")]
    InvalidRating(u8),
}

// =============================================================================
// LEDGER ERRORS
// =============================================================================

/// Which dense store an index referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// The listing store.
    Listing,
    /// The review store.
    Review,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listing => write!(f, "listing"),
            Self::Review => write!(f, "review"),
        }
    }
}

/// Errors returned by review-ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewLedgerError {
    /// Caller lacks the role the operation requires.
    #[error("Unauthorized: {caller:?} is not {role}")]
    Unauthorized {
        /// Account that made the call.
        caller: Address,
        /// Role the call requires.
        role: &'static str,
    },

    /// An argument failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// A listing or review id was not in `[0, count)`.
    #[error("Index out of range: {kind} {index} >= {count}")]
    IndexOutOfRange {
        /// Store the id was looked up in.
        kind: StoreKind,
        /// Requested id.
        index: u64,
        /// Entries in the store at the time of the call.
        count: u64,
    },

    /// The posting fee allowance granted to the ledger is too small.
    #[error("Insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance {
        /// The posting fee.
        required: U256,
        /// Allowance the lister granted the ledger.
        available: U256,
    },

    /// The lister cannot cover the posting fee.
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// The posting fee.
        required: U256,
        /// Lister balance.
        available: U256,
    },

    /// The fee collaborator failed for another reason.
    #[error("Fee collection failed: {0}")]
    FeeCollection(String),
}

impl ReviewLedgerError {
    /// Stable label used for logs and metrics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "unauthorized",
            Self::InvalidInput(_) => "invalid_input",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::InsufficientAllowance { .. } => "insufficient_allowance",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::FeeCollection(_) => "fee_collection",
        }
    }
}

impl From<FeeError> for ReviewLedgerError {
    fn from(err: FeeError) -> Self {
        match err {
            FeeError::InsufficientAllowance {
                required,
                available,
            } => Self::InsufficientAllowance {
                required,
                available,
            },
            FeeError::InsufficientBalance {
                required,
                available,
            } => Self::InsufficientBalance {
                required,
                available,
            },
            FeeError::Rejected(reason) => Self::FeeCollection(reason),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Token Entities
//!
//! Metadata and the journal entries produced by balance changes.

use serde::{Deserialize, Serialize};
use shared_types::entities::{Address, U256, TOKEN_DECIMALS};

/// Static token metadata, fixed at deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human readable name, e.g. `JOBcoin`.
    pub name: String,
    /// Ticker symbol, e.g. `JOB`.
    pub symbol: String,
    /// Decimal places of the base unit.
    pub decimals: u8,
}

impl TokenMetadata {
    /// Metadata with the workspace-wide decimal count.
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals: TOKEN_DECIMALS,
        }
    }
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self::new("JOBcoin", "JOB")
    }
}

/// A balance or allowance change, appended on every successful call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    /// Tokens moved between accounts. `from` is zero for the initial mint.
    Transfer {
        /// Debited account.
        from: Address,
        /// Credited account.
        to: Address,
        /// Amount in base units.
        value: U256,
    },
    /// An allowance was set.
    Approval {
        /// Account whose tokens may be spent.
        owner: Address,
        /// Account allowed to spend them.
        spender: Address,
        /// New allowance in base units.
        value: U256,
    },
}

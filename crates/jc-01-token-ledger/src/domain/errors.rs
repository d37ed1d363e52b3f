//! Token ledger error types.

use shared_types::entities::U256;
use thiserror::Error;

/// Errors returned by token operations. A failed operation changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The debited account holds less than the amount.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: U256, available: U256 },

    /// The spender's allowance over the debited account is too small.
    #[error("insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance { required: U256, available: U256 },

    /// Transfers and approvals may not name the zero address.
    #[error("zero address not allowed as {role}")]
    ZeroAddress { role: &'static str },
}

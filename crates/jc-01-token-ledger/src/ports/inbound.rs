//! # Driving Port (API - Inbound)
//!
//! The standard fungible-token surface. The review ledger consumes it
//! through `transfer_from` only, to collect posting fees.

use crate::domain::errors::TokenError;
use crate::domain::ledger::TokenLedger;
use shared_types::entities::{Address, U256};

/// Standard fungible-token operations.
///
/// `caller` is the account executing the call (the transaction sender).
pub trait FungibleToken: Send + Sync {
    /// Contract address of the token.
    fn address(&self) -> Address;

    /// Balance of `account`.
    fn balance_of(&self, account: Address) -> U256;

    /// Remaining allowance of `spender` over `owner`.
    fn allowance(&self, owner: Address, spender: Address) -> U256;

    /// Moves `amount` from `caller` to `to`.
    fn transfer(&mut self, caller: Address, to: Address, amount: U256) -> Result<(), TokenError>;

    /// Sets `spender`'s allowance over `caller` to `amount`.
    fn approve(&mut self, caller: Address, spender: Address, amount: U256)
        -> Result<(), TokenError>;

    /// Moves `amount` from `from` to `to`, spending `caller`'s allowance.
    fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError>;
}

impl FungibleToken for TokenLedger {
    fn address(&self) -> Address {
        TokenLedger::address(self)
    }

    fn balance_of(&self, account: Address) -> U256 {
        TokenLedger::balance_of(self, account)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        TokenLedger::allowance(self, owner, spender)
    }

    fn transfer(&mut self, caller: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        TokenLedger::transfer(self, caller, to, amount)
    }

    fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        TokenLedger::approve(self, caller, spender, amount)
    }

    fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        TokenLedger::transfer_from(self, caller, from, to, amount)
    }
}

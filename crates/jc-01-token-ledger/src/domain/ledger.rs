//! # Token Ledger
//!
//! Balances and allowances for the posting-fee token.
//!
//! ## Invariants Enforced
//!
//! - Sum of all balances always equals `total_supply` (no mint after deploy,
//!   no burn).
//! - A failed call leaves balances, allowances and the journal untouched:
//!   every check runs before the first write.

use super::entities::{TokenEvent, TokenMetadata};
use super::errors::TokenError;
use shared_types::entities::{Address, U256};
use std::collections::HashMap;
use tracing::{debug, info};

/// In-memory fungible token.
#[derive(Debug, Clone)]
pub struct TokenLedger {
    address: Address,
    metadata: TokenMetadata,
    total_supply: U256,
    balances: HashMap<Address, U256>,
    /// `(owner, spender) -> remaining allowance`.
    allowances: HashMap<(Address, Address), U256>,
    journal: Vec<TokenEvent>,
}

impl TokenLedger {
    /// Deploys a token at `address`, minting `initial_supply` to `deployer`.
    #[must_use]
    pub fn deploy(
        address: Address,
        metadata: TokenMetadata,
        initial_supply: U256,
        deployer: Address,
    ) -> Self {
        info!(
            token = %address,
            name = %metadata.name,
            symbol = %metadata.symbol,
            supply = %initial_supply,
            deployer = %deployer,
            "Token deployed"
        );

        let mut balances = HashMap::new();
        balances.insert(deployer, initial_supply);

        Self {
            address,
            metadata,
            total_supply: initial_supply,
            balances,
            allowances: HashMap::new(),
            journal: vec![TokenEvent::Transfer {
                from: Address::ZERO,
                to: deployer,
                value: initial_supply,
            }],
        }
    }

    /// Contract address the token was deployed at.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Token metadata.
    #[must_use]
    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// Total number of base units in existence.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Balance of `account` (zero if never credited).
    #[must_use]
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    /// Remaining amount `spender` may move out of `owner`'s balance.
    #[must_use]
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// Every balance or allowance change since deployment, in order.
    #[must_use]
    pub fn journal(&self) -> &[TokenEvent] {
        &self.journal
    }

    /// Moves `amount` from `caller` to `to`.
    pub fn transfer(&mut self, caller: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        self.move_tokens(caller, to, amount)?;
        debug!(from = %caller, to = %to, amount = %amount, "Transfer");
        Ok(())
    }

    /// Sets `spender`'s allowance over `caller`'s balance to `amount`.
    ///
    /// Overwrites any previous allowance; approving does not require the
    /// owner to hold the amount yet.
    pub fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if spender.is_zero() {
            return Err(TokenError::ZeroAddress { role: "spender" });
        }
        self.allowances.insert((caller, spender), amount);
        self.journal.push(TokenEvent::Approval {
            owner: caller,
            spender,
            value: amount,
        });
        debug!(owner = %caller, spender = %spender, amount = %amount, "Approval");
        Ok(())
    }

    /// Moves `amount` from `from` to `to`, spending `caller`'s allowance.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        let allowed = self.allowance(from, caller);
        if allowed < amount {
            return Err(TokenError::InsufficientAllowance {
                required: amount,
                available: allowed,
            });
        }

        self.move_tokens(from, to, amount)?;
        self.allowances.insert((from, caller), allowed - amount);

        debug!(
            spender = %caller,
            from = %from,
            to = %to,
            amount = %amount,
            "TransferFrom"
        );
        Ok(())
    }

    fn move_tokens(&mut self, from: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        if to.is_zero() {
            return Err(TokenError::ZeroAddress { role: "recipient" });
        }
        let available = self.balance_of(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                required: amount,
                available,
            });
        }

        self.balances.insert(from, available - amount);
        *self.balances.entry(to).or_default() += amount;
        self.journal.push(TokenEvent::Transfer {
            from,
            to,
            value: amount,
        });
        Ok(())
    }
}

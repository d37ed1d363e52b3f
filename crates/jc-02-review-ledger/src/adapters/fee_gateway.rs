//! # Token Fee Gateway
//!
//! Implements [`PostingFeeGateway`] on top of any [`FungibleToken`]. The
//! review ledger's own address acts as spender and recipient, so listers
//! must first `approve(ledger_address, fee)` on the token.

use crate::ports::outbound::{FeeError, PostingFeeGateway};
use jc_01_token_ledger::{FungibleToken, TokenError};
use parking_lot::Mutex;
use shared_types::entities::{Address, U256};
use std::sync::Arc;
use tracing::{debug, warn};

/// Pulls posting fees from a shared token ledger.
pub struct TokenFeeGateway<T: FungibleToken> {
    token: Arc<Mutex<T>>,
    ledger_address: Address,
}

impl<T: FungibleToken> TokenFeeGateway<T> {
    /// Gateway charging fees to `ledger_address` on `token`.
    pub fn new(token: Arc<Mutex<T>>, ledger_address: Address) -> Self {
        Self {
            token,
            ledger_address,
        }
    }

    /// Shared handle to the underlying token.
    #[must_use]
    pub fn token(&self) -> Arc<Mutex<T>> {
        Arc::clone(&self.token)
    }
}

impl<T: FungibleToken> PostingFeeGateway for TokenFeeGateway<T> {
    fn charge(&self, payer: Address, amount: U256) -> Result<(), FeeError> {
        let mut token = self.token.lock();
        token
            .transfer_from(self.ledger_address, payer, self.ledger_address, amount)
            .map_err(|err| {
                warn!(payer = %payer, amount = %amount, error = %err, "Posting fee refused");
                FeeError::from(err)
            })?;
        debug!(payer = %payer, amount = %amount, "Posting fee transferred");
        Ok(())
    }

    fn recipient(&self) -> Address {
        self.ledger_address
    }

    fn token_address(&self) -> Address {
        self.token.lock().address()
    }
}

impl From<TokenError> for FeeError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InsufficientAllowance {
                required,
                available,
            } => Self::InsufficientAllowance {
                required,
                available,
            },
            TokenError::InsufficientBalance {
                required,
                available,
            } => Self::InsufficientBalance {
                required,
                available,
            },
            other @ TokenError::ZeroAddress { .. } => Self::Rejected(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jc_01_token_ledger::{TokenLedger, TokenMetadata};
    use shared_types::entities::to_base_units;

    const DEPLOYER: Address = Address::new([0x10; 20]);
    const LISTER: Address = Address::new([0x11; 20]);
    const LEDGER: Address = Address::new([0x12; 20]);
    const TOKEN: Address = Address::new([0x13; 20]);

    fn gateway() -> TokenFeeGateway<TokenLedger> {
        let mut token =
            TokenLedger::deploy(TOKEN, TokenMetadata::default(), to_base_units(1_000_000), DEPLOYER);
        token.transfer(DEPLOYER, LISTER, to_base_units(10)).unwrap();
        TokenFeeGateway::new(Arc::new(Mutex::new(token)), LEDGER)
    }

    #[test]
    fn test_charge_requires_allowance() {
        let gateway = gateway();
        let err = gateway.charge(LISTER, to_base_units(1)).unwrap_err();

        assert!(matches!(err, FeeError::InsufficientAllowance { .. }));
        assert_eq!(gateway.token().lock().balance_of(LISTER), to_base_units(10));
    }

    #[test]
    fn test_charge_moves_fee_to_ledger() {
        let gateway = gateway();
        gateway
            .token()
            .lock()
            .approve(LISTER, LEDGER, to_base_units(100))
            .unwrap();

        gateway.charge(LISTER, to_base_units(1)).unwrap();

        let token = gateway.token();
        let token = token.lock();
        assert_eq!(token.balance_of(LISTER), to_base_units(9));
        assert_eq!(token.balance_of(LEDGER), to_base_units(1));
        assert_eq!(token.allowance(LISTER, LEDGER), to_base_units(99));
        assert_eq!(gateway.recipient(), LEDGER);
        assert_eq!(gateway.token_address(), TOKEN);
    }

    #[test]
    fn test_charge_insufficient_balance() {
        let gateway = gateway();
        gateway
            .token()
            .lock()
            .approve(LISTER, LEDGER, to_base_units(100))
            .unwrap();

        let err = gateway.charge(LISTER, to_base_units(11)).unwrap_err();
        assert!(matches!(err, FeeError::InsufficientBalance { .. }));
    }
}

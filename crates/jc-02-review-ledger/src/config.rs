//! Review ledger configuration from environment variables.

use shared_types::entities::{derive_address, to_base_units, Address, U256};
use std::env;
use thiserror::Error;

/// Default posting fee in whole tokens.
pub const DEFAULT_POSTING_FEE_TOKENS: u64 = 1;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidValue {
        /// Variable name.
        var: &'static str,
        /// Parse failure.
        reason: String,
    },

    /// Fee mode is on but no token address was given.
    #[error("fee mode enabled without a token address")]
    MissingTokenAddress,

    /// Fee mode is on but nothing can collect the fee.
    #[error("fee mode enabled without a fee gateway")]
    MissingFeeGateway,

    /// The fee gateway pays into a different token than configured.
    #[error("fee gateway token {actual} does not match configured token {configured}")]
    TokenAddressMismatch {
        /// `token_address` from the configuration.
        configured: Address,
        /// Token the gateway actually charges.
        actual: Address,
    },

    /// An address that must be set is zero.
    #[error("{0} address must not be zero")]
    ZeroAddress(&'static str),
}

/// Review ledger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Charge a posting fee on listing creation.
    pub fee_enabled: bool,
    /// Fee token contract, required when `fee_enabled`.
    pub token_address: Option<Address>,
    /// The ledger's own account: spender of the lister allowance and
    /// recipient of collected fees.
    pub ledger_address: Address,
    /// Fee per listing in token base units.
    pub posting_fee: U256,
    /// Account allowed to authorize listers.
    pub owner: Address,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            fee_enabled: false,
            token_address: None,
            ledger_address: default_ledger_address(),
            posting_fee: to_base_units(DEFAULT_POSTING_FEE_TOKENS),
            owner: Address::ZERO,
        }
    }
}

impl LedgerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `JC_FEE_ENABLED`: Charge the posting fee (default: false)
    /// - `JC_TOKEN_ADDRESS`: Fee token address, hex
    /// - `JC_LEDGER_ADDRESS`: Ledger account, hex (default: derived)
    /// - `JC_POSTING_FEE`: Fee in whole tokens (default: 1)
    /// - `JC_OWNER`: Owner address, hex (default: unset, filled in at genesis)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let fee_enabled = match lookup("JC_FEE_ENABLED") {
            Some(raw) => parse_bool("JC_FEE_ENABLED", &raw)?,
            None => defaults.fee_enabled,
        };

        let token_address = lookup("JC_TOKEN_ADDRESS")
            .map(|raw| parse_address("JC_TOKEN_ADDRESS", &raw))
            .transpose()?;

        let ledger_address = match lookup("JC_LEDGER_ADDRESS") {
            Some(raw) => parse_address("JC_LEDGER_ADDRESS", &raw)?,
            None => defaults.ledger_address,
        };

        let posting_fee = match lookup("JC_POSTING_FEE") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(to_base_units)
                .map_err(|e| ConfigError::InvalidValue {
                    var: "JC_POSTING_FEE",
                    reason: e.to_string(),
                })?,
            None => defaults.posting_fee,
        };

        let owner = match lookup("JC_OWNER") {
            Some(raw) => parse_address("JC_OWNER", &raw)?,
            None => defaults.owner,
        };

        Ok(Self {
            fee_enabled,
            token_address,
            ledger_address,
            posting_fee,
            owner,
        })
    }

    /// Checks the combination of settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.is_zero() {
            return Err(ConfigError::ZeroAddress("owner"));
        }
        if self.ledger_address.is_zero() {
            return Err(ConfigError::ZeroAddress("ledger"));
        }
        if self.fee_enabled {
            match self.token_address {
                None => return Err(ConfigError::MissingTokenAddress),
                Some(token) if token.is_zero() => return Err(ConfigError::ZeroAddress("token")),
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Same settings with `owner` replaced.
    #[must_use]
    pub fn with_owner(mut self, owner: Address) -> Self {
        self.owner = owner;
        self
    }
}

/// Ledger account used when `JC_LEDGER_ADDRESS` is not set: the low 20
/// bytes of `keccak256("jobchain.review-ledger")`.
#[must_use]
pub fn default_ledger_address() -> Address {
    derive_address("jobchain.review-ledger")
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            var,
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}

fn parse_address(var: &'static str, raw: &str) -> Result<Address, ConfigError> {
    Address::from_hex(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        var,
        reason: e.to_string(),
    })
}

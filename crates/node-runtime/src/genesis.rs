//! # Genesis
//!
//! Bootstraps a fresh Jobchain node.
//!
//! ## Initialization Sequence
//!
//! 1. Deploy the posting-fee token, minting the supply to the deployer
//! 2. Fund every genesis lister and approve the ledger as their spender
//! 3. Deploy the review ledger, wired to the token through the fee gateway
//! 4. Authorize the genesis listers as the ledger owner

use std::env;
use std::sync::Arc;

use jc_01_token_ledger::{TokenError, TokenLedger, TokenMetadata};
use jc_02_review_ledger::adapters::TokenFeeGateway;
use jc_02_review_ledger::config::{ConfigError, LedgerConfig};
use jc_02_review_ledger::errors::ReviewLedgerError;
use jc_02_review_ledger::ports::{PostingFeeGateway, ReviewLedgerApi};
use jc_02_review_ledger::service::{ReviewLedgerService, ServiceConfig};
use parking_lot::Mutex;
use shared_bus::InMemoryEventBus;
use shared_types::entities::{derive_address, to_base_units, Address};
use thiserror::Error;
use tracing::info;

/// Review ledger service as wired by the runtime.
pub type LedgerService = ReviewLedgerService<InMemoryEventBus>;

/// Genesis errors.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// Invalid genesis configuration.
    #[error("Invalid genesis configuration: {0}")]
    InvalidConfig(String),

    /// Funding a genesis lister failed.
    #[error("Failed to fund genesis lister: {0}")]
    Funding(#[from] TokenError),

    /// The review ledger rejected its configuration.
    #[error("Failed to deploy review ledger: {0}")]
    Ledger(#[from] ConfigError),

    /// Authorizing a genesis lister failed.
    #[error("Failed to authorize genesis lister: {0}")]
    Authorization(#[from] ReviewLedgerError),
}

/// Genesis configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisConfig {
    /// Account that receives the initial token supply. Also the ledger
    /// owner unless the ledger configuration names one.
    pub deployer: Address,

    /// Initial token supply in whole tokens.
    pub initial_supply: u64,

    /// Listers authorized at genesis.
    pub listers: Vec<Address>,

    /// Whole tokens granted to (and approved for the ledger by) each lister.
    pub lister_grant: u64,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            deployer: derive_address("jobchain.deployer"),
            initial_supply: 1_000_000,
            listers: Vec::new(),
            lister_grant: 100,
        }
    }
}

impl GenesisConfig {
    /// Devnet configuration with two funded listers.
    pub fn devnet() -> Self {
        Self {
            listers: vec![
                derive_address("jobchain.devnet.lister-0"),
                derive_address("jobchain.devnet.lister-1"),
            ],
            ..Default::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `JC_DEPLOYER`: Deployer address, hex
    /// - `JC_INITIAL_SUPPLY`: Token supply in whole tokens (default: 1000000)
    /// - `JC_GENESIS_LISTERS`: Comma-separated lister addresses
    /// - `JC_LISTER_GRANT`: Whole tokens per lister (default: 100)
    pub fn from_env() -> Result<Self, GenesisError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GenesisError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("JC_DEPLOYER") {
            config.deployer = parse_address("JC_DEPLOYER", &raw)?;
        }
        if let Some(raw) = lookup("JC_INITIAL_SUPPLY") {
            config.initial_supply = parse_tokens("JC_INITIAL_SUPPLY", &raw)?;
        }
        if let Some(raw) = lookup("JC_GENESIS_LISTERS") {
            config.listers = raw
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| parse_address("JC_GENESIS_LISTERS", part))
                .collect::<Result<_, _>>()?;
        }
        if let Some(raw) = lookup("JC_LISTER_GRANT") {
            config.lister_grant = parse_tokens("JC_LISTER_GRANT", &raw)?;
        }

        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.deployer.is_zero() {
            return Err(GenesisError::InvalidConfig(
                "Deployer must not be the zero address".to_string(),
            ));
        }

        if self.listers.iter().any(Address::is_zero) {
            return Err(GenesisError::InvalidConfig(
                "Genesis lister must not be the zero address".to_string(),
            ));
        }

        let granted = u128::from(self.lister_grant) * self.listers.len() as u128;
        if granted > u128::from(self.initial_supply) {
            return Err(GenesisError::InvalidConfig(format!(
                "Lister grants ({granted}) exceed initial supply ({})",
                self.initial_supply
            )));
        }

        Ok(())
    }
}

/// Address the genesis fee token is deployed at. A ledger configuration
/// naming any other token fails genesis.
#[must_use]
pub fn token_address() -> Address {
    derive_address("jobchain.token")
}

/// A bootstrapped node.
pub struct Node {
    /// The review ledger.
    pub service: Arc<LedgerService>,
    /// The posting-fee token, shared with the fee gateway.
    pub token: Arc<Mutex<TokenLedger>>,
    /// Bus carrying committed ledger events.
    pub bus: Arc<InMemoryEventBus>,
    /// Ledger configuration after genesis defaults were applied.
    pub ledger_config: LedgerConfig,
}

/// Builds a [`Node`] from genesis and ledger configuration.
pub struct GenesisBuilder {
    genesis: GenesisConfig,
    ledger: LedgerConfig,
    service: ServiceConfig,
}

impl GenesisBuilder {
    /// Create a builder.
    pub fn new(genesis: GenesisConfig, ledger: LedgerConfig) -> Self {
        Self {
            genesis,
            ledger,
            service: ServiceConfig::default(),
        }
    }

    /// Override the service configuration.
    #[must_use]
    pub fn with_service_config(mut self, service: ServiceConfig) -> Self {
        self.service = service;
        self
    }

    /// Run genesis.
    pub async fn build(self) -> Result<Node, GenesisError> {
        let Self {
            genesis,
            mut ledger,
            service,
        } = self;
        genesis.validate()?;

        if ledger.owner.is_zero() {
            ledger.owner = genesis.deployer;
        }
        if ledger.fee_enabled && ledger.token_address.is_none() {
            ledger.token_address = Some(token_address());
        }

        // Step 1: token
        let mut token = TokenLedger::deploy(
            token_address(),
            TokenMetadata::default(),
            to_base_units(genesis.initial_supply),
            genesis.deployer,
        );

        // Step 2: fund and approve listers
        let grant = to_base_units(genesis.lister_grant);
        for lister in &genesis.listers {
            token.transfer(genesis.deployer, *lister, grant)?;
            token.approve(*lister, ledger.ledger_address, grant)?;
        }
        let token = Arc::new(Mutex::new(token));

        // Step 3: review ledger
        let gateway: Arc<dyn PostingFeeGateway> = Arc::new(TokenFeeGateway::new(
            Arc::clone(&token),
            ledger.ledger_address,
        ));
        let bus = Arc::new(InMemoryEventBus::new());
        let ledger_service =
            ReviewLedgerService::from_config(&ledger, Some(gateway), Arc::clone(&bus), service)?;

        // Step 4: authorize listers
        for lister in &genesis.listers {
            ledger_service
                .add_authorized_lister(ledger.owner, *lister)
                .await?;
        }

        info!(
            owner = %ledger.owner,
            listers = genesis.listers.len(),
            fee_enabled = ledger.fee_enabled,
            "Genesis complete"
        );

        Ok(Node {
            service: Arc::new(ledger_service),
            token,
            bus,
            ledger_config: ledger,
        })
    }
}

fn parse_address(var: &'static str, raw: &str) -> Result<Address, GenesisError> {
    Address::from_hex(raw.trim())
        .map_err(|e| GenesisError::InvalidConfig(format!("{var}: {e}")))
}

fn parse_tokens(var: &'static str, raw: &str) -> Result<u64, GenesisError> {
    raw.trim()
        .parse()
        .map_err(|e| GenesisError::InvalidConfig(format!("{var}: {e}")))
}

//! # Posting Fee Gate
//!
//! Listing creation pulls the posting fee from the lister through the
//! token's `transfer_from`, and a failed fee leaves both ledgers untouched.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::integration::fixtures::*;
    use jc_01_token_ledger::{TokenLedger, TokenMetadata};
    use jc_02_review_ledger::prelude::*;
    use node_runtime::{GenesisBuilder, GenesisConfig};
    use parking_lot::Mutex;
    use shared_bus::InMemoryEventBus;
    use shared_types::entities::{to_base_units, Address};

    const LEDGER: Address = Address::new([0xEE; 20]);
    const TOKEN: Address = Address::new([0x70; 20]);

    /// Lister holds 10 tokens and approved the ledger for 100.
    fn fee_service() -> (TestService, Arc<Mutex<TokenLedger>>) {
        let mut token = TokenLedger::deploy(
            TOKEN,
            TokenMetadata::default(),
            to_base_units(1_000_000),
            owner(),
        );
        token
            .approve(lister(), LEDGER, to_base_units(100))
            .unwrap();
        token
            .transfer(owner(), lister(), to_base_units(10))
            .unwrap();
        let token = Arc::new(Mutex::new(token));

        let config = LedgerConfig {
            fee_enabled: true,
            token_address: Some(TOKEN),
            ledger_address: LEDGER,
            ..LedgerConfig::default()
        }
        .with_owner(owner());
        let gateway: Arc<dyn PostingFeeGateway> =
            Arc::new(TokenFeeGateway::new(Arc::clone(&token), LEDGER));

        let service = ReviewLedgerService::from_config(
            &config,
            Some(gateway),
            Arc::new(InMemoryEventBus::new()),
            ServiceConfig {
                check_invariants: true,
            },
        )
        .unwrap();
        (service, token)
    }

    #[tokio::test]
    async fn test_listing_charges_one_token() {
        let (service, token) = fee_service();
        service
            .add_authorized_lister(owner(), lister())
            .await
            .unwrap();

        service
            .create_job_listing(lister(), listing("Company A", "Engineer", "Builds"))
            .await
            .unwrap();

        let token = token.lock();
        assert_eq!(token.balance_of(lister()), to_base_units(9));
        assert_eq!(token.balance_of(LEDGER), to_base_units(1));
        assert_eq!(token.allowance(lister(), LEDGER), to_base_units(99));
    }

    #[tokio::test]
    async fn test_exhausted_balance_blocks_listing() {
        let (service, token) = fee_service();
        service
            .add_authorized_lister(owner(), lister())
            .await
            .unwrap();

        for n in 0..10 {
            service
                .create_job_listing(lister(), listing("Company A", "Engineer", &n.to_string()))
                .await
                .unwrap();
        }

        let err = service
            .create_job_listing(lister(), listing("Company A", "Engineer", "one too many"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewLedgerError::InsufficientBalance { .. }));

        assert_eq!(service.get_job_listings_count().await, 10);
        let token = token.lock();
        assert_eq!(token.balance_of(lister()), to_base_units(0));
        assert_eq!(token.balance_of(LEDGER), to_base_units(10));
        assert_eq!(token.allowance(lister(), LEDGER), to_base_units(90));
    }

    #[tokio::test]
    async fn test_missing_allowance_blocks_listing() {
        let (service, token) = fee_service();
        let stranger = account(7);
        token
            .lock()
            .transfer(owner(), stranger, to_base_units(5))
            .unwrap();
        service
            .add_authorized_lister(owner(), stranger)
            .await
            .unwrap();

        let err = service
            .create_job_listing(stranger, listing("Company A", "Engineer", "Builds"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewLedgerError::InsufficientAllowance { .. }));
        assert_eq!(service.get_job_listings_count().await, 0);
        assert_eq!(token.lock().balance_of(stranger), to_base_units(5));
    }

    #[tokio::test]
    async fn test_rejected_listing_charges_nothing() {
        let (service, token) = fee_service();

        // Not yet authorized
        assert!(service
            .create_job_listing(lister(), listing("Company A", "Engineer", "Builds"))
            .await
            .is_err());

        service
            .add_authorized_lister(owner(), lister())
            .await
            .unwrap();

        // Authorized, but the listing is invalid
        assert!(service
            .create_job_listing(lister(), listing("", "Engineer", "Builds"))
            .await
            .is_err());

        assert_eq!(token.lock().balance_of(lister()), to_base_units(10));
        assert_eq!(service.stats().await.calls_rejected, 2);
    }

    #[tokio::test]
    async fn test_reviews_are_free() {
        let (service, token) = fee_service();
        service
            .add_authorized_lister(owner(), lister())
            .await
            .unwrap();
        service
            .create_job_listing(lister(), listing("Company A", "Engineer", "Builds"))
            .await
            .unwrap();

        service
            .create_review(reviewer(), 0, content("Hash A", "Text A", 5000, 5))
            .await
            .unwrap();
        service
            .submit_review(
                reviewer(),
                "Company Z".to_string(),
                "Engineer".to_string(),
                content("Hash Z", "Text Z", 100, 1),
            )
            .await
            .unwrap();

        assert_eq!(token.lock().balance_of(reviewer()), to_base_units(0));
        assert_eq!(token.lock().balance_of(LEDGER), to_base_units(1));
    }

    #[tokio::test]
    async fn test_genesis_node_collects_fees() {
        let genesis = GenesisConfig {
            deployer: owner(),
            listers: vec![lister()],
            lister_grant: 10,
            ..GenesisConfig::default()
        };
        let ledger = LedgerConfig {
            fee_enabled: true,
            ..LedgerConfig::default()
        };
        let node = GenesisBuilder::new(genesis, ledger).build().await.unwrap();

        assert_eq!(node.service.owner().await, owner());
        assert!(node.service.is_authorized_lister(lister()).await);

        node.service
            .create_job_listing(lister(), listing("Company A", "Engineer", "Builds"))
            .await
            .unwrap();

        let fee_account = node.ledger_config.ledger_address;
        assert_eq!(node.token.lock().balance_of(lister()), to_base_units(9));
        assert_eq!(node.token.lock().balance_of(fee_account), to_base_units(1));
    }
}

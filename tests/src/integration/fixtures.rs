//! Shared accounts and setups for the integration scenarios.

use jc_02_review_ledger::prelude::*;
use shared_bus::InMemoryEventBus;
use shared_types::entities::{keccak256, Address, Hash};

pub type TestService = ReviewLedgerService<InMemoryEventBus>;

/// Deterministic test account `n`. Account 0 owns the ledger.
pub fn account(n: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[0] = 0xA0;
    bytes[19] = n;
    Address::new(bytes)
}

pub fn owner() -> Address {
    account(0)
}

pub fn lister() -> Address {
    account(1)
}

pub fn reviewer() -> Address {
    account(2)
}

/// keccak-256 of a label, as test clients compute review hashes.
pub fn hash_of(label: &str) -> Hash {
    keccak256(label.as_bytes())
}

pub fn listing(company: &str, title: &str, description: &str) -> ListingFields {
    ListingFields::new(company, title, description)
}

pub fn content(label: &str, text: &str, salary: u64, rating: u8) -> ReviewContent {
    ReviewContent::new(hash_of(label), text, salary, rating)
}

/// Service owned by account 0 with account 1 authorized to list.
pub async fn service_with_lister() -> TestService {
    let service = create_test_service(owner());
    service
        .add_authorized_lister(owner(), lister())
        .await
        .unwrap();
    service
}

/// Two listings (Company A, Company B) and three reviews by the reviewer:
/// one on listing 0 (5000) and two on listing 1 (6000, 7000).
pub async fn populated_service() -> TestService {
    let service = service_with_lister().await;
    service
        .create_job_listing(lister(), listing("Company A", "Job Title A", "Description A"))
        .await
        .unwrap();
    service
        .create_job_listing(lister(), listing("Company B", "Job Title A", "Description B"))
        .await
        .unwrap();
    service
        .create_review(reviewer(), 0, content("Hash A", "Text A", 5000, 5))
        .await
        .unwrap();
    service
        .create_review(reviewer(), 1, content("Hash B", "Text B", 6000, 4))
        .await
        .unwrap();
    service
        .create_review(reviewer(), 1, content("Hash C", "Text C", 7000, 3))
        .await
        .unwrap();
    service
}

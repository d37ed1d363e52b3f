//! # Review Ledger Service
//!
//! Async front of the review ledger. Wraps the single [`ReviewLedger`] state
//! object in a write lock so mutations run one at a time to completion, then
//! journals and publishes the events of each committed call in commit order.
//!
//! ## Ordering
//!
//! Events are appended to the journal and published to the bus while the
//! write lock is still held, so journal sequence numbers and bus delivery
//! order both match the order in which calls were applied.

use crate::config::{ConfigError, LedgerConfig};
use crate::domain::entities::{
    AnnotatedReview, JobListing, ListingFields, ReviewContent, SalaryStats,
};
use crate::domain::invariants::{check_all_invariants, InvariantCheckResult};
use crate::domain::ledger::{PostingFee, ReviewLedger};
use crate::errors::ReviewLedgerError;
use crate::events::Receipt;
use crate::ports::inbound::ReviewLedgerApi;
use crate::ports::outbound::PostingFeeGateway;
use crate::SUBSYSTEM_NAME;

use async_trait::async_trait;
use jobchain_telemetry::{
    log_event, log_listing_event, log_review_event, metric_inc, time_operation, CALLS_REJECTED,
    EVENTS_PUBLISHED, FEES_COLLECTED, LISTERS_AUTHORIZED, LISTINGS_CREATED, LISTINGS_DELETED,
    LISTINGS_LIVE, LISTINGS_UPDATED, REVIEWS_LIVE, REVIEW_CHANGES, REVIEW_TEXTS_SET,
};
use shared_bus::events::LedgerEvent;
use shared_bus::publisher::{EventPublisher, InMemoryEventBus};
use shared_types::entities::{Address, Hash, ListingId, ReviewId};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, instrument, warn};

/// Review Ledger Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Re-check domain invariants after every committed call.
    pub check_invariants: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            check_invariants: cfg!(debug_assertions),
        }
    }
}

/// Statistics for the Review Ledger Service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServiceStats {
    /// Mutating calls that committed.
    pub calls_committed: u64,
    /// Mutating calls that failed and changed nothing.
    pub calls_rejected: u64,
    /// Events journaled and published.
    pub events_published: u64,
}

/// One committed event with its position in the total order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// Zero-based, gap-free sequence number.
    pub sequence: u64,
    /// The event.
    pub event: LedgerEvent,
}

struct LedgerState {
    ledger: ReviewLedger,
    journal: Vec<JournalEntry>,
}

impl LedgerState {
    fn record(&mut self, event: LedgerEvent) {
        let sequence = self.journal.len() as u64;
        self.journal.push(JournalEntry { sequence, event });
    }
}

/// The main Review Ledger Service.
///
/// This service:
/// 1. Serializes every mutating call behind one write lock
/// 2. Journals the events of each committed call
/// 3. Publishes them to the event bus
/// 4. Maintains call statistics and metrics
pub struct ReviewLedgerService<P: EventPublisher> {
    /// Service configuration.
    config: ServiceConfig,
    /// Ledger state and event journal.
    state: Arc<RwLock<LedgerState>>,
    /// Event bus.
    bus: Arc<P>,
    /// Service statistics.
    stats: Arc<RwLock<ServiceStats>>,
}

impl<P: EventPublisher> ReviewLedgerService<P> {
    /// Create a service around an existing ledger.
    pub fn new(ledger: ReviewLedger, bus: Arc<P>, config: ServiceConfig) -> Self {
        LISTINGS_LIVE.set(ledger.get_job_listings_count() as f64);
        REVIEWS_LIVE.set(ledger.get_reviews_count() as f64);
        Self {
            config,
            state: Arc::new(RwLock::new(LedgerState {
                ledger,
                journal: Vec::new(),
            })),
            bus,
            stats: Arc::new(RwLock::new(ServiceStats::default())),
        }
    }

    /// Create a service with an empty ledger built from `ledger_config`.
    ///
    /// `gateway` is required when the fee is enabled and ignored otherwise.
    /// It must charge in the token at `ledger_config.token_address`.
    pub fn from_config(
        ledger_config: &LedgerConfig,
        gateway: Option<Arc<dyn PostingFeeGateway>>,
        bus: Arc<P>,
        config: ServiceConfig,
    ) -> Result<Self, ConfigError> {
        ledger_config.validate()?;

        let fee = if ledger_config.fee_enabled {
            let gateway = gateway.ok_or(ConfigError::MissingFeeGateway)?;
            let actual = gateway.token_address();
            if ledger_config.token_address != Some(actual) {
                return Err(ConfigError::TokenAddressMismatch {
                    configured: ledger_config.token_address.unwrap_or_default(),
                    actual,
                });
            }
            Some(PostingFee {
                amount: ledger_config.posting_fee,
                gateway,
            })
        } else {
            None
        };

        log_event!(
            info,
            SUBSYSTEM_NAME,
            "Review ledger deployed",
            owner = %ledger_config.owner,
            ledger_address = %ledger_config.ledger_address,
            fee_enabled = ledger_config.fee_enabled
        );

        Ok(Self::new(
            ReviewLedger::new(ledger_config.owner, fee),
            bus,
            config,
        ))
    }

    /// Get current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// The event bus this service publishes to.
    pub fn bus(&self) -> Arc<P> {
        Arc::clone(&self.bus)
    }

    /// Journal entries with `sequence >= from`, in order.
    pub async fn events_since(&self, from: u64) -> Vec<JournalEntry> {
        let state = self.state.read().await;
        let start = usize::try_from(from)
            .unwrap_or(usize::MAX)
            .min(state.journal.len());
        state.journal[start..].to_vec()
    }

    /// Number of journaled events.
    pub async fn journal_len(&self) -> u64 {
        self.state.read().await.journal.len() as u64
    }

    /// Runs a read-only closure against the ledger.
    pub async fn read<R>(&self, query: impl FnOnce(&ReviewLedger) -> R) -> R {
        let state = self.state.read().await;
        query(&state.ledger)
    }

    /// Applies one mutation under the write lock, then journals, publishes
    /// and records its events before releasing the lock.
    async fn commit<T, F>(
        &self,
        operation: &'static str,
        caller: Address,
        apply: F,
    ) -> Result<Receipt<T>, ReviewLedgerError>
    where
        T: Send,
        F: FnOnce(&mut ReviewLedger) -> Result<Receipt<T>, ReviewLedgerError> + Send,
    {
        let _timer = time_operation(operation);
        let mut state = self.state.write().await;

        let receipt = match apply(&mut state.ledger) {
            Ok(receipt) => receipt,
            Err(err) => {
                drop(state);
                warn!(
                    operation,
                    caller = %caller,
                    error = %err,
                    "Call rejected"
                );
                metric_inc!(CALLS_REJECTED, &[operation, err.kind()]);
                self.stats.write().await.calls_rejected += 1;
                return Err(err);
            }
        };

        let fee_enabled = state.ledger.posting_fee().is_some();
        for event in &receipt.events {
            state.record(event.clone());
            let receivers = self.bus.publish(event.clone()).await;
            debug!(event = event.name(), receivers, "Event published");
            record_event_metrics(event, fee_enabled);
        }

        LISTINGS_LIVE.set(state.ledger.get_job_listings_count() as f64);
        REVIEWS_LIVE.set(state.ledger.get_reviews_count() as f64);

        if self.config.check_invariants {
            if let InvariantCheckResult::Invalid(violations) = check_all_invariants(&state.ledger)
            {
                for violation in &violations {
                    error!(operation, %violation, "Ledger invariant violated");
                }
            }
        }
        drop(state);

        let mut stats = self.stats.write().await;
        stats.calls_committed += 1;
        stats.events_published += receipt.events.len() as u64;
        Ok(receipt)
    }
}

fn record_event_metrics(event: &LedgerEvent, fee_enabled: bool) {
    metric_inc!(EVENTS_PUBLISHED, &[event.name()]);
    match event {
        LedgerEvent::ListerAuthorized { .. } => metric_inc!(LISTERS_AUTHORIZED),
        LedgerEvent::JobListingCreated { .. } => {
            metric_inc!(LISTINGS_CREATED);
            if fee_enabled {
                metric_inc!(FEES_COLLECTED);
            }
        }
        LedgerEvent::JobListingUpdated { .. } => metric_inc!(LISTINGS_UPDATED),
        LedgerEvent::JobListingDeleted {
            removed_reviews, ..
        } => {
            metric_inc!(LISTINGS_DELETED);
            REVIEW_CHANGES
                .with_label_values(&["cascaded"])
                .inc_by(*removed_reviews as f64);
        }
        LedgerEvent::ReviewSubmitted(_) => metric_inc!(REVIEW_CHANGES, &["submitted"]),
        LedgerEvent::ReviewUpdated(_) => metric_inc!(REVIEW_CHANGES, &["updated"]),
        LedgerEvent::ReviewDeleted { .. } => metric_inc!(REVIEW_CHANGES, &["deleted"]),
        LedgerEvent::ReviewTextSet { .. } => metric_inc!(REVIEW_TEXTS_SET),
    }
}

/// Create a service with an empty fee-free ledger and a fresh bus (for
/// testing).
#[must_use]
pub fn create_test_service(owner: Address) -> ReviewLedgerService<InMemoryEventBus> {
    ReviewLedgerService::new(
        ReviewLedger::without_fees(owner),
        Arc::new(InMemoryEventBus::new()),
        ServiceConfig {
            check_invariants: true,
        },
    )
}

// =============================================================================
// ReviewLedgerApi Implementation
// =============================================================================

#[async_trait]
impl<P: EventPublisher> ReviewLedgerApi for ReviewLedgerService<P> {
    #[instrument(skip(self), fields(caller = %caller, lister = %lister))]
    async fn add_authorized_lister(
        &self,
        caller: Address,
        lister: Address,
    ) -> Result<Receipt<bool>, ReviewLedgerError> {
        let receipt = self
            .commit("add_authorized_lister", caller, move |ledger| {
                ledger.add_authorized_lister(caller, lister)
            })
            .await?;
        log_event!(
            info,
            SUBSYSTEM_NAME,
            "Lister authorized",
            lister = %lister,
            newly_added = receipt.output
        );
        Ok(receipt)
    }

    async fn is_authorized_lister(&self, account: Address) -> bool {
        self.read(|ledger| ledger.is_authorized_lister(&account))
            .await
    }

    async fn owner(&self) -> Address {
        self.read(ReviewLedger::owner).await
    }

    #[instrument(skip(self, listing), fields(caller = %caller))]
    async fn create_job_listing(
        &self,
        caller: Address,
        listing: ListingFields,
    ) -> Result<Receipt<ListingId>, ReviewLedgerError> {
        let receipt = self
            .commit("create_job_listing", caller, move |ledger| {
                ledger.create_job_listing(caller, listing)
            })
            .await?;
        log_listing_event!(
            info,
            SUBSYSTEM_NAME,
            "Job listing created",
            receipt.output,
            poster = %caller
        );
        Ok(receipt)
    }

    #[instrument(skip(self, listing), fields(caller = %caller))]
    async fn update_job_listing(
        &self,
        caller: Address,
        listing_id: ListingId,
        listing: ListingFields,
    ) -> Result<Receipt<()>, ReviewLedgerError> {
        let receipt = self
            .commit("update_job_listing", caller, move |ledger| {
                ledger.update_job_listing(listing_id, listing)
            })
            .await?;
        log_listing_event!(info, SUBSYSTEM_NAME, "Job listing updated", listing_id);
        Ok(receipt)
    }

    #[instrument(skip(self), fields(caller = %caller))]
    async fn delete_job_listing(
        &self,
        caller: Address,
        listing_id: ListingId,
    ) -> Result<Receipt<u64>, ReviewLedgerError> {
        let receipt = self
            .commit("delete_job_listing", caller, move |ledger| {
                ledger.delete_job_listing(listing_id)
            })
            .await?;
        log_listing_event!(
            info,
            SUBSYSTEM_NAME,
            "Job listing deleted",
            listing_id,
            removed_reviews = receipt.output
        );
        Ok(receipt)
    }

    async fn get_job_listing(
        &self,
        listing_id: ListingId,
    ) -> Result<JobListing, ReviewLedgerError> {
        self.read(|ledger| ledger.get_job_listing(listing_id).cloned())
            .await
    }

    async fn get_job_listings_count(&self) -> u64 {
        self.read(ReviewLedger::get_job_listings_count).await
    }

    #[instrument(skip(self, content), fields(caller = %caller))]
    async fn create_review(
        &self,
        caller: Address,
        listing_id: ListingId,
        content: ReviewContent,
    ) -> Result<Receipt<ReviewId>, ReviewLedgerError> {
        let receipt = self
            .commit("create_review", caller, move |ledger| {
                ledger.create_review(caller, listing_id, content)
            })
            .await?;
        log_review_event!(
            info,
            SUBSYSTEM_NAME,
            "Review submitted",
            receipt.output,
            listing_id,
            reviewer = %caller
        );
        Ok(receipt)
    }

    #[instrument(skip(self, content), fields(caller = %caller))]
    async fn submit_review(
        &self,
        caller: Address,
        company_name: String,
        job_title: String,
        content: ReviewContent,
    ) -> Result<Receipt<ReviewId>, ReviewLedgerError> {
        let receipt = self
            .commit("submit_review", caller, move |ledger| {
                ledger.submit_review(caller, company_name, job_title, content)
            })
            .await?;
        log_review_event!(
            info,
            SUBSYSTEM_NAME,
            "Review submitted",
            receipt.output,
            reviewer = %caller
        );
        Ok(receipt)
    }

    #[instrument(skip(self, content), fields(caller = %caller))]
    async fn update_review(
        &self,
        caller: Address,
        review_id: ReviewId,
        content: ReviewContent,
    ) -> Result<Receipt<()>, ReviewLedgerError> {
        let receipt = self
            .commit("update_review", caller, move |ledger| {
                ledger.update_review(review_id, content)
            })
            .await?;
        log_review_event!(info, SUBSYSTEM_NAME, "Review updated", review_id);
        Ok(receipt)
    }

    #[instrument(skip(self), fields(caller = %caller))]
    async fn delete_review(
        &self,
        caller: Address,
        review_id: ReviewId,
    ) -> Result<Receipt<()>, ReviewLedgerError> {
        let receipt = self
            .commit("delete_review", caller, move |ledger| {
                ledger.delete_review(review_id)
            })
            .await?;
        log_review_event!(info, SUBSYSTEM_NAME, "Review deleted", review_id);
        Ok(receipt)
    }

    async fn get_review(&self, review_id: ReviewId) -> Result<AnnotatedReview, ReviewLedgerError> {
        self.read(|ledger| ledger.get_review(review_id)).await
    }

    async fn get_reviews_count(&self) -> u64 {
        self.read(ReviewLedger::get_reviews_count).await
    }

    #[instrument(skip(self, review_text), fields(caller = %caller))]
    async fn set_review_text(
        &self,
        caller: Address,
        review_id: ReviewId,
        review_text: String,
    ) -> Result<Receipt<Hash>, ReviewLedgerError> {
        let receipt = self
            .commit("set_review_text", caller, move |ledger| {
                ledger.set_review_text(review_id, review_text)
            })
            .await?;
        log_review_event!(
            info,
            SUBSYSTEM_NAME,
            "Review text set",
            review_id,
            review_hash = %receipt.output
        );
        Ok(receipt)
    }

    async fn get_review_text(&self, review_hash: Hash) -> String {
        self.read(|ledger| ledger.get_review_text(&review_hash).to_string())
            .await
    }

    async fn get_all_reviews_of_job_listing(&self, listing_id: ListingId) -> Vec<AnnotatedReview> {
        self.read(|ledger| ledger.get_all_reviews_of_job_listing(listing_id))
            .await
    }

    async fn get_all_reviews_by_reviewer(&self, reviewer: Address) -> Vec<AnnotatedReview> {
        self.read(|ledger| ledger.get_all_reviews_by_reviewer(&reviewer))
            .await
    }

    async fn get_company_salary_stats(&self, company_name: &str) -> SalaryStats {
        self.read(|ledger| ledger.get_company_salary_stats(company_name))
            .await
    }
}

// =============================================================================
// TESTS
// =============================================================================

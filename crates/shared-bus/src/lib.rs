//! # Shared Bus - Ledger Event Bus
//!
//! Carries every committed review-ledger mutation to interested consumers
//! (indexers, notification relays, the runtime's event log).
//!
//! ## Publication Pattern
//!
//! ```text
//! ┌────────────────┐                    ┌──────────────┐
//! │ Review Ledger  │                    │   Consumer   │
//! │   (service)    │    publish()       │              │
//! │                │ ──────┐            │              │
//! └────────────────┘       │            └──────────────┘
//!                          ▼                    ↑
//!                    ┌──────────────┐          │
//!                    │  Event Bus   │          │
//!                    │              │ ─────────┘
//!                    └──────────────┘  subscribe()
//! ```
//!
//! ## Ordering
//!
//! The ledger publishes while holding its single-writer lock, so every
//! subscriber observes events in commit order.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, LedgerEvent, ReviewRecord};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;

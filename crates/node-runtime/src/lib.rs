//! # Node Runtime Library
//!
//! Genesis and runtime plumbing behind the `node-runtime` binary, exposed
//! for testing.

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod event_log;
pub mod genesis;

pub use event_log::spawn_event_logger;
pub use genesis::{GenesisBuilder, GenesisConfig, GenesisError, LedgerService, Node};

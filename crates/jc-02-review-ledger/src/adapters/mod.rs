//! # Adapters Layer (Outer Hexagon)
//!
//! Connects the review ledger's outbound ports to concrete collaborators.

pub mod fee_gateway;

pub use fee_gateway::TokenFeeGateway;

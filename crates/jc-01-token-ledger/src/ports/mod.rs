//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Port (Inbound)**: `FungibleToken`

pub mod inbound;

pub use inbound::*;

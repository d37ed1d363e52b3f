//! # Jobchain Benchmarks
//!
//! Criterion workloads per subsystem, registered by `benches/ledger_benchmarks.rs`.

pub mod jc_02_review_ledger;

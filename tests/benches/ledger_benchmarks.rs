//! # Jobchain Ledger Benchmarks
//!
//! | Subsystem | Workload | Scales with |
//! |-----------|----------|-------------|
//! | jc-02 Review Ledger | Listing delete + review cascade | listings + reviews |
//! | jc-02 Review Ledger | Company salary statistics | reviews |
//! | jc-02 Review Ledger | Per-listing / per-reviewer queries | reviews |

use criterion::{criterion_group, criterion_main, Criterion};
use jc_tests::benchmarks::jc_02_review_ledger;

fn ledger_benchmarks(c: &mut Criterion) {
    jc_02_review_ledger::register_benchmarks(c);
}

criterion_group!(benches, ledger_benchmarks);
criterion_main!(benches);

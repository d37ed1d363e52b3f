//! # JC-02 Review Ledger Benchmarks
//!
//! Workloads whose cost grows with ledger size:
//! - Listing deletion: shift-down of listings plus the review cascade
//! - Salary statistics: full scan of the review store
//! - Per-listing and per-reviewer queries

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use jc_02_review_ledger::domain::entities::{ListingFields, ReviewContent};
use jc_02_review_ledger::domain::ReviewLedger;
use rand::Rng;
use shared_types::entities::Address;
use std::time::Duration;

const OWNER: Address = Address::new([0xA0; 20]);
const LISTER: Address = Address::new([0xA1; 20]);

fn reviewer(n: u8) -> Address {
    Address::new([n; 20])
}

/// Ledger with `listings` listings over ten companies and `reviews_per`
/// random reviews on each.
fn populated_ledger(listings: u64, reviews_per: u64) -> ReviewLedger {
    let mut rng = rand::thread_rng();
    let mut ledger = ReviewLedger::without_fees(OWNER);
    ledger
        .add_authorized_lister(OWNER, LISTER)
        .expect("owner authorizes");

    for listing_id in 0..listings {
        ledger
            .create_job_listing(
                LISTER,
                ListingFields::new(
                    format!("Company {}", listing_id % 10),
                    "Engineer",
                    "Benchmark listing",
                ),
            )
            .expect("valid listing");
        for n in 0..reviews_per {
            let content = ReviewContent::hashed(
                format!("review {listing_id}-{n}"),
                rng.gen_range(30_000..200_000),
                rng.gen_range(1..=5),
            );
            ledger
                .create_review(reviewer(rng.gen_range(1..=16)), listing_id, content)
                .expect("valid review");
        }
    }
    ledger
}

pub fn bench_delete_listing_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("jc-02-delete-listing");
    group.measurement_time(Duration::from_secs(10));

    for listings in [100u64, 1_000] {
        let ledger = populated_ledger(listings, 5);
        group.throughput(Throughput::Elements(ledger.get_reviews_count()));
        group.bench_with_input(
            BenchmarkId::new("delete_first_listing", listings),
            &ledger,
            |b, ledger| {
                b.iter_batched(
                    || ledger.clone(),
                    |mut ledger| black_box(ledger.delete_job_listing(0).expect("listing exists")),
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

pub fn bench_salary_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("jc-02-salary-stats");

    for listings in [100u64, 1_000] {
        let ledger = populated_ledger(listings, 5);
        group.throughput(Throughput::Elements(ledger.get_reviews_count()));
        group.bench_with_input(
            BenchmarkId::new("company_salary_stats", listings),
            &ledger,
            |b, ledger| b.iter(|| black_box(ledger.get_company_salary_stats("Company 3"))),
        );
    }

    group.finish();
}

pub fn bench_review_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("jc-02-review-queries");
    let ledger = populated_ledger(1_000, 5);

    group.bench_function("reviews_of_listing", |b| {
        b.iter(|| black_box(ledger.get_all_reviews_of_job_listing(500)))
    });
    group.bench_function("reviews_by_reviewer", |b| {
        b.iter(|| black_box(ledger.get_all_reviews_by_reviewer(&reviewer(7))))
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_delete_listing_cascade(c);
    bench_salary_stats(c);
    bench_review_queries(c);
}

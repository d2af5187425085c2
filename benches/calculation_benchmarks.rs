//! Performance benchmarks for the Net Pay Calculation Engine.
//!
//! The calculation is a pure decimal transformation; these benchmarks
//! track its cost for a single declaration and for batches.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use netpay_engine::calculation::compute_net;
use netpay_engine::config::{ConfigLoader, RateTable};
use netpay_engine::models::{CompensationInput, MaritalStatus};

fn load_table() -> RateTable {
    let loader = ConfigLoader::load("./config/fr_paye").expect("Failed to load config");
    loader
        .table_for(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        .expect("No rate table for 2025")
        .clone()
}

fn create_input(gross_cents: i64) -> CompensationInput {
    CompensationInput {
        gross_base: Decimal::new(gross_cents, 2),
        bonuses: Decimal::from_str("250.00").unwrap(),
        allowances: Decimal::ZERO,
        benefits_in_kind: Decimal::ZERO,
        overtime_pay: Decimal::from_str("120.50").unwrap(),
        marital_status: MaritalStatus::Married,
        household_shares: Decimal::from_str("2.5").unwrap(),
    }
}

fn bench_single_calculation(c: &mut Criterion) {
    let table = load_table();
    let input = create_input(300_000);

    c.bench_function("single_calculation", |b| {
        b.iter(|| compute_net(black_box(&input), black_box(&table)))
    });
}

fn bench_batch_calculations(c: &mut Criterion) {
    let table = load_table();

    let mut group = c.benchmark_group("batch_calculations");
    for batch_size in [100usize, 1000] {
        let inputs: Vec<CompensationInput> = (0..batch_size)
            .map(|i| create_input(100_000 + (i as i64) * 1_375))
            .collect();

        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    for input in inputs {
                        black_box(compute_net(black_box(input), black_box(&table)));
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_calculation, bench_batch_calculations);
criterion_main!(benches);

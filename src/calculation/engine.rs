//! The net pay calculation entry point.
//!
//! This module composes the ordered stages into the single operation
//! exposed to callers: [`compute_net`].

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::RateTable;
use crate::models::{AuditTrace, AuditWarning, CalculationResult, CompensationInput};

use super::contributions::calculate_contributions;
use super::gross_aggregation::aggregate_gross;
use super::income_tax::calculate_income_tax;
use super::round_currency;
use super::withholding::calculate_withholding_rate;

/// Computes net take-home pay from a gross compensation declaration.
///
/// The calculation runs three ordered stages over the injected rate
/// table: gross aggregation, social contribution deduction, and the
/// progressive household-adjusted income tax, then derives the overall
/// withholding rate. It is a pure, synchronous transformation with no
/// shared state between calls and never fails on well-formed numeric
/// input; degenerate values (non-positive gross, zero shares) produce
/// guarded zero results and an audit warning instead of a fault.
///
/// # Example
///
/// ```no_run
/// use netpay_engine::calculation::compute_net;
/// use netpay_engine::config::ConfigLoader;
/// use netpay_engine::models::CompensationInput;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/fr_paye").unwrap();
/// let table = loader
///     .table_for(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
///     .unwrap();
///
/// let input: CompensationInput =
///     serde_json::from_str(r#"{ "gross_base": "3000.00" }"#).unwrap();
/// let result = compute_net(&input, table);
/// println!("Net pay: {}", result.net_pay);
/// ```
pub fn compute_net(input: &CompensationInput, table: &RateTable) -> CalculationResult {
    let start_time = Instant::now();
    let calculation_id = Uuid::new_v4();
    let mut steps = Vec::new();
    let mut warnings = Vec::new();

    let gross = aggregate_gross(input, 1);
    let gross_total = gross.gross_total;
    steps.push(gross.audit_step);
    debug!(calculation_id = %calculation_id, gross_total = %gross_total, "Gross aggregated");

    if gross_total <= Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NON_POSITIVE_GROSS".to_string(),
            message: format!(
                "Gross total {} is not positive; deduction lines degrade to guarded values",
                gross_total
            ),
            severity: "medium".to_string(),
        });
    }

    let contributions = calculate_contributions(gross_total, table, 2);
    let breakdown = contributions.breakdown;
    steps.push(contributions.audit_step);
    debug!(
        calculation_id = %calculation_id,
        total_deductible = %breakdown.total_deductible,
        "Contributions deducted"
    );

    let taxable_net = round_currency(gross_total - breakdown.total_deductible);

    let tax = calculate_income_tax(taxable_net, input.household_shares, table, 3);
    let income_tax = tax.income_tax;
    steps.push(tax.audit_step);

    let net_pay = taxable_net - income_tax;

    let withholding =
        calculate_withholding_rate(gross_total, breakdown.total_deductible + income_tax, 4);
    steps.push(withholding.audit_step);

    let duration = start_time.elapsed();
    info!(
        calculation_id = %calculation_id,
        gross_total = %gross_total,
        net_pay = %net_pay,
        duration_us = duration.as_micros(),
        "Calculation completed"
    );

    CalculationResult {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        marital_status: input.marital_status,
        household_shares: input.household_shares,
        gross_total: round_currency(gross_total),
        contributions: breakdown,
        taxable_net,
        income_tax,
        net_pay,
        withholding_rate: withholding.withholding_rate,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: duration.as_micros() as u64,
        },
    }
}

//! Property tests for the Net Pay Calculation Engine.
//!
//! These tests check the structural properties of the calculation:
//! monotonicity of net pay in gross, the household-share quotient effect,
//! per-line rounding stability, and bracket continuity.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use netpay_engine::calculation::{calculate_income_tax, compute_net, per_share_tax};
use netpay_engine::config::{RateTable, TaxBracket};
use netpay_engine::models::{CompensationInput, MaritalStatus};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn test_table() -> RateTable {
    RateTable {
        effective_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        health_rate: dec("0.0075"),
        unemployment_rate: dec("0.024"),
        base_retirement_rate: dec("0.0690"),
        complementary_retirement_rate: dec("0.0387"),
        leviable_fraction: dec("0.9825"),
        deductible_levy_rate: dec("0.068"),
        non_deductible_levy_rate: dec("0.024"),
        debt_reduction_rate: dec("0.005"),
        contribution_ceiling: dec("15456.00"),
        brackets: vec![
            TaxBracket {
                threshold: dec("916.67"),
                rate: dec("0.11"),
            },
            TaxBracket {
                threshold: dec("2291.67"),
                rate: dec("0.30"),
            },
            TaxBracket {
                threshold: dec("6458.33"),
                rate: dec("0.41"),
            },
            TaxBracket {
                threshold: dec("14166.67"),
                rate: dec("0.45"),
            },
        ],
    }
}

fn input_with_gross(gross: Decimal, shares: Decimal) -> CompensationInput {
    CompensationInput {
        gross_base: gross,
        bonuses: Decimal::ZERO,
        allowances: Decimal::ZERO,
        benefits_in_kind: Decimal::ZERO,
        overtime_pay: Decimal::ZERO,
        marital_status: MaritalStatus::Single,
        household_shares: shares,
    }
}

proptest! {
    /// Increasing gross by 100.00 never decreases net pay. The increment
    /// is large enough that the effect dominates per-line rounding.
    #[test]
    fn net_pay_monotone_in_gross(cents in 0i64..=2_000_000) {
        let table = test_table();
        let gross = Decimal::new(cents, 2);

        let lower = compute_net(&input_with_gross(gross, Decimal::ONE), &table);
        let higher = compute_net(&input_with_gross(gross + dec("100.00"), Decimal::ONE), &table);

        prop_assert!(higher.net_pay >= lower.net_pay);
    }

    /// Re-summing the rounded stored lines reproduces the stored total
    /// exactly.
    #[test]
    fn total_contributions_reproduce_from_rounded_lines(cents in 0i64..=5_000_000) {
        let table = test_table();
        let gross = Decimal::new(cents, 2);

        let result = compute_net(&input_with_gross(gross, Decimal::ONE), &table);
        let b = &result.contributions;

        prop_assert_eq!(
            b.health + b.unemployment + b.retirement + b.social_levy.deducted(),
            b.total_deductible
        );
    }

    /// net_pay <= taxable_net <= gross_total for non-negative inputs.
    #[test]
    fn ordering_invariant_holds(cents in 0i64..=5_000_000, shares_halves in 0u32..=10) {
        let table = test_table();
        let gross = Decimal::new(cents, 2);
        let shares = Decimal::new(shares_halves as i64, 0) / Decimal::TWO;

        let result = compute_net(&input_with_gross(gross, shares), &table);

        prop_assert!(result.net_pay <= result.taxable_net);
        prop_assert!(result.taxable_net <= result.gross_total);
    }

    /// Doubling household shares never increases total tax for a fixed
    /// taxable income (quotient effect). Whole-euro incomes keep the
    /// per-share division exact.
    #[test]
    fn doubling_shares_never_increases_tax(euros in 0i64..=50_000) {
        let table = test_table();
        let taxable = Decimal::new(euros, 0);

        let one = calculate_income_tax(taxable, Decimal::ONE, &table, 1).income_tax;
        let two = calculate_income_tax(taxable, Decimal::TWO, &table, 1).income_tax;

        prop_assert!(two <= one);
    }

    /// The withholding rate stays within [0, 100) for positive gross.
    #[test]
    fn withholding_rate_bounded(cents in 1i64..=5_000_000) {
        let table = test_table();
        let gross = Decimal::new(cents, 2);

        let result = compute_net(&input_with_gross(gross, Decimal::ONE), &table);

        prop_assert!(result.withholding_rate >= Decimal::ZERO);
        prop_assert!(result.withholding_rate < Decimal::ONE_HUNDRED);
    }
}

/// Per-share tax is continuous at every bracket threshold: one extra cent
/// is taxed at the next bracket's marginal rate only.
#[test]
fn test_continuity_at_every_threshold() {
    let table = test_table();
    let cent = dec("0.01");

    for bracket in &table.brackets {
        let at = per_share_tax(bracket.threshold, &table.brackets);
        let above = per_share_tax(bracket.threshold + cent, &table.brackets);

        assert_eq!(above - at, cent * bracket.rate, "threshold {}", bracket.threshold);
    }
}

/// Per-share tax is non-decreasing in income.
#[test]
fn test_per_share_tax_non_decreasing() {
    let table = test_table();
    let mut previous = Decimal::ZERO;
    let mut income = Decimal::ZERO;
    let step = dec("250.00");

    for _ in 0..100 {
        income += step;
        let tax = per_share_tax(income, &table.brackets);
        assert!(tax >= previous, "tax decreased at income {}", income);
        previous = tax;
    }
}

//! Progressive income tax computation with household adjustment.
//!
//! This module implements the quotient familial: taxable income is
//! divided by the household shares, run through the marginal bracket
//! schedule, and the per-share tax is multiplied back by the shares.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{RateTable, TaxBracket};
use crate::models::AuditStep;

use super::round_currency;

/// The result of the income tax stage, including the tax and audit step.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The computed income tax.
    pub income_tax: Decimal,
    /// The audit step recording this stage.
    pub audit_step: AuditStep,
}

/// Computes the marginal tax on a per-share income.
///
/// Walks the ordered bracket list, taxing the portion of income that
/// falls strictly above each threshold and at or below the next. Income
/// at or below the first threshold is untaxed; income above the last
/// threshold is taxed at the last rate with no upper bound. Per-bracket
/// amounts are not independently rounded.
///
/// # Example
///
/// ```
/// use netpay_engine::calculation::per_share_tax;
/// use netpay_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let brackets = vec![
///     TaxBracket {
///         threshold: Decimal::from_str("916.67").unwrap(),
///         rate: Decimal::from_str("0.11").unwrap(),
///     },
///     TaxBracket {
///         threshold: Decimal::from_str("2291.67").unwrap(),
///         rate: Decimal::from_str("0.30").unwrap(),
///     },
/// ];
///
/// // (2291.67 - 916.67) * 0.11 = 151.25
/// let tax = per_share_tax(Decimal::from_str("2291.67").unwrap(), &brackets);
/// assert_eq!(tax, Decimal::from_str("151.2500").unwrap());
/// ```
pub fn per_share_tax(per_share_income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut tax = Decimal::ZERO;

    for (i, bracket) in brackets.iter().enumerate() {
        if per_share_income <= bracket.threshold {
            break;
        }
        let upper = brackets
            .get(i + 1)
            .map(|b| b.threshold)
            .unwrap_or(per_share_income);
        tax += (per_share_income.min(upper) - bracket.threshold) * bracket.rate;
    }

    tax
}

/// Computes the income tax for a taxable net and household shares.
///
/// Non-positive taxable income or shares yield zero tax rather than a
/// fault. The per-share income is the taxable net divided by the shares,
/// rounded to 2 decimals (round-half-up); the total tax is the per-share
/// tax multiplied back by the shares and rounded to 2 decimals at that
/// final step only.
///
/// # Arguments
///
/// * `taxable_net` - Income after deductible contributions
/// * `household_shares` - The quotient familial divisor
/// * `table` - The rate table carrying the bracket schedule
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_income_tax(
    taxable_net: Decimal,
    household_shares: Decimal,
    table: &RateTable,
    step_number: u32,
) -> IncomeTaxResult {
    if taxable_net <= Decimal::ZERO || household_shares <= Decimal::ZERO {
        let audit_step = AuditStep {
            step_number,
            rule_id: "income_tax".to_string(),
            rule_name: "Progressive Income Tax".to_string(),
            reference: "CGI 197".to_string(),
            input: serde_json::json!({
                "taxable_net": taxable_net.to_string(),
                "household_shares": household_shares.to_string(),
            }),
            output: serde_json::json!({
                "income_tax": "0",
            }),
            reasoning: "Non-positive taxable income or household shares, no tax due".to_string(),
        };
        return IncomeTaxResult {
            income_tax: Decimal::ZERO,
            audit_step,
        };
    }

    let per_share_income = (taxable_net / household_shares)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let share_tax = per_share_tax(per_share_income, &table.brackets);
    let income_tax = round_currency(share_tax * household_shares);

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Progressive Income Tax".to_string(),
        reference: "CGI 197".to_string(),
        input: serde_json::json!({
            "taxable_net": taxable_net.to_string(),
            "household_shares": household_shares.to_string(),
        }),
        output: serde_json::json!({
            "per_share_income": per_share_income.to_string(),
            "per_share_tax": share_tax.normalize().to_string(),
            "income_tax": income_tax.to_string(),
        }),
        reasoning: format!(
            "Per-share income {} taxed {} across {} brackets, x {} shares = {}",
            per_share_income,
            share_tax.normalize(),
            table.brackets.len(),
            household_shares.normalize(),
            income_tax
        ),
    };

    IncomeTaxResult {
        income_tax,
        audit_step,
    }
}

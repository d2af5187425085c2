//! Withholding rate derivation.
//!
//! This module derives the overall withholding percentage: the ratio of
//! everything taken from the payslip (contributions plus income tax) to
//! the total gross.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::AuditStep;

use super::round_currency;

/// The result of the withholding stage, including the rate and audit step.
#[derive(Debug, Clone)]
pub struct WithholdingResult {
    /// The withholding rate as a percentage, 2 decimals.
    pub withholding_rate: Decimal,
    /// The audit step recording this stage.
    pub audit_step: AuditStep,
}

/// Computes the withholding rate for a calculation.
///
/// `(total_deducted / gross_total) * 100`, with the division carried at
/// 4-decimal precision (round-half-up) and the percentage rounded to 2
/// decimals. A non-positive gross yields a zero rate rather than a
/// division fault.
///
/// # Arguments
///
/// * `gross_total` - The total gross from the aggregation stage
/// * `total_deducted` - Deductible contributions plus income tax
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_withholding_rate(
    gross_total: Decimal,
    total_deducted: Decimal,
    step_number: u32,
) -> WithholdingResult {
    let withholding_rate = if gross_total > Decimal::ZERO {
        let ratio = (total_deducted / gross_total)
            .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
        round_currency(ratio * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "withholding_rate".to_string(),
        rule_name: "Withholding Rate".to_string(),
        reference: "CGI 204A".to_string(),
        input: serde_json::json!({
            "gross_total": gross_total.to_string(),
            "total_deducted": total_deducted.to_string(),
        }),
        output: serde_json::json!({
            "withholding_rate": withholding_rate.to_string(),
        }),
        reasoning: if gross_total > Decimal::ZERO {
            format!(
                "{} / {} x 100 = {}%",
                total_deducted.normalize(),
                gross_total.normalize(),
                withholding_rate.normalize()
            )
        } else {
            "Non-positive gross, withholding rate is zero".to_string()
        },
    };

    WithholdingResult {
        withholding_rate,
        audit_step,
    }
}

//! Gross aggregation functionality.
//!
//! This module provides the first calculation stage: summing the base
//! gross with all additive compensation components at full precision.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CompensationInput};

/// The result of gross aggregation, including the total and audit step.
#[derive(Debug, Clone)]
pub struct GrossAggregationResult {
    /// The total gross compensation.
    pub gross_total: Decimal,
    /// The audit step recording this aggregation.
    pub audit_step: AuditStep,
}

/// Aggregates the total gross from a compensation declaration.
///
/// `gross_total = gross_base + bonuses + allowances + benefits_in_kind +
/// overtime_pay`, with absent components already defaulted to zero by the
/// input model. No rounding is applied at this stage.
///
/// # Arguments
///
/// * `input` - The compensation declaration
/// * `step_number` - The step number for audit trail sequencing
pub fn aggregate_gross(input: &CompensationInput, step_number: u32) -> GrossAggregationResult {
    let gross_total = input.gross_total();

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_aggregation".to_string(),
        rule_name: "Gross Aggregation".to_string(),
        reference: "C. trav. L3242-1".to_string(),
        input: serde_json::json!({
            "gross_base": input.gross_base.to_string(),
            "bonuses": input.bonuses.to_string(),
            "allowances": input.allowances.to_string(),
            "benefits_in_kind": input.benefits_in_kind.to_string(),
            "overtime_pay": input.overtime_pay.to_string(),
        }),
        output: serde_json::json!({
            "gross_total": gross_total.to_string(),
        }),
        reasoning: format!(
            "{} + {} + {} + {} + {} = {}",
            input.gross_base.normalize(),
            input.bonuses.normalize(),
            input.allowances.normalize(),
            input.benefits_in_kind.normalize(),
            input.overtime_pay.normalize(),
            gross_total.normalize()
        ),
    };

    GrossAggregationResult {
        gross_total,
        audit_step,
    }
}

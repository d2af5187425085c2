//! Social contribution deduction functionality.
//!
//! This module computes the four employee-side contribution lines from
//! the total gross and the injected rate table: health, unemployment,
//! retirement, and the combined social levy (CSG/CRDS-equivalent).

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{AuditStep, ContributionBreakdown, SocialLevy};

use super::round_currency;

/// The result of the contribution stage, including the breakdown and audit step.
#[derive(Debug, Clone)]
pub struct ContributionResult {
    /// The computed contribution lines.
    pub breakdown: ContributionBreakdown,
    /// The audit step recording this stage.
    pub audit_step: AuditStep,
}

/// Computes the social contribution lines for a total gross.
///
/// Each line is rounded to 2 decimals (round-half-up) independently
/// before being combined:
///
/// * health: `gross_total * health_rate`
/// * unemployment: `min(gross_total, ceiling) * unemployment_rate`
/// * retirement: `min(gross_total, ceiling) * base_retirement_rate +
///   gross_total * complementary_retirement_rate`, summed then rounded
/// * social levy: three sub-parts of `gross_total * leviable_fraction`,
///   each at its own rate
///
/// The total subtracted to reach taxable net includes only the
/// *deductible* levy sub-part and the debt-reduction sub-part. The
/// non-deductible sub-part is retained in the breakdown but never enters
/// the subtraction.
///
/// # Arguments
///
/// * `gross_total` - The total gross from the aggregation stage
/// * `table` - The rate table for the effective period
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_contributions(
    gross_total: Decimal,
    table: &RateTable,
    step_number: u32,
) -> ContributionResult {
    let capped_base = gross_total.min(table.contribution_ceiling);

    let health = round_currency(gross_total * table.health_rate);
    let unemployment = round_currency(capped_base * table.unemployment_rate);
    let retirement = round_currency(
        capped_base * table.base_retirement_rate
            + gross_total * table.complementary_retirement_rate,
    );

    let leviable_base = gross_total * table.leviable_fraction;
    let social_levy = SocialLevy {
        deductible: round_currency(leviable_base * table.deductible_levy_rate),
        non_deductible: round_currency(leviable_base * table.non_deductible_levy_rate),
        debt_reduction: round_currency(leviable_base * table.debt_reduction_rate),
    };

    // The non-deductible levy sub-part is excluded here. Policy rule,
    // not an oversight: it is reported on the payslip but stays inside
    // taxable income.
    let total_deductible = health + unemployment + retirement + social_levy.deducted();

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_contributions".to_string(),
        rule_name: "Social Contribution Deduction".to_string(),
        reference: "CSS L241-1, L136-8".to_string(),
        input: serde_json::json!({
            "gross_total": gross_total.to_string(),
            "capped_base": capped_base.to_string(),
            "leviable_base": leviable_base.to_string(),
        }),
        output: serde_json::json!({
            "health": health.to_string(),
            "unemployment": unemployment.to_string(),
            "retirement": retirement.to_string(),
            "levy_deductible": social_levy.deductible.to_string(),
            "levy_non_deductible": social_levy.non_deductible.to_string(),
            "levy_debt_reduction": social_levy.debt_reduction.to_string(),
            "total_deductible": total_deductible.to_string(),
        }),
        reasoning: format!(
            "health {} + unemployment {} + retirement {} + deductible levy {} + debt reduction {} = {} (non-deductible levy {} reported only)",
            health,
            unemployment,
            retirement,
            social_levy.deductible,
            social_levy.debt_reduction,
            total_deductible,
            social_levy.non_deductible
        ),
    };

    ContributionResult {
        breakdown: ContributionBreakdown {
            health,
            unemployment,
            retirement,
            social_levy,
            total_deductible,
        },
        audit_step,
    }
}

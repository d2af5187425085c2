//! Calculation result models for the Net Pay Calculation Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a net pay calculation,
//! including the contribution breakdown, tax, totals, and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MaritalStatus;

/// Breakdown of the combined social levy (CSG/CRDS-equivalent).
///
/// The levy is computed on a leviable fraction of gross and split into
/// three sub-parts with their own rates. Only the deductible sub-part and
/// the debt-reduction sub-part are subtracted to reach taxable net; the
/// non-deductible sub-part is retained for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLevy {
    /// The deductible sub-part (CSG déductible).
    pub deductible: Decimal,
    /// The non-deductible sub-part (CSG non déductible). Reported only,
    /// never subtracted from taxable income.
    pub non_deductible: Decimal,
    /// The flat debt-reduction sub-part (CRDS).
    pub debt_reduction: Decimal,
}

impl SocialLevy {
    /// Returns the combined levy line: all three sub-parts summed.
    pub fn combined(&self) -> Decimal {
        self.deductible + self.non_deductible + self.debt_reduction
    }

    /// Returns the portion of the levy that reduces taxable income.
    pub fn deducted(&self) -> Decimal {
        self.deductible + self.debt_reduction
    }
}

/// The social contribution lines computed from the total gross.
///
/// Each line is rounded to 2 decimals (round-half-up) independently
/// before being combined, so `total_deductible` always reproduces from
/// the stored lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBreakdown {
    /// Health insurance contribution (full gross base).
    pub health: Decimal,
    /// Unemployment insurance contribution (capped base).
    pub unemployment: Decimal,
    /// Retirement contribution: capped base part plus complementary part.
    pub retirement: Decimal,
    /// The combined social levy with its three sub-parts.
    pub social_levy: SocialLevy,
    /// The amount subtracted from gross to reach taxable net: health +
    /// unemployment + retirement + deductible levy + debt reduction.
    pub total_deductible: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute article for this rule.
    pub reference: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate degenerate inputs that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a net pay calculation.
///
/// All monetary fields are rounded to 2 decimals. For non-negative inputs
/// the invariant `net_pay <= taxable_net <= gross_total` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Marital status carried through from the declaration.
    pub marital_status: MaritalStatus,
    /// Household shares used for the quotient familial.
    pub household_shares: Decimal,
    /// Total gross: base plus all additive components.
    pub gross_total: Decimal,
    /// The social contribution lines.
    pub contributions: ContributionBreakdown,
    /// Income remaining after deductible contributions, before income tax.
    pub taxable_net: Decimal,
    /// Income tax from the progressive household-adjusted schedule.
    pub income_tax: Decimal,
    /// Net take-home pay: taxable net minus income tax.
    pub net_pay: Decimal,
    /// Ratio of total deductions to gross, as a percentage.
    pub withholding_rate: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_levy() -> SocialLevy {
        SocialLevy {
            deductible: dec("200.43"),
            non_deductible: dec("70.74"),
            debt_reduction: dec("14.74"),
        }
    }

    #[test]
    fn test_social_levy_combined_sums_all_sub_parts() {
        assert_eq!(sample_levy().combined(), dec("285.91"));
    }

    #[test]
    fn test_social_levy_deducted_excludes_non_deductible() {
        assert_eq!(sample_levy().deducted(), dec("215.17"));
    }

    /// Total reproduces exactly from the rounded stored lines.
    #[test]
    fn test_total_deductible_reproduces_from_lines() {
        let breakdown = ContributionBreakdown {
            health: dec("22.50"),
            unemployment: dec("72.00"),
            retirement: dec("323.10"),
            social_levy: sample_levy(),
            total_deductible: dec("632.77"),
        };

        let resummed = breakdown.health
            + breakdown.unemployment
            + breakdown.retirement
            + breakdown.social_levy.deducted();
        assert_eq!(resummed, breakdown.total_deductible);
    }

    #[test]
    fn test_contribution_breakdown_serialization_round_trip() {
        let breakdown = ContributionBreakdown {
            health: dec("22.50"),
            unemployment: dec("72.00"),
            retirement: dec("323.10"),
            social_levy: sample_levy(),
            total_deductible: dec("632.77"),
        };

        let json = serde_json::to_string(&breakdown).unwrap();
        let back: ContributionBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, breakdown);
    }

    #[test]
    fn test_decimal_fields_serialize_as_strings() {
        let levy = sample_levy();
        let json = serde_json::to_value(&levy).unwrap();
        assert_eq!(json["deductible"], "200.43");
        assert_eq!(json["debt_reduction"], "14.74");
    }
}

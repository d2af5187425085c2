//! Compensation input model and related types.
//!
//! This module defines the caller-supplied declaration that a calculation
//! is performed on. The input is immutable for the duration of a call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Marital status of the declarant.
///
/// Carried through to the result for record-keeping; it does not enter
/// the calculation itself (household composition is expressed by
/// [`CompensationInput::household_shares`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Single.
    #[default]
    Single,
    /// Married.
    Married,
    /// Civil union (PACS).
    CivilUnion,
    /// Divorced.
    Divorced,
    /// Widowed.
    Widowed,
}

impl MaritalStatus {
    /// Returns a display label for the status.
    pub fn label(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::CivilUnion => "Civil union",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }
}

/// A gross compensation declaration.
///
/// All optional monetary components default to zero when absent, so a
/// minimal declaration only carries `gross_base`.
///
/// # Example
///
/// ```
/// use netpay_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input: CompensationInput =
///     serde_json::from_str(r#"{ "gross_base": "3000.00" }"#).unwrap();
/// assert_eq!(input.gross_total(), Decimal::from_str("3000.00").unwrap());
/// assert_eq!(input.household_shares, Decimal::ONE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// The base gross salary. Expected strictly positive by
    /// [`CompensationInput::validate`]; the engine itself degrades
    /// gracefully on non-positive values.
    pub gross_base: Decimal,
    /// Bonuses (primes).
    #[serde(default)]
    pub bonuses: Decimal,
    /// Allowances (indemnités).
    #[serde(default)]
    pub allowances: Decimal,
    /// Benefits in kind (avantages en nature).
    #[serde(default)]
    pub benefits_in_kind: Decimal,
    /// Overtime pay (heures supplémentaires).
    #[serde(default)]
    pub overtime_pay: Decimal,
    /// Marital status, for record-keeping only.
    #[serde(default)]
    pub marital_status: MaritalStatus,
    /// Household shares (quotient familial divisor), default 1.
    #[serde(default = "default_household_shares")]
    pub household_shares: Decimal,
}

fn default_household_shares() -> Decimal {
    Decimal::ONE
}

impl CompensationInput {
    /// Returns the total gross: base plus all additive components.
    ///
    /// Full-precision decimal addition, no rounding.
    pub fn gross_total(&self) -> Decimal {
        self.gross_base + self.bonuses + self.allowances + self.benefits_in_kind + self.overtime_pay
    }

    /// Validates the declaration at the presentation boundary.
    ///
    /// The calculation is total on its numeric domain and never rejects an
    /// input; callers that want to surface business-rule violations to the
    /// user should call this before requesting a calculation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCompensation` if `gross_base` is not strictly
    /// positive, if any additive component is negative, or if
    /// `household_shares` is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.gross_base <= Decimal::ZERO {
            return Err(EngineError::InvalidCompensation {
                field: "gross_base".to_string(),
                message: "must be strictly positive".to_string(),
            });
        }

        let components = [
            ("bonuses", self.bonuses),
            ("allowances", self.allowances),
            ("benefits_in_kind", self.benefits_in_kind),
            ("overtime_pay", self.overtime_pay),
        ];
        for (field, value) in components {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidCompensation {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }

        if self.household_shares < Decimal::ZERO {
            return Err(EngineError::InvalidCompensation {
                field: "household_shares".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        Ok(())
    }
}

//! Calculation logic for the Net Pay Calculation Engine.
//!
//! This module contains the ordered calculation stages: gross aggregation,
//! social contribution deduction, progressive income tax with household
//! adjustment, withholding rate derivation, and the orchestrating
//! [`compute_net`] entry point.

mod contributions;
mod engine;
mod gross_aggregation;
mod income_tax;
mod withholding;

pub use contributions::{ContributionResult, calculate_contributions};
pub use engine::compute_net;
pub use gross_aggregation::{GrossAggregationResult, aggregate_gross};
pub use income_tax::{IncomeTaxResult, calculate_income_tax, per_share_tax};
pub use withholding::{WithholdingResult, calculate_withholding_rate};

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimals, round-half-up.
pub(crate) fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec("14.7375")), dec("14.74"));
        assert_eq!(round_currency(dec("14.735")), dec("14.74"));
        assert_eq!(round_currency(dec("14.734")), dec("14.73"));
    }

    #[test]
    fn test_round_currency_negative_rounds_away_from_zero() {
        assert_eq!(round_currency(dec("-6.681")), dec("-6.68"));
        assert_eq!(round_currency(dec("-6.685")), dec("-6.69"));
    }
}

//! Configuration types for the fiscal rate schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the fiscal schedule.
///
/// Contains identifying information about the schedule, including its
/// code, name, version, and source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The schedule code (e.g., "FR-PAYE").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// URL to the official documentation for the rates.
    pub source_url: String,
}

/// A single income tax bracket.
///
/// A bracket taxes the portion of per-share income that falls strictly
/// above its threshold, up to the threshold of the next bracket. Income
/// above the last threshold is taxed at the last rate with no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The lower bound of the bracket (exclusive).
    pub threshold: Decimal,
    /// The marginal rate applied within the bracket.
    pub rate: Decimal,
}

/// The complete set of policy constants for one effective period.
///
/// All rates used by the calculation stages come from this table, so a
/// new fiscal period is supported by adding a new rate file rather than
/// touching the algorithm.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// The date from which this table applies.
    pub effective_date: NaiveDate,
    /// Employee health insurance rate, applied to the full gross.
    pub health_rate: Decimal,
    /// Unemployment insurance rate, applied to the capped base.
    pub unemployment_rate: Decimal,
    /// Base retirement rate, applied to the capped base.
    pub base_retirement_rate: Decimal,
    /// Complementary retirement rate, applied to the full gross.
    pub complementary_retirement_rate: Decimal,
    /// Fraction of gross subject to the combined social levy (< 1).
    pub leviable_fraction: Decimal,
    /// Rate of the deductible sub-part of the combined levy (CSG deductible).
    pub deductible_levy_rate: Decimal,
    /// Rate of the non-deductible sub-part of the combined levy.
    pub non_deductible_levy_rate: Decimal,
    /// Rate of the flat debt-reduction sub-part (CRDS).
    pub debt_reduction_rate: Decimal,
    /// Ceiling above which capped contribution bases stop growing.
    pub contribution_ceiling: Decimal,
    /// Ordered income tax brackets, ascending by threshold.
    pub brackets: Vec<TaxBracket>,
}

/// The complete fiscal schedule loaded from YAML files.
///
/// Aggregates the schedule metadata with the rate tables for every
/// effective period found in the configuration directory.
#[derive(Debug, Clone)]
pub struct FiscalSchedule {
    /// Schedule metadata.
    metadata: ScheduleMetadata,
    /// Rate tables by effective date (sorted oldest first).
    tables: Vec<RateTable>,
}

impl FiscalSchedule {
    /// Creates a new FiscalSchedule from its component parts.
    pub fn new(metadata: ScheduleMetadata, tables: Vec<RateTable>) -> Self {
        let mut sorted_tables = tables;
        sorted_tables.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            tables: sorted_tables,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns all rate tables, sorted by effective date ascending.
    pub fn tables(&self) -> &[RateTable] {
        &self.tables
    }

    /// Returns the most recent rate table effective on or before `date`.
    pub fn table_for(&self, date: NaiveDate) -> Option<&RateTable> {
        self.tables.iter().rfind(|t| t.effective_date <= date)
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fiscal rate
//! schedules from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{FiscalSchedule, RateTable, ScheduleMetadata};

/// Loads and provides access to the fiscal rate schedule.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the rate table effective on a given date.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/fr_paye/
/// ├── schedule.yaml        # Schedule metadata
/// └── rates/
///     └── 2025-01-01.yaml  # Rate table effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use netpay_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/fr_paye").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let table = loader.table_for(date).unwrap();
/// println!("Health rate: {}", table.health_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: FiscalSchedule,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/fr_paye")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rate table fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let metadata = Self::load_yaml::<ScheduleMetadata>(&schedule_path)?;

        let rates_dir = path.join("rates");
        let tables = Self::load_tables(&rates_dir)?;

        for table in &tables {
            Self::validate_table(table)?;
        }

        Ok(Self {
            schedule: FiscalSchedule::new(metadata, tables),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate table files from the rates directory.
    fn load_tables(rates_dir: &Path) -> EngineResult<Vec<RateTable>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<RateTable>(&path)?;
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate tables found)", rates_dir_str),
            });
        }

        Ok(tables)
    }

    /// Validates a rate table after parsing.
    ///
    /// Checks that all rates fall in [0, 1), the leviable fraction is in
    /// (0, 1], the ceiling is positive, and bracket thresholds are strictly
    /// ascending so the marginal walk is well defined.
    fn validate_table(table: &RateTable) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidRateTable {
            effective_date: table.effective_date,
            message,
        };

        let rates = [
            ("health_rate", table.health_rate),
            ("unemployment_rate", table.unemployment_rate),
            ("base_retirement_rate", table.base_retirement_rate),
            (
                "complementary_retirement_rate",
                table.complementary_retirement_rate,
            ),
            ("deductible_levy_rate", table.deductible_levy_rate),
            ("non_deductible_levy_rate", table.non_deductible_levy_rate),
            ("debt_reduction_rate", table.debt_reduction_rate),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(invalid(format!("{} must be in [0, 1), got {}", name, rate)));
            }
        }

        if table.leviable_fraction <= Decimal::ZERO || table.leviable_fraction > Decimal::ONE {
            return Err(invalid(format!(
                "leviable_fraction must be in (0, 1], got {}",
                table.leviable_fraction
            )));
        }

        if table.contribution_ceiling <= Decimal::ZERO {
            return Err(invalid(format!(
                "contribution_ceiling must be positive, got {}",
                table.contribution_ceiling
            )));
        }

        if table.brackets.is_empty() {
            return Err(invalid("at least one tax bracket is required".to_string()));
        }

        for pair in table.brackets.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(invalid(
                    "bracket thresholds must be strictly ascending".to_string(),
                ));
            }
        }

        for bracket in &table.brackets {
            if bracket.rate < Decimal::ZERO || bracket.rate >= Decimal::ONE {
                return Err(invalid(format!(
                    "bracket rate must be in [0, 1), got {}",
                    bracket.rate
                )));
            }
        }

        Ok(())
    }

    /// Returns the underlying fiscal schedule.
    pub fn schedule(&self) -> &ScheduleMetadata {
        self.schedule.metadata()
    }

    /// Returns all loaded rate tables.
    pub fn tables(&self) -> &[RateTable] {
        self.schedule.tables()
    }

    /// Gets the rate table effective on the given date.
    ///
    /// The method finds the most recent rate table whose effective date is
    /// on or before the given date.
    ///
    /// # Errors
    ///
    /// Returns `RateTableNotFound` if no table is effective for the date.
    pub fn table_for(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.schedule
            .table_for(date)
            .ok_or(EngineError::RateTableNotFound { date })
    }
}

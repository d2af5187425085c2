//! Configuration loading and management for the Net Pay Calculation Engine.
//!
//! This module provides functionality to load fiscal rate schedules from
//! YAML files, including schedule metadata and one rate table per effective
//! period. The calculation stages never embed a rate; swapping the loaded
//! table is the only supported way to change fiscal-year policy.
//!
//! # Example
//!
//! ```no_run
//! use netpay_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/fr_paye").unwrap();
//! println!("Loaded schedule: {}", loader.schedule().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FiscalSchedule, RateTable, ScheduleMetadata, TaxBracket};

//! Net Pay Calculation Engine for French payroll
//!
//! This crate converts a gross compensation declaration into net take-home
//! pay by applying employee-side social contributions and the progressive,
//! household-adjusted income tax schedule (quotient familial).

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

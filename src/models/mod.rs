//! Core data models for the Net Pay Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod compensation;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, ContributionBreakdown, SocialLevy,
};
pub use compensation::{CompensationInput, MaritalStatus};

//! brcalc - Calculation engine for Brazilian consumer finance and health
//! calculators
//!
//! This library provides:
//! - Progressive INSS and deduction-compared IRRF evaluation over the
//!   published 2024/2025 tables
//! - Payroll calculators: net salary, severance, employer cost, CLT vs PJ
//!   comparison, raise analysis
//! - Investment projectors: compound and simple interest, time-to-target,
//!   emergency reserve
//! - Financing simulators: Price/SAC amortization and consortium plans
//! - Health calculators: BMI and WHO growth Z-score assessment

pub mod error;
pub mod financing;
pub mod health;
pub mod investment;
pub mod payroll;
pub mod tables;

// Re-export commonly used types
pub use error::{CalcError, TableError};
pub use financing::{AmortizationSystem, LoanSchedule};
pub use investment::RatePeriod;
pub use tables::{GrowthReference, InssTable, IrrfTable, Tables};

//! Compound interest projection with monthly contributions
//!
//! Each month accrues interest on the running balance first, then adds
//! the contribution.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::investment::{monthly_rate_compound, RatePeriod};

/// Inputs for a compound interest projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInput {
    pub initial: f64,
    pub monthly_contribution: f64,
    /// Rate as a fraction (0.01 = 1%)
    pub rate: f64,
    pub rate_period: RatePeriod,
    pub months: u32,
}

/// One month of a savings projection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub month: u32,
    pub interest: f64,
    pub total_invested: f64,
    pub balance: f64,
}

/// Complete projection output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundProjection {
    pub rows: Vec<ProjectionRow>,
    pub total_invested: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}

/// Run the month-by-month compound projection
pub fn project(input: &CompoundInput) -> Result<CompoundProjection, CalcError> {
    if input.months == 0 {
        return Err(CalcError::InvalidInput("period must be positive".into()));
    }
    if input.initial <= 0.0 && input.monthly_contribution <= 0.0 {
        return Err(CalcError::InvalidInput(
            "initial amount or monthly contribution must be positive".into(),
        ));
    }
    if input.rate < 0.0 {
        return Err(CalcError::InvalidInput("rate must not be negative".into()));
    }

    let monthly_rate = monthly_rate_compound(input.rate, input.rate_period);

    let mut balance = input.initial;
    let mut total_invested = input.initial;
    let mut rows = Vec::with_capacity(input.months as usize);

    for month in 1..=input.months {
        let interest = balance * monthly_rate;
        balance += interest;
        balance += input.monthly_contribution;
        total_invested += input.monthly_contribution;

        rows.push(ProjectionRow {
            month,
            interest,
            total_invested,
            balance,
        });
    }

    Ok(CompoundProjection {
        total_invested,
        total_interest: balance - total_invested,
        final_balance: balance,
        rows,
    })
}

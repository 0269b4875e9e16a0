//! Time-to-target simulation: how long until savings reach a goal
//!
//! Iterates the compound month step until the balance reaches the target,
//! hard-capped to keep bad inputs from looping forever.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::investment::{monthly_rate_compound, RatePeriod};

/// Default goal: the first million
pub const DEFAULT_TARGET: f64 = 1_000_000.0;

/// Safety cap on the simulation length (100 years)
pub const MAX_GOAL_MONTHS: u32 = 1200;

/// Inputs for the time-to-target simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInput {
    pub initial: f64,
    pub monthly_contribution: f64,
    /// Rate as a fraction (0.01 = 1%)
    pub rate: f64,
    pub rate_period: RatePeriod,
    pub target: f64,
}

impl GoalInput {
    /// Input aiming at the default first-million target
    pub fn first_million(
        initial: f64,
        monthly_contribution: f64,
        rate: f64,
        rate_period: RatePeriod,
    ) -> Self {
        Self {
            initial,
            monthly_contribution,
            rate,
            rate_period,
            target: DEFAULT_TARGET,
        }
    }
}

/// Balance snapshot at the end of a simulated year (or the final month)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearSnapshot {
    pub year: u32,
    pub total_invested: f64,
    pub accrued_interest: f64,
    pub balance: f64,
}

/// Simulation outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalResult {
    /// Months until the target; `None` when the cap was hit first
    pub months_to_target: Option<u32>,
    pub total_invested: f64,
    pub total_interest: f64,
    pub final_balance: f64,
    pub yearly: Vec<YearSnapshot>,
}

impl GoalResult {
    /// Months split into whole years and remaining months
    pub fn years_and_months(&self) -> Option<(u32, u32)> {
        self.months_to_target.map(|m| (m / 12, m % 12))
    }
}

/// Simulate until the target or the month cap
pub fn simulate(input: &GoalInput) -> Result<GoalResult, CalcError> {
    if input.target <= 0.0 {
        return Err(CalcError::InvalidInput("target must be positive".into()));
    }
    if input.initial < 0.0 || input.monthly_contribution < 0.0 || input.rate < 0.0 {
        return Err(CalcError::InvalidInput("amounts must not be negative".into()));
    }

    let monthly_rate = monthly_rate_compound(input.rate, input.rate_period);

    // Nothing grows and nothing is added: the target can never be hit
    if input.initial < input.target && monthly_rate <= 0.0 && input.monthly_contribution <= 0.0 {
        return Err(CalcError::UnreachableTarget);
    }

    let mut balance = input.initial;
    let mut total_invested = input.initial;
    let mut months = 0u32;
    let mut yearly = Vec::new();

    while balance < input.target && months < MAX_GOAL_MONTHS {
        months += 1;
        balance += balance * monthly_rate;
        balance += input.monthly_contribution;
        total_invested += input.monthly_contribution;

        if months % 12 == 0 || balance >= input.target {
            yearly.push(YearSnapshot {
                year: months.div_ceil(12),
                total_invested,
                accrued_interest: balance - total_invested,
                balance,
            });
        }
    }

    let reached = balance >= input.target;
    Ok(GoalResult {
        months_to_target: reached.then_some(months),
        total_invested,
        total_interest: balance - total_invested,
        final_balance: balance,
        yearly,
    })
}

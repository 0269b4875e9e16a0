//! Simple (linear) interest projection
//!
//! Interest accrues on the initial principal only; annual rates convert
//! by nominal division rather than compound equivalence.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::investment::{monthly_rate_nominal, ProjectionRow, RatePeriod};

/// Inputs for a simple interest projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleInput {
    pub initial: f64,
    /// Rate as a fraction (0.01 = 1%)
    pub rate: f64,
    pub rate_period: RatePeriod,
    pub months: u32,
}

/// Complete simple interest projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleProjection {
    pub rows: Vec<ProjectionRow>,
    pub total_invested: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}

/// Run the month-by-month simple interest projection
pub fn project(input: &SimpleInput) -> Result<SimpleProjection, CalcError> {
    if input.months == 0 {
        return Err(CalcError::InvalidInput("period must be positive".into()));
    }
    if input.initial <= 0.0 {
        return Err(CalcError::InvalidInput(
            "initial amount must be positive".into(),
        ));
    }
    if input.rate < 0.0 {
        return Err(CalcError::InvalidInput("rate must not be negative".into()));
    }

    let monthly_rate = monthly_rate_nominal(input.rate, input.rate_period);
    let monthly_interest = input.initial * monthly_rate;

    let mut accrued = 0.0;
    let mut rows = Vec::with_capacity(input.months as usize);
    for month in 1..=input.months {
        accrued += monthly_interest;
        rows.push(ProjectionRow {
            month,
            interest: monthly_interest,
            total_invested: input.initial,
            balance: input.initial + accrued,
        });
    }

    Ok(SimpleProjection {
        total_invested: input.initial,
        total_interest: accrued,
        final_balance: input.initial + accrued,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_accrual() {
        let input = SimpleInput {
            initial: 1000.0,
            rate: 0.01,
            rate_period: RatePeriod::Monthly,
            months: 12,
        };
        let result = project(&input).unwrap();

        // J = C * i * n
        assert_relative_eq!(result.total_interest, 120.0, epsilon = 1e-9);
        assert_relative_eq!(result.final_balance, 1120.0, epsilon = 1e-9);

        // Every month earns the same interest on the principal
        assert!(result
            .rows
            .iter()
            .all(|r| (r.interest - 10.0).abs() < 1e-9));
        assert_relative_eq!(result.rows[5].balance, 1060.0, epsilon = 1e-9);
    }

    #[test]
    fn test_annual_rate_divides_nominally() {
        let input = SimpleInput {
            initial: 2000.0,
            rate: 0.12,
            rate_period: RatePeriod::Annual,
            months: 6,
        };
        let result = project(&input).unwrap();

        // 12%/year nominal = 1%/month; six months = 6% of principal
        assert_relative_eq!(result.total_interest, 120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_zero_principal() {
        let input = SimpleInput {
            initial: 0.0,
            rate: 0.01,
            rate_period: RatePeriod::Monthly,
            months: 12,
        };
        assert!(project(&input).is_err());
    }
}

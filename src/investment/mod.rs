//! Savings and investment projectors: compound and simple interest,
//! time-to-target simulation and emergency reserve sizing

pub mod compound;
pub mod emergency;
pub mod goal;
pub mod simple;

pub use compound::{CompoundInput, CompoundProjection, ProjectionRow};
pub use emergency::{EmergencyInput, EmergencyResult, ReserveScenario};
pub use goal::{GoalInput, GoalResult, YearSnapshot, DEFAULT_TARGET, MAX_GOAL_MONTHS};
pub use simple::{SimpleInput, SimpleProjection};

use serde::{Deserialize, Serialize};

/// Whether a rate input is quoted per month or per year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatePeriod {
    Monthly,
    Annual,
}

/// Monthly rate by compound equivalence: (1 + r)^(1/12) - 1 for annual
/// quotes, pass-through for monthly ones
pub fn monthly_rate_compound(rate: f64, period: RatePeriod) -> f64 {
    match period {
        RatePeriod::Monthly => rate,
        RatePeriod::Annual => (1.0 + rate).powf(1.0 / 12.0) - 1.0,
    }
}

/// Monthly rate by nominal division: r / 12 for annual quotes
pub fn monthly_rate_nominal(rate: f64, period: RatePeriod) -> f64 {
    match period {
        RatePeriod::Monthly => rate,
        RatePeriod::Annual => rate / 12.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_compound_equivalence() {
        // 12.6825% per year is 1% per month
        let monthly = monthly_rate_compound(0.126825030132, RatePeriod::Annual);
        assert_abs_diff_eq!(monthly, 0.01, epsilon = 1e-9);

        assert_abs_diff_eq!(
            monthly_rate_compound(0.01, RatePeriod::Monthly),
            0.01,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_nominal_division() {
        assert_abs_diff_eq!(
            monthly_rate_nominal(0.12, RatePeriod::Annual),
            0.01,
            epsilon = 1e-12
        );
    }
}

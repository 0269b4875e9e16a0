//! Real salary raise analysis
//!
//! Computes take-home pay before and after a raise and shows how much of
//! the gross increase survives INSS and IRRF. Crossing the practical
//! exemption limit can make the net delta smaller than expected, or even
//! negative.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::payroll::PRACTICAL_EXEMPTION_LIMIT;
use crate::tables::Tables;

/// Inputs for the raise analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiseInput {
    pub current_gross: f64,
    pub new_gross: f64,
    pub dependents: u32,
}

/// Take-home summary for one gross salary
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TakeHome {
    pub gross: f64,
    pub inss: f64,
    pub irrf: f64,
    pub net: f64,
}

/// Raise analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiseResult {
    pub current: TakeHome,
    pub new: TakeHome,
    pub gross_delta: f64,
    pub net_delta: f64,
    /// Net growth relative to the current net salary, in percent
    pub net_growth_pct: f64,
    /// Slice of the gross increase absorbed by taxes
    pub tax_on_increase: f64,
}

/// Take-home pay with the deduction-compared IRRF and the practical
/// exemption rule
pub fn take_home(tables: &Tables, gross: f64, dependents: u32) -> TakeHome {
    let inss = tables.inss.contribution(gross);
    let irrf = if gross <= PRACTICAL_EXEMPTION_LIMIT {
        0.0
    } else {
        tables.irrf.withholding(gross, inss, dependents).tax
    };
    TakeHome {
        gross,
        inss,
        irrf,
        net: gross - inss - irrf,
    }
}

/// Analyze a raise
pub fn calculate(tables: &Tables, input: &RaiseInput) -> Result<RaiseResult, CalcError> {
    if input.current_gross <= 0.0 || input.new_gross <= 0.0 {
        return Err(CalcError::InvalidInput(
            "both salaries must be positive".into(),
        ));
    }

    let current = take_home(tables, input.current_gross, input.dependents);
    let new = take_home(tables, input.new_gross, input.dependents);

    let gross_delta = new.gross - current.gross;
    let net_delta = new.net - current.net;

    Ok(RaiseResult {
        current,
        new,
        gross_delta,
        net_delta,
        net_growth_pct: net_delta / current.net * 100.0,
        tax_on_increase: gross_delta - net_delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_raise_within_exemption() {
        let tables = Tables::default_2024();
        let input = RaiseInput {
            current_gross: 3000.0,
            new_gross: 3500.0,
            dependents: 0,
        };
        let result = calculate(&tables, &input).unwrap();

        // Both sides are IRRF-exempt; only INSS eats into the raise
        assert_eq!(result.current.irrf, 0.0);
        assert_eq!(result.new.irrf, 0.0);
        assert_abs_diff_eq!(result.gross_delta, 500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            result.tax_on_increase,
            result.new.inss - result.current.inss,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_crossing_the_exemption_limit_can_shrink_the_net() {
        let tables = Tables::default_2024();
        let input = RaiseInput {
            current_gross: 4800.0,
            new_gross: 5200.0,
            dependents: 0,
        };
        let result = calculate(&tables, &input).unwrap();

        // 4800 is exempt; 5200 pays full IRRF, so the net shrinks
        assert_eq!(result.current.irrf, 0.0);
        assert!(result.new.irrf > 0.0);
        assert!(result.net_delta < 0.0);
        assert!(result.tax_on_increase > result.gross_delta);
    }

    #[test]
    fn test_take_home_values() {
        let tables = Tables::default_2024();
        let summary = take_home(&tables, 5200.0, 0);

        assert_abs_diff_eq!(summary.inss, 546.8190, epsilon = 1e-3);
        // Standard base 4653.18 at 22.5% beats simplified 4672.00
        assert_abs_diff_eq!(summary.irrf, 4653.181 * 0.225 - 662.77, epsilon = 1e-2);
        assert_abs_diff_eq!(
            summary.net,
            5200.0 - summary.inss - summary.irrf,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rejects_missing_salary() {
        let tables = Tables::default_2024();
        let input = RaiseInput {
            current_gross: 0.0,
            new_gross: 5000.0,
            dependents: 0,
        };
        assert!(calculate(&tables, &input).is_err());
    }
}

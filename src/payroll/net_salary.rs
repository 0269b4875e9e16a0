//! Net salary calculation under the CLT regime
//!
//! Gross salary minus INSS, IRRF (deduction-compared), and any extra
//! discounts the employee carries (transport voucher, union dues, plans).

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::tables::{InssAssessment, IrrfAssessment, Tables};

/// Inputs for a net salary calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetSalaryInput {
    pub gross_salary: f64,
    pub dependents: u32,
    /// Other recurring payslip discounts (health plan, union dues, ...)
    pub other_discounts: f64,
    /// Transport voucher discount, when opted in
    pub transport_voucher: f64,
}

/// Full payslip breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetSalaryResult {
    pub gross_salary: f64,
    pub inss: InssAssessment,
    pub irrf: IrrfAssessment,
    pub other_discounts: f64,
    pub transport_voucher: f64,
    pub total_discounts: f64,
    pub net_salary: f64,
}

/// Twelve-month totals for the annual projection table
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnnualTotals {
    pub gross: f64,
    pub inss: f64,
    pub irrf: f64,
    pub other: f64,
    pub net: f64,
}

impl NetSalaryResult {
    /// Annual totals: the monthly payslip repeated over twelve months
    pub fn annual_totals(&self) -> AnnualTotals {
        AnnualTotals {
            gross: self.gross_salary * 12.0,
            inss: self.inss.total * 12.0,
            irrf: self.irrf.tax * 12.0,
            other: (self.other_discounts + self.transport_voucher) * 12.0,
            net: self.net_salary * 12.0,
        }
    }
}

/// Calculate the monthly net salary
pub fn calculate(tables: &Tables, input: &NetSalaryInput) -> Result<NetSalaryResult, CalcError> {
    if input.gross_salary <= 0.0 {
        return Err(CalcError::InvalidInput(
            "gross salary must be positive".into(),
        ));
    }
    if input.other_discounts < 0.0 || input.transport_voucher < 0.0 {
        return Err(CalcError::InvalidInput(
            "discounts must not be negative".into(),
        ));
    }

    let inss = tables.inss.contribution_detailed(input.gross_salary);
    let irrf = tables
        .irrf
        .withholding(input.gross_salary, inss.total, input.dependents);

    let total_discounts =
        inss.total + irrf.tax + input.other_discounts + input.transport_voucher;
    let net_salary = input.gross_salary - total_discounts;

    Ok(NetSalaryResult {
        gross_salary: input.gross_salary,
        inss,
        irrf,
        other_discounts: input.other_discounts,
        transport_voucher: input.transport_voucher,
        total_discounts,
        net_salary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input(gross: f64, dependents: u32) -> NetSalaryInput {
        NetSalaryInput {
            gross_salary: gross,
            dependents,
            other_discounts: 0.0,
            transport_voucher: 0.0,
        }
    }

    #[test]
    fn test_minimum_range_salary_pays_inss_only() {
        let tables = Tables::default_2024();
        let result = calculate(&tables, &input(1412.0, 0)).unwrap();

        assert_abs_diff_eq!(result.inss.total, 105.90, epsilon = 1e-6);
        assert_eq!(result.irrf.tax, 0.0);
        assert_abs_diff_eq!(result.net_salary, 1412.0 - 105.90, epsilon = 1e-6);
    }

    #[test]
    fn test_mid_range_salary() {
        let tables = Tables::default_2024();
        let result = calculate(&tables, &input(3000.0, 0)).unwrap();

        assert_abs_diff_eq!(result.inss.total, 258.8196, epsilon = 1e-4);
        // Simplified deduction wins: (3000-528) falls in the 7.5% bracket
        assert!(result.irrf.used_simplified);
        assert_abs_diff_eq!(result.irrf.tax, 15.96, epsilon = 1e-6);
        assert_abs_diff_eq!(
            result.net_salary,
            3000.0 - 258.8196 - 15.96,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_discounts_reduce_net() {
        let tables = Tables::default_2024();
        let mut i = input(3000.0, 0);
        i.other_discounts = 150.0;
        i.transport_voucher = 180.0;
        let result = calculate(&tables, &i).unwrap();

        assert_abs_diff_eq!(
            result.total_discounts,
            258.8196 + 15.96 + 330.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_dependents_lower_the_tax() {
        let tables = Tables::default_2024();
        let without = calculate(&tables, &input(6000.0, 0)).unwrap();
        let with = calculate(&tables, &input(6000.0, 3)).unwrap();

        assert!(with.irrf.tax < without.irrf.tax);
        assert!(with.net_salary > without.net_salary);
    }

    #[test]
    fn test_annual_totals() {
        let tables = Tables::default_2024();
        let result = calculate(&tables, &input(3000.0, 0)).unwrap();
        let annual = result.annual_totals();

        assert_abs_diff_eq!(annual.gross, 36_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(annual.net, result.net_salary * 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_gross() {
        let tables = Tables::default_2024();
        assert!(calculate(&tables, &input(0.0, 0)).is_err());
        assert!(calculate(&tables, &input(-100.0, 0)).is_err());
    }
}

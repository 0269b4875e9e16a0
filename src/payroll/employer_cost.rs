//! Real employer cost of a CLT employee
//!
//! Employer-side charges on top of gross salary, optionally including the
//! monthly provisions for the 13th salary and vacation plus one third.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::payroll::PRACTICAL_EXEMPTION_LIMIT;
use crate::tables::Tables;

/// Employer charge rates applied to gross salary
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmployerRates {
    /// Employer INSS share
    pub employer_inss: f64,
    /// Monthly FGTS deposit
    pub fgts: f64,
    /// Provision for the FGTS dismissal penalty
    pub fgts_penalty_provision: f64,
    /// Occupational risk (RAT) plus third-party entities
    pub rat_third_parties: f64,
}

impl Default for EmployerRates {
    fn default() -> Self {
        Self {
            employer_inss: 0.20,
            fgts: 0.08,
            fgts_penalty_provision: 0.032,
            rat_third_parties: 0.03,
        }
    }
}

impl EmployerRates {
    /// Sum of all charge rates
    pub fn total(&self) -> f64 {
        self.employer_inss + self.fgts + self.fgts_penalty_provision + self.rat_third_parties
    }
}

/// Inputs for the employer cost calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerCostInput {
    pub gross_salary: f64,
    pub dependents: u32,
    /// Include monthly provisions for 13th and vacation
    pub include_provisions: bool,
}

/// Employer cost breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerCostResult {
    pub gross_salary: f64,

    // Employee side
    pub employee_inss: f64,
    pub employee_irrf: f64,
    pub net_salary: f64,

    // Employer side
    pub employer_inss: f64,
    pub fgts: f64,
    pub fgts_penalty_provision: f64,
    pub rat_third_parties: f64,
    /// Monthly provision for the 13th salary (charges included)
    pub thirteenth_provision: f64,
    /// Monthly provision for vacation plus one third (charges included)
    pub vacation_provision: f64,

    pub total_charges: f64,
    pub total_monthly_cost: f64,
    pub total_annual_cost: f64,
    /// Share of the total cost that is not the employee's net salary
    pub tax_impact_pct: f64,
}

/// Calculate the employer's real cost with the default charge rates
pub fn calculate(tables: &Tables, input: &EmployerCostInput) -> Result<EmployerCostResult, CalcError> {
    calculate_with_rates(tables, input, &EmployerRates::default())
}

/// Calculate the employer's real cost with explicit charge rates
pub fn calculate_with_rates(
    tables: &Tables,
    input: &EmployerCostInput,
    rates: &EmployerRates,
) -> Result<EmployerCostResult, CalcError> {
    if input.gross_salary <= 0.0 {
        return Err(CalcError::InvalidInput(
            "gross salary must be positive".into(),
        ));
    }

    let gross = input.gross_salary;

    // Employee side: INSS plus standard-deduction IRRF under the
    // practical exemption rule
    let employee_inss = tables.inss.contribution(gross);
    let employee_irrf = if gross <= PRACTICAL_EXEMPTION_LIMIT {
        0.0
    } else {
        let base = gross
            - employee_inss
            - input.dependents as f64 * crate::tables::DEPENDENT_DEDUCTION;
        tables.irrf.tax_for_base(base.max(0.0))
    };
    let net_salary = gross - employee_inss - employee_irrf;

    // Employer side
    let employer_inss = gross * rates.employer_inss;
    let fgts = gross * rates.fgts;
    let fgts_penalty_provision = gross * rates.fgts_penalty_provision;
    let rat_third_parties = gross * rates.rat_third_parties;
    let base_charges = employer_inss + fgts + fgts_penalty_provision + rat_third_parties;

    let charge_factor = 1.0 + rates.total();
    let (thirteenth_provision, vacation_provision) = if input.include_provisions {
        (
            gross / 12.0 * charge_factor,
            gross * 1.3333 / 12.0 * charge_factor,
        )
    } else {
        (0.0, 0.0)
    };

    let total_charges = base_charges + thirteenth_provision + vacation_provision;
    let total_monthly_cost = gross + total_charges;
    let total_annual_cost = total_monthly_cost * 12.0;
    let tax_impact_pct = (total_monthly_cost - net_salary) / total_monthly_cost * 100.0;

    Ok(EmployerCostResult {
        gross_salary: gross,
        employee_inss,
        employee_irrf,
        net_salary,
        employer_inss,
        fgts,
        fgts_penalty_provision,
        rat_third_parties,
        thirteenth_provision,
        vacation_provision,
        total_charges,
        total_monthly_cost,
        total_annual_cost,
        tax_impact_pct,
    })
}

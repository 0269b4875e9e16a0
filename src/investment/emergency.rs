//! Emergency reserve sizing

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Inputs for the reserve calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmergencyInput {
    /// Monthly cost of living
    pub monthly_expenses: f64,
    /// Months of coverage the reserve should sustain
    pub coverage_months: u32,
}

/// One of the standard coverage scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveScenario {
    pub label: String,
    pub months: u32,
    pub amount: f64,
}

/// Reserve recommendation plus the standard scenario set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyResult {
    pub monthly_expenses: f64,
    pub coverage_months: u32,
    pub total_reserve: f64,
    pub scenarios: Vec<ReserveScenario>,
}

const SCENARIOS: [(&str, u32); 3] = [
    ("Essential", 3),
    ("Safety", 6),
    ("Comfort", 12),
];

/// Size the emergency reserve
pub fn calculate(input: &EmergencyInput) -> Result<EmergencyResult, CalcError> {
    if input.monthly_expenses <= 0.0 {
        return Err(CalcError::InvalidInput(
            "monthly expenses must be positive".into(),
        ));
    }
    if input.coverage_months == 0 {
        return Err(CalcError::InvalidInput(
            "coverage must be at least one month".into(),
        ));
    }

    let scenarios = SCENARIOS
        .iter()
        .map(|&(label, months)| ReserveScenario {
            label: label.to_string(),
            months,
            amount: input.monthly_expenses * months as f64,
        })
        .collect();

    Ok(EmergencyResult {
        monthly_expenses: input.monthly_expenses,
        coverage_months: input.coverage_months,
        total_reserve: input.monthly_expenses * input.coverage_months as f64,
        scenarios,
    })
}

//! Loan amortization schedules under the Price and SAC systems
//!
//! Price keeps the total installment constant; SAC keeps the
//! amortization portion constant with interest (and the installment)
//! declining as the balance falls.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::investment::{monthly_rate_compound, RatePeriod};

/// Amortization system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortizationSystem {
    Price,
    Sac,
}

/// Inputs for a financing simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Value being financed
    pub loan_value: f64,
    pub down_payment: f64,
    /// Annual rate as a fraction, converted by compound equivalence
    pub annual_rate: f64,
    pub months: u32,
    pub system: AmortizationSystem,
}

/// One installment of the schedule
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InstallmentRow {
    pub month: u32,
    pub installment: f64,
    pub amortization: f64,
    pub interest: f64,
    pub balance: f64,
}

/// Complete amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub principal: f64,
    pub monthly_rate: f64,
    pub system: AmortizationSystem,
    pub rows: Vec<InstallmentRow>,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_amortized: f64,
}

/// Fixed Price installment for a principal; zero rate degrades to the
/// straight division
fn price_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate <= 0.0 {
        return principal / months as f64;
    }
    let factor = (1.0 + monthly_rate).powi(months as i32);
    principal * (monthly_rate * factor) / (factor - 1.0)
}

impl LoanSchedule {
    /// Generate the full schedule
    pub fn generate(input: &LoanInput) -> Result<Self, CalcError> {
        if input.loan_value <= 0.0 {
            return Err(CalcError::InvalidInput("loan value must be positive".into()));
        }
        if input.months == 0 {
            return Err(CalcError::InvalidInput("term must be positive".into()));
        }
        if input.annual_rate < 0.0 || input.down_payment < 0.0 {
            return Err(CalcError::InvalidInput(
                "rate and down payment must not be negative".into(),
            ));
        }

        let principal = (input.loan_value - input.down_payment).max(0.0);
        let monthly_rate = monthly_rate_compound(input.annual_rate, RatePeriod::Annual);

        let fixed_payment = match input.system {
            AmortizationSystem::Price => price_payment(principal, monthly_rate, input.months),
            AmortizationSystem::Sac => 0.0,
        };
        let fixed_amortization = match input.system {
            AmortizationSystem::Sac => principal / input.months as f64,
            AmortizationSystem::Price => 0.0,
        };

        let mut balance = principal;
        let mut total_paid = 0.0;
        let mut total_interest = 0.0;
        let mut total_amortized = 0.0;
        let mut rows = Vec::with_capacity(input.months as usize);

        for month in 1..=input.months {
            let interest = balance * monthly_rate;

            let (mut amortization, mut installment) = match input.system {
                AmortizationSystem::Price => (fixed_payment - interest, fixed_payment),
                AmortizationSystem::Sac => {
                    (fixed_amortization, fixed_amortization + interest)
                }
            };

            // Close out residual cents in the final period
            if balance - amortization < 0.01 {
                amortization = balance;
                if input.system == AmortizationSystem::Price {
                    installment = amortization + interest;
                }
            }

            balance = (balance - amortization).max(0.0);

            total_paid += installment;
            total_interest += interest;
            total_amortized += amortization;

            rows.push(InstallmentRow {
                month,
                installment,
                amortization,
                interest,
                balance,
            });
        }

        Ok(Self {
            principal,
            monthly_rate,
            system: input.system,
            rows,
            total_paid,
            total_interest,
            total_amortized,
        })
    }
}

//! Consortium (consórcio) simulation
//!
//! No interest is charged: the letter of credit plus the administration
//! fee and reserve fund are split evenly over the term. An optional bid
//! reduces the outstanding total and therefore the level installment.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Inputs for a consortium simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsortiumInput {
    /// Letter of credit value
    pub letter_value: f64,
    pub months: u32,
    /// Administration fee over the whole term, as a fraction of the letter
    pub admin_rate: f64,
    /// Reserve fund over the whole term, as a fraction of the letter
    pub reserve_rate: f64,
    /// Optional bid amount; capped at the total cost
    pub bid: f64,
}

/// One month of the consortium schedule
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConsortiumRow {
    pub month: u32,
    pub installment: f64,
    pub common_fund: f64,
    pub fees: f64,
    pub balance: f64,
}

/// Effect of the bid on the plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BidOutcome {
    /// Bid actually applied (input capped at the total cost)
    pub applied_bid: f64,
    pub new_installment: f64,
    pub monthly_saving: f64,
}

/// Complete consortium simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsortiumResult {
    pub letter_value: f64,
    pub admin_fee: f64,
    pub reserve_fund: f64,
    pub total_cost: f64,
    pub installment: f64,
    /// Common-fund portion of each installment
    pub monthly_common: f64,
    /// Fee portion (administration + reserve) of each installment
    pub monthly_fees: f64,
    pub bid: Option<BidOutcome>,
    pub rows: Vec<ConsortiumRow>,
}

/// Simulate the consortium plan
pub fn simulate(input: &ConsortiumInput) -> Result<ConsortiumResult, CalcError> {
    if input.letter_value <= 0.0 {
        return Err(CalcError::InvalidInput(
            "letter of credit must be positive".into(),
        ));
    }
    if input.months == 0 {
        return Err(CalcError::InvalidInput("term must be positive".into()));
    }
    if input.admin_rate < 0.0 || input.reserve_rate < 0.0 || input.bid < 0.0 {
        return Err(CalcError::InvalidInput(
            "rates and bid must not be negative".into(),
        ));
    }

    let admin_fee = input.letter_value * input.admin_rate;
    let reserve_fund = input.letter_value * input.reserve_rate;
    let total_cost = input.letter_value + admin_fee + reserve_fund;

    let months = input.months as f64;
    let installment = total_cost / months;
    let monthly_common = input.letter_value / months;
    let monthly_fees = (admin_fee + reserve_fund) / months;

    let bid = (input.bid > 0.0).then(|| {
        let applied_bid = input.bid.min(total_cost);
        let new_installment = (total_cost - applied_bid) / months;
        BidOutcome {
            applied_bid,
            new_installment,
            monthly_saving: installment - new_installment,
        }
    });

    let mut balance = total_cost;
    let mut rows = Vec::with_capacity(input.months as usize);
    for month in 1..=input.months {
        balance -= installment;
        if balance < 0.01 {
            balance = 0.0;
        }
        rows.push(ConsortiumRow {
            month,
            installment,
            common_fund: monthly_common,
            fees: monthly_fees,
            balance,
        });
    }

    Ok(ConsortiumResult {
        letter_value: input.letter_value,
        admin_fee,
        reserve_fund,
        total_cost,
        installment,
        monthly_common,
        monthly_fees,
        bid,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input() -> ConsortiumInput {
        ConsortiumInput {
            letter_value: 100_000.0,
            months: 60,
            admin_rate: 0.18,
            reserve_rate: 0.02,
            bid: 0.0,
        }
    }

    #[test]
    fn test_cost_split() {
        let result = simulate(&input()).unwrap();

        assert_relative_eq!(result.admin_fee, 18_000.0, epsilon = 1e-9);
        assert_relative_eq!(result.reserve_fund, 2_000.0, epsilon = 1e-9);
        assert_relative_eq!(result.total_cost, 120_000.0, epsilon = 1e-9);
        assert_relative_eq!(result.installment, 2_000.0, epsilon = 1e-9);
        assert_relative_eq!(
            result.installment,
            result.monthly_common + result.monthly_fees,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_schedule_closes_at_zero() {
        let result = simulate(&input()).unwrap();

        assert_eq!(result.rows.len(), 60);
        assert_relative_eq!(result.rows[0].balance, 118_000.0, epsilon = 1e-9);
        assert_relative_eq!(result.rows[59].balance, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bid_reduces_installment() {
        let mut i = input();
        i.bid = 12_000.0;
        let result = simulate(&i).unwrap();

        let bid = result.bid.unwrap();
        assert_relative_eq!(bid.new_installment, 1_800.0, epsilon = 1e-9);
        assert_relative_eq!(bid.monthly_saving, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bid_caps_at_total_cost() {
        let mut i = input();
        i.bid = 500_000.0;
        let result = simulate(&i).unwrap();

        let bid = result.bid.unwrap();
        assert_relative_eq!(bid.applied_bid, 120_000.0, epsilon = 1e-9);
        assert_relative_eq!(bid.new_installment, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_bid_is_none() {
        let result = simulate(&input()).unwrap();
        assert!(result.bid.is_none());
    }
}

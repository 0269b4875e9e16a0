//! INSS contribution table with progressive bracket evaluation
//!
//! The employee contribution is marginal: each bracket taxes only the
//! salary slice between the previous limit and its own. Salary above the
//! last limit (the contribution ceiling) contributes nothing further.

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// A single contribution bracket (upper salary limit, marginal rate)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InssBracket {
    pub upper_limit: f64,
    pub rate: f64,
}

/// Progressive INSS contribution table
#[derive(Debug, Clone)]
pub struct InssTable {
    brackets: Vec<InssBracket>,
}

/// One taxed slice of the salary, for display surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InssBracketLine {
    pub lower_limit: f64,
    pub upper_limit: f64,
    pub rate: f64,
    pub taxed_base: f64,
    pub amount: f64,
}

/// Contribution total plus the per-bracket breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InssAssessment {
    pub total: f64,
    pub lines: Vec<InssBracketLine>,
}

impl InssTable {
    /// 2024/2025 published contribution table
    pub fn table_2024() -> Self {
        Self {
            brackets: vec![
                InssBracket { upper_limit: 1412.00, rate: 0.075 },
                InssBracket { upper_limit: 2666.68, rate: 0.09 },
                InssBracket { upper_limit: 4000.03, rate: 0.12 },
                InssBracket { upper_limit: 7786.02, rate: 0.14 },
            ],
        }
    }

    /// Build from an explicit bracket list, validating the limit order
    pub fn new(brackets: Vec<InssBracket>) -> Result<Self, TableError> {
        if brackets.is_empty() {
            return Err(TableError::Validation("INSS table has no brackets".into()));
        }
        for pair in brackets.windows(2) {
            if pair[1].upper_limit <= pair[0].upper_limit {
                return Err(TableError::Validation(format!(
                    "INSS bracket limits must be strictly increasing ({} after {})",
                    pair[1].upper_limit, pair[0].upper_limit
                )));
            }
        }
        Ok(Self { brackets })
    }

    /// Contribution ceiling: the top bracket's limit
    pub fn ceiling(&self) -> f64 {
        self.brackets.last().map(|b| b.upper_limit).unwrap_or(0.0)
    }

    /// Total monthly contribution for a gross salary
    pub fn contribution(&self, gross: f64) -> f64 {
        self.contribution_detailed(gross).total
    }

    /// Contribution with the per-bracket slice breakdown
    pub fn contribution_detailed(&self, gross: f64) -> InssAssessment {
        let mut total = 0.0;
        let mut lines = Vec::new();
        let mut previous_limit = 0.0;

        for bracket in &self.brackets {
            let taxed_base = gross.min(bracket.upper_limit) - previous_limit;
            if taxed_base > 0.0 {
                let amount = taxed_base * bracket.rate;
                total += amount;
                lines.push(InssBracketLine {
                    lower_limit: previous_limit,
                    upper_limit: bracket.upper_limit,
                    rate: bracket.rate,
                    taxed_base,
                    amount,
                });
            }
            previous_limit = bracket.upper_limit;
            if gross <= bracket.upper_limit {
                break;
            }
        }

        InssAssessment { total, lines }
    }
}

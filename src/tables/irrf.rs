//! IRRF withholding table with the deduction-compared evaluation
//!
//! Unlike INSS, the IRRF table is not marginal: the bracket containing
//! the calculation base supplies a single rate and a fixed deduction.
//! Withholding compares two bases — standard (minus INSS and dependent
//! deductions) and simplified (minus the flat discount) — and keeps the
//! smaller resulting tax.

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Monthly deduction per declared dependent
pub const DEPENDENT_DEDUCTION: f64 = 189.59;

/// Flat simplified discount that replaces all itemized deductions
pub const SIMPLIFIED_DEDUCTION: f64 = 528.00;

/// A single tax bracket; the last one is unbounded
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IrrfBracket {
    pub upper_limit: f64,
    pub rate: f64,
    pub deduction: f64,
}

/// IRRF withholding table
#[derive(Debug, Clone)]
pub struct IrrfTable {
    brackets: Vec<IrrfBracket>,
}

/// Outcome of the deduction-compared withholding calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrfAssessment {
    pub tax: f64,
    pub rate: f64,
    pub standard_base: f64,
    pub standard_tax: f64,
    pub simplified_base: f64,
    pub simplified_tax: f64,
    pub used_simplified: bool,
}

impl IrrfTable {
    /// 2024/2025 published withholding table
    pub fn table_2024() -> Self {
        Self {
            brackets: vec![
                IrrfBracket { upper_limit: 2259.20, rate: 0.0, deduction: 0.0 },
                IrrfBracket { upper_limit: 2826.65, rate: 0.075, deduction: 169.44 },
                IrrfBracket { upper_limit: 3751.05, rate: 0.15, deduction: 381.44 },
                IrrfBracket { upper_limit: 4664.68, rate: 0.225, deduction: 662.77 },
                IrrfBracket { upper_limit: f64::INFINITY, rate: 0.275, deduction: 896.00 },
            ],
        }
    }

    /// Build from an explicit bracket list, validating the limit order
    pub fn new(brackets: Vec<IrrfBracket>) -> Result<Self, TableError> {
        if brackets.is_empty() {
            return Err(TableError::Validation("IRRF table has no brackets".into()));
        }
        for pair in brackets.windows(2) {
            if pair[1].upper_limit <= pair[0].upper_limit {
                return Err(TableError::Validation(format!(
                    "IRRF bracket limits must be strictly increasing ({} after {})",
                    pair[1].upper_limit, pair[0].upper_limit
                )));
            }
        }
        if brackets.last().map(|b| b.upper_limit) != Some(f64::INFINITY) {
            return Err(TableError::Validation(
                "last IRRF bracket must be unbounded".into(),
            ));
        }
        Ok(Self { brackets })
    }

    /// Bracket containing a calculation base
    pub fn bracket_for(&self, base: f64) -> &IrrfBracket {
        self.brackets
            .iter()
            .find(|b| base <= b.upper_limit)
            .unwrap_or_else(|| self.brackets.last().expect("validated non-empty"))
    }

    /// Tax for a calculation base: rate applied, fixed deduction subtracted
    pub fn tax_for_base(&self, base: f64) -> f64 {
        if base <= 0.0 {
            return 0.0;
        }
        let bracket = self.bracket_for(base);
        (base * bracket.rate - bracket.deduction).max(0.0)
    }

    /// Deduction-compared withholding on a taxable amount
    ///
    /// `inss` and the dependent deduction reduce the standard base; the
    /// simplified base replaces both with the flat discount.
    pub fn withholding(&self, taxable: f64, inss: f64, dependents: u32) -> IrrfAssessment {
        let standard_base = (taxable - inss - dependents as f64 * DEPENDENT_DEDUCTION).max(0.0);
        let simplified_base = (taxable - SIMPLIFIED_DEDUCTION).max(0.0);

        let standard_tax = self.tax_for_base(standard_base);
        let simplified_tax = self.tax_for_base(simplified_base);

        let used_simplified = simplified_tax < standard_tax;
        let winning_base = if used_simplified { simplified_base } else { standard_base };

        IrrfAssessment {
            tax: standard_tax.min(simplified_tax),
            rate: self.bracket_for(winning_base).rate,
            standard_base,
            standard_tax,
            simplified_base,
            simplified_tax,
            used_simplified,
        }
    }
}

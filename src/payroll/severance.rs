//! Severance (employment termination) calculation
//!
//! Builds the termination ledger: salary balance, proportional 13th
//! salary, accrued and proportional vacation, prior notice, the
//! consolidated INSS/IRRF withholding on the taxable items, and the
//! informational FGTS penalty estimate.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::payroll::FGTS_RATE;
use crate::tables::Tables;

/// How the employment contract ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationKind {
    /// Dismissal without cause
    WithoutCause,
    /// Dismissal for cause
    ForCause,
    /// Employee resignation
    Resignation,
    /// Mutual agreement (reduced notice and penalty)
    MutualAgreement,
}

/// How the prior notice was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// Paid out instead of worked
    Indemnified,
    /// Worked through the notice period
    Worked,
    /// Not served by the employee
    NotServed,
}

/// Inputs for a severance calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceInput {
    pub monthly_salary: f64,
    pub dependents: u32,
    pub admission: NaiveDate,
    pub dismissal: NaiveDate,
    pub termination: TerminationKind,
    pub notice: NoticeKind,
    /// A full overdue vacation period is pending
    pub pending_vacation: bool,
    pub include_thirteenth: bool,
    pub include_vacation: bool,
    pub include_fgts_penalty: bool,
}

/// Whether a ledger entry adds to or subtracts from the net total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Earning,
    Deduction,
}

/// One line of the termination ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceEntry {
    pub label: String,
    pub amount: f64,
    pub kind: EntryKind,
}

/// Complete severance result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceResult {
    pub entries: Vec<SeveranceEntry>,
    pub total_earnings: f64,
    pub total_deductions: f64,
    pub net_total: f64,
    /// Taxable base: salary balance + 13th + indemnified notice
    pub taxable_base: f64,
    pub inss: f64,
    pub irrf: f64,
    /// Informational: estimated FGTS penalty, paid outside the ledger
    pub fgts_penalty: f64,
}

/// Twelfths of 13th salary earned in the dismissal year
///
/// A month counts when at least 15 days of it were worked.
fn thirteenth_twelfths(admission: NaiveDate, dismissal: NaiveDate) -> u32 {
    let mut twelfths =
        dismissal.month0() as i32 + if dismissal.day() >= 15 { 1 } else { 0 };

    if admission.year() == dismissal.year() {
        let start = admission.month0() as i32 + if admission.day() <= 15 { 0 } else { 1 };
        twelfths -= start;
    }

    twelfths.max(0) as u32
}

/// Twelfths of the current vacation accrual period
fn vacation_twelfths(
    admission: NaiveDate,
    dismissal: NaiveDate,
) -> Result<u32, CalcError> {
    let years = dismissal.year() - admission.year();
    let mut whole_months =
        dismissal.month() as i32 - admission.month() as i32 + years * 12;
    if dismissal.day() < admission.day() {
        whole_months -= 1;
    }
    let mut whole_months = whole_months.max(0) as u32;

    // 15-day rule on the leftover days since the last monthly anniversary
    let anniversary = admission
        .checked_add_months(Months::new(whole_months))
        .ok_or_else(|| CalcError::InvalidInput("date out of range".into()))?;
    if (dismissal - anniversary).num_days() >= 15 {
        whole_months += 1;
    }

    Ok(whole_months % 12)
}

/// Calculate the termination ledger
pub fn calculate(tables: &Tables, input: &SeveranceInput) -> Result<SeveranceResult, CalcError> {
    if input.monthly_salary <= 0.0 {
        return Err(CalcError::InvalidInput(
            "monthly salary must be positive".into(),
        ));
    }
    if input.dismissal < input.admission {
        return Err(CalcError::DateOrder {
            admission: input.admission,
            dismissal: input.dismissal,
        });
    }

    let salary = input.monthly_salary;
    let daily = salary / 30.0;
    let employment_days = (input.dismissal - input.admission).num_days();

    let mut entries = Vec::new();

    // 1. Salary balance for days worked in the dismissal month
    let days_worked = input.dismissal.day();
    let salary_balance = daily * days_worked as f64;
    entries.push(SeveranceEntry {
        label: format!("Salary balance ({} days)", days_worked),
        amount: salary_balance,
        kind: EntryKind::Earning,
    });

    // 2. Proportional 13th salary
    let mut thirteenth = 0.0;
    if input.include_thirteenth && input.termination != TerminationKind::ForCause {
        let twelfths = thirteenth_twelfths(input.admission, input.dismissal);
        thirteenth = salary / 12.0 * twelfths as f64;
        if thirteenth > 0.0 {
            entries.push(SeveranceEntry {
                label: format!("Proportional 13th salary ({}/12)", twelfths),
                amount: thirteenth,
                kind: EntryKind::Earning,
            });
        }
    }

    // 3. Vacation amounts (not taxed on termination)
    if input.termination != TerminationKind::ForCause {
        if input.pending_vacation {
            entries.push(SeveranceEntry {
                label: "Accrued vacation".into(),
                amount: salary,
                kind: EntryKind::Earning,
            });
            entries.push(SeveranceEntry {
                label: "1/3 accrued vacation".into(),
                amount: salary / 3.0,
                kind: EntryKind::Earning,
            });
        }

        if input.include_vacation {
            let twelfths = vacation_twelfths(input.admission, input.dismissal)?;
            let proportional = salary / 12.0 * twelfths as f64;
            if proportional > 0.0 {
                entries.push(SeveranceEntry {
                    label: format!("Proportional vacation ({}/12)", twelfths),
                    amount: proportional,
                    kind: EntryKind::Earning,
                });
                entries.push(SeveranceEntry {
                    label: "1/3 proportional vacation".into(),
                    amount: proportional / 3.0,
                    kind: EntryKind::Earning,
                });
            }
        }
    }

    // 4. Prior notice
    let mut indemnified_notice = 0.0;
    match input.notice {
        NoticeKind::Indemnified => {
            if matches!(
                input.termination,
                TerminationKind::WithoutCause | TerminationKind::MutualAgreement
            ) {
                let years_worked = (employment_days / 365) as u32;
                let notice_days = (30 + years_worked * 3).min(90);
                let factor = if input.termination == TerminationKind::MutualAgreement {
                    0.5
                } else {
                    1.0
                };
                indemnified_notice = daily * notice_days as f64 * factor;
                let suffix = if factor < 1.0 { ", halved" } else { "" };
                entries.push(SeveranceEntry {
                    label: format!("Indemnified prior notice ({} days{})", notice_days, suffix),
                    amount: indemnified_notice,
                    kind: EntryKind::Earning,
                });
            }
        }
        NoticeKind::Worked => {
            // Covered by the salary balance; no separate line
        }
        NoticeKind::NotServed => {
            if matches!(
                input.termination,
                TerminationKind::Resignation | TerminationKind::MutualAgreement
            ) {
                let factor = if input.termination == TerminationKind::MutualAgreement {
                    0.5
                } else {
                    1.0
                };
                let suffix = if factor < 1.0 { " (halved)" } else { "" };
                entries.push(SeveranceEntry {
                    label: format!("Prior notice not served{}", suffix),
                    amount: salary * factor,
                    kind: EntryKind::Deduction,
                });
            }
        }
    }

    // 5. Consolidated withholding on the taxable items
    let taxable_base = salary_balance + thirteenth + indemnified_notice;
    let mut inss = 0.0;
    let mut irrf = 0.0;
    if taxable_base > 0.0 {
        inss = tables.inss.contribution(taxable_base);
        if inss > 0.0 {
            entries.push(SeveranceEntry {
                label: "INSS".into(),
                amount: inss,
                kind: EntryKind::Deduction,
            });
        }

        irrf = tables
            .irrf
            .withholding(taxable_base, inss, input.dependents)
            .tax;
        if irrf > 0.0 {
            entries.push(SeveranceEntry {
                label: "IRRF".into(),
                amount: irrf,
                kind: EntryKind::Deduction,
            });
        }
    }

    // 6. FGTS penalty estimate (informational)
    let mut fgts_penalty = 0.0;
    if input.include_fgts_penalty {
        let months_worked = (employment_days / 30).max(1) as f64;
        let estimated_balance = salary * FGTS_RATE * months_worked;
        fgts_penalty = match input.termination {
            TerminationKind::WithoutCause => estimated_balance * 0.40,
            TerminationKind::MutualAgreement => estimated_balance * 0.20,
            _ => 0.0,
        };
    }

    let total_earnings: f64 = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Earning)
        .map(|e| e.amount)
        .sum();
    let total_deductions: f64 = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Deduction)
        .map(|e| e.amount)
        .sum();

    Ok(SeveranceResult {
        entries,
        total_earnings,
        total_deductions,
        net_total: total_earnings - total_deductions,
        taxable_base,
        inss,
        irrf,
        fgts_penalty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn base_input() -> SeveranceInput {
        SeveranceInput {
            monthly_salary: 3000.0,
            dependents: 0,
            admission: date(2023, 1, 10),
            dismissal: date(2025, 6, 20),
            termination: TerminationKind::WithoutCause,
            notice: NoticeKind::Indemnified,
            pending_vacation: false,
            include_thirteenth: true,
            include_vacation: true,
            include_fgts_penalty: true,
        }
    }

    fn entry_amount(result: &SeveranceResult, prefix: &str) -> f64 {
        result
            .entries
            .iter()
            .find(|e| e.label.starts_with(prefix))
            .map(|e| e.amount)
            .unwrap_or_else(|| panic!("missing entry {:?}", prefix))
    }

    #[test]
    fn test_dismissal_without_cause_ledger() {
        let tables = Tables::default_2024();
        let result = calculate(&tables, &base_input()).unwrap();

        // Salary balance: 20 days of June
        assert_abs_diff_eq!(entry_amount(&result, "Salary balance"), 2000.0, epsilon = 1e-6);

        // 13th: Jan-May complete + June (>= 15 days) = 6/12
        assert_abs_diff_eq!(
            entry_amount(&result, "Proportional 13th"),
            1500.0,
            epsilon = 1e-6
        );

        // Vacation: 29 whole months since admission, 10 leftover days -> 5/12
        assert_abs_diff_eq!(
            entry_amount(&result, "Proportional vacation"),
            1250.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            entry_amount(&result, "1/3 proportional vacation"),
            1250.0 / 3.0,
            epsilon = 1e-6
        );

        // Notice: 892 employment days -> 2 full years -> 36 days
        assert_abs_diff_eq!(
            entry_amount(&result, "Indemnified prior notice"),
            3600.0,
            epsilon = 1e-6
        );

        // Taxable base 7100: INSS from the full table
        assert_abs_diff_eq!(result.taxable_base, 7100.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.inss, 812.8190, epsilon = 1e-3);
        // Standard base 6287.18 beats simplified 6572.00 in the top bracket
        assert_abs_diff_eq!(result.irrf, 6287.181 * 0.275 - 896.0, epsilon = 1e-2);

        // FGTS penalty: 29 months of 8% deposits, 40% penalty
        assert_abs_diff_eq!(result.fgts_penalty, 3000.0 * 0.08 * 29.0 * 0.4, epsilon = 1e-6);

        assert_abs_diff_eq!(
            result.net_total,
            result.total_earnings - result.total_deductions,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_for_cause_strips_thirteenth_and_vacation() {
        let tables = Tables::default_2024();
        let mut input = base_input();
        input.termination = TerminationKind::ForCause;
        input.pending_vacation = true;
        let result = calculate(&tables, &input).unwrap();

        assert!(result
            .entries
            .iter()
            .all(|e| !e.label.contains("13th") && !e.label.contains("vacation")));
        assert_eq!(result.fgts_penalty, 0.0);
    }

    #[test]
    fn test_resignation_notice_not_served_is_deducted() {
        let tables = Tables::default_2024();
        let mut input = base_input();
        input.termination = TerminationKind::Resignation;
        input.notice = NoticeKind::NotServed;
        let result = calculate(&tables, &input).unwrap();

        let deduction = result
            .entries
            .iter()
            .find(|e| e.label.starts_with("Prior notice not served"))
            .unwrap();
        assert_eq!(deduction.kind, EntryKind::Deduction);
        assert_abs_diff_eq!(deduction.amount, 3000.0, epsilon = 1e-9);
        assert_eq!(result.fgts_penalty, 0.0);
    }

    #[test]
    fn test_mutual_agreement_halves_notice_and_penalty() {
        let tables = Tables::default_2024();
        let mut input = base_input();
        input.termination = TerminationKind::MutualAgreement;
        let result = calculate(&tables, &input).unwrap();

        assert_abs_diff_eq!(
            entry_amount(&result, "Indemnified prior notice"),
            1800.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(result.fgts_penalty, 3000.0 * 0.08 * 29.0 * 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_pending_vacation_lines() {
        let tables = Tables::default_2024();
        let mut input = base_input();
        input.pending_vacation = true;
        let result = calculate(&tables, &input).unwrap();

        assert_abs_diff_eq!(entry_amount(&result, "Accrued vacation"), 3000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            entry_amount(&result, "1/3 accrued vacation"),
            1000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_notice_days_cap_at_90() {
        let tables = Tables::default_2024();
        let mut input = base_input();
        input.admission = date(1995, 3, 1);
        let result = calculate(&tables, &input).unwrap();

        // 30 years of service: 30 + 3*30 caps at 90 days
        assert_abs_diff_eq!(
            entry_amount(&result, "Indemnified prior notice"),
            3000.0 / 30.0 * 90.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_thirteenth_same_year_admission() {
        // Admitted 2025-03-20, dismissed 2025-06-20: April, May, June
        let tables = Tables::default_2024();
        let mut input = base_input();
        input.admission = date(2025, 3, 20);
        let result = calculate(&tables, &input).unwrap();

        assert_abs_diff_eq!(
            entry_amount(&result, "Proportional 13th"),
            3000.0 / 12.0 * 3.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_rejects_inverted_dates() {
        let tables = Tables::default_2024();
        let mut input = base_input();
        input.dismissal = date(2022, 1, 1);
        assert!(matches!(
            calculate(&tables, &input),
            Err(CalcError::DateOrder { .. })
        ));
    }
}

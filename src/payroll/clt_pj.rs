//! CLT vs PJ take-home comparison
//!
//! Puts an employment contract and a service company side by side: the
//! CLT column nets salary plus FGTS and benefits (with the 13th and
//! vacation folded into the annual equivalent), the PJ column nets the
//! billing after the regime tax, partner charges and accounting fees.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::payroll::FGTS_RATE;
use crate::tables::Tables;

/// PJ tax regime options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PjRegime {
    /// Fixed monthly DAS payment
    Mei,
    /// Simples Nacional, Anexo III entry rate (6%)
    SimplesAnexo3,
    /// Simples Nacional, Anexo V entry rate (15.5%)
    SimplesAnexo5,
}

/// Fixed monthly DAS for a service-sector MEI
pub const MEI_DAS_FIXED: f64 = 75.00;

/// INSS retention rate on the partner's pro-labore
pub const PRO_LABORE_INSS_RATE: f64 = 0.11;

/// CLT annual equivalent factor: 12 salaries + 13th + 1/3 vacation
const CLT_ANNUAL_FACTOR: f64 = 13.33;

/// Inputs for the comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CltPjInput {
    pub clt_gross_salary: f64,
    pub clt_benefits: f64,
    pub clt_dependents: u32,
    pub pj_monthly_billing: f64,
    pub pj_regime: PjRegime,
    pub pj_pro_labore: f64,
    pub pj_accounting_fee: f64,
}

/// CLT column of the comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CltSide {
    pub net_salary: f64,
    pub inss: f64,
    pub irrf: f64,
    pub fgts: f64,
    pub benefits: f64,
    pub monthly_total: f64,
    pub annual_total: f64,
}

/// PJ column of the comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PjSide {
    pub regime_tax: f64,
    pub pro_labore_inss: f64,
    pub pro_labore_irrf: f64,
    pub accounting_fee: f64,
    pub monthly_total: f64,
    pub annual_total: f64,
}

/// Which regime came out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Clt,
    Pj,
}

/// Full comparison result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CltPjComparison {
    pub clt: CltSide,
    pub pj: PjSide,
    pub winner: Regime,
    pub monthly_difference: f64,
    pub annual_difference: f64,
}

/// Compare the CLT and PJ arrangements
pub fn compare(tables: &Tables, input: &CltPjInput) -> Result<CltPjComparison, CalcError> {
    if input.clt_gross_salary <= 0.0 && input.pj_monthly_billing <= 0.0 {
        return Err(CalcError::InvalidInput(
            "at least one of the CLT salary and PJ billing must be positive".into(),
        ));
    }
    if input.clt_gross_salary < 0.0
        || input.clt_benefits < 0.0
        || input.pj_monthly_billing < 0.0
        || input.pj_pro_labore < 0.0
        || input.pj_accounting_fee < 0.0
    {
        return Err(CalcError::InvalidInput("amounts must not be negative".into()));
    }

    // CLT side
    let inss = tables.inss.contribution(input.clt_gross_salary);
    let irrf = tables
        .irrf
        .withholding(input.clt_gross_salary, inss, input.clt_dependents)
        .tax;
    let net_salary = input.clt_gross_salary - inss - irrf;
    let fgts = input.clt_gross_salary * FGTS_RATE;
    let clt_monthly = net_salary + fgts + input.clt_benefits;
    let clt_annual =
        (net_salary + fgts) * CLT_ANNUAL_FACTOR + input.clt_benefits * 12.0;

    let clt = CltSide {
        net_salary,
        inss,
        irrf,
        fgts,
        benefits: input.clt_benefits,
        monthly_total: clt_monthly,
        annual_total: clt_annual,
    };

    // PJ side
    let regime_tax = match input.pj_regime {
        PjRegime::Mei => MEI_DAS_FIXED,
        PjRegime::SimplesAnexo3 => input.pj_monthly_billing * 0.06,
        PjRegime::SimplesAnexo5 => input.pj_monthly_billing * 0.155,
    };

    let pro_labore_inss = input.pj_pro_labore * PRO_LABORE_INSS_RATE;
    let pro_labore_irrf = tables
        .irrf
        .withholding(input.pj_pro_labore, pro_labore_inss, 0)
        .tax;

    let pj_monthly = input.pj_monthly_billing
        - regime_tax
        - pro_labore_inss
        - pro_labore_irrf
        - input.pj_accounting_fee;
    let pj_annual = pj_monthly * 12.0;

    let pj = PjSide {
        regime_tax,
        pro_labore_inss,
        pro_labore_irrf,
        accounting_fee: input.pj_accounting_fee,
        monthly_total: pj_monthly,
        annual_total: pj_annual,
    };

    let winner = if pj_monthly > clt_monthly { Regime::Pj } else { Regime::Clt };

    Ok(CltPjComparison {
        monthly_difference: (pj_monthly - clt_monthly).abs(),
        annual_difference: (pj_annual - clt_annual).abs(),
        clt,
        pj,
        winner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input() -> CltPjInput {
        CltPjInput {
            clt_gross_salary: 5000.0,
            clt_benefits: 0.0,
            clt_dependents: 0,
            pj_monthly_billing: 5000.0,
            pj_regime: PjRegime::Mei,
            pj_pro_labore: 1412.0,
            pj_accounting_fee: 100.0,
        }
    }

    #[test]
    fn test_mei_beats_clt_at_equal_amounts() {
        let tables = Tables::default_2024();
        let result = compare(&tables, &input()).unwrap();

        // CLT: 5000 - 518.82 INSS - 343.43 IRRF (simplified) + 400 FGTS
        assert_abs_diff_eq!(result.clt.inss, 518.819, epsilon = 1e-3);
        assert_abs_diff_eq!(result.clt.irrf, 343.43, epsilon = 1e-2);
        assert_abs_diff_eq!(result.clt.fgts, 400.0, epsilon = 1e-9);

        // PJ: 5000 - 75 DAS - 155.32 INSS - 0 IRRF (exempt base) - 100
        assert_abs_diff_eq!(result.pj.regime_tax, 75.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.pj.pro_labore_inss, 155.32, epsilon = 1e-6);
        assert_eq!(result.pj.pro_labore_irrf, 0.0);

        assert_eq!(result.winner, Regime::Pj);
        assert_abs_diff_eq!(
            result.monthly_difference,
            result.pj.monthly_total - result.clt.monthly_total,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_anexo5_rate_erodes_the_advantage() {
        let tables = Tables::default_2024();
        let mut i = input();
        i.pj_regime = PjRegime::SimplesAnexo5;
        let result = compare(&tables, &i).unwrap();

        assert_abs_diff_eq!(result.pj.regime_tax, 5000.0 * 0.155, epsilon = 1e-9);
        assert!(result.pj.monthly_total < compare(&tables, &input()).unwrap().pj.monthly_total);
    }

    #[test]
    fn test_clt_annual_includes_thirteenth_and_vacation() {
        let tables = Tables::default_2024();
        let mut i = input();
        i.clt_benefits = 800.0;
        let result = compare(&tables, &i).unwrap();

        let expected =
            (result.clt.net_salary + result.clt.fgts) * 13.33 + 800.0 * 12.0;
        assert_abs_diff_eq!(result.clt.annual_total, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_rejects_all_zero_input() {
        let tables = Tables::default_2024();
        let mut i = input();
        i.clt_gross_salary = 0.0;
        i.pj_monthly_billing = 0.0;
        assert!(compare(&tables, &i).is_err());
    }
}

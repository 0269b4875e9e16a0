//! Employment-related calculators: net salary, severance, employer cost,
//! CLT vs PJ comparison and raise analysis

pub mod clt_pj;
pub mod employer_cost;
pub mod net_salary;
pub mod raise;
pub mod severance;

pub use clt_pj::{CltPjComparison, CltPjInput, CltSide, PjRegime, PjSide, Regime};
pub use employer_cost::{EmployerCostInput, EmployerCostResult, EmployerRates};
pub use net_salary::{AnnualTotals, NetSalaryInput, NetSalaryResult};
pub use raise::{RaiseInput, RaiseResult, TakeHome};
pub use severance::{
    EntryKind, NoticeKind, SeveranceEntry, SeveranceInput, SeveranceResult, TerminationKind,
};

/// Gross salary at or below this amount is withheld at zero under the
/// practical exemption rule (raise and employer-cost calculators only)
pub const PRACTICAL_EXEMPTION_LIMIT: f64 = 5000.00;

/// Monthly FGTS deposit rate on gross salary
pub const FGTS_RATE: f64 = 0.08;

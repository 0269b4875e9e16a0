//! Health calculators: adult BMI and WHO child growth assessment

pub mod bmi;
pub mod growth;

pub use bmi::{bmi, BmiClass, BmiResult, IDEAL_BMI_RANGE};
pub use growth::{
    AgeBreakdown, GrowthAssessment, GrowthInput, IndicatorResult, DAYS_PER_MONTH, TERM_WEEKS,
};

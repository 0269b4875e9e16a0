//! WHO child growth assessment
//!
//! Computes the chronological (and, for premature babies, corrected) age,
//! then scores each supplied measurement against the 0-24 month growth
//! reference. Babies whose corrected age is still negative have not
//! reached term; the WHO curves do not apply to them yet and the
//! assessment says so instead of producing Z-scores.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::tables::{GrowthMetric, GrowthReference, Sex, ZClassification};

/// Mean month length used to convert ages in days to months
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Gestational weeks of a term birth
pub const TERM_WEEKS: f64 = 40.0;

/// Inputs for a growth assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthInput {
    pub sex: Sex,
    pub birth: NaiveDate,
    pub measured: NaiveDate,
    pub weight_kg: Option<f64>,
    pub length_cm: Option<f64>,
    pub head_circumference_cm: Option<f64>,
    /// Gestational weeks at birth; below 40 triggers age correction
    pub gestational_weeks: Option<f64>,
}

/// An age expressed as whole months plus leftover days
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub months: u32,
    pub days: u32,
}

impl AgeBreakdown {
    fn from_days(days: i64) -> Self {
        let months = (days as f64 / DAYS_PER_MONTH).floor() as u32;
        let leftover = (days as f64 % DAYS_PER_MONTH).floor() as u32;
        Self { months, days: leftover }
    }
}

/// Score of one measurement against the reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub metric: GrowthMetric,
    pub measurement: f64,
    pub z_score: f64,
    pub classification: ZClassification,
}

/// Outcome of a growth assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GrowthAssessment {
    /// Corrected age is still negative: the reference does not apply yet
    PreTerm {
        chronological_age: AgeBreakdown,
        /// Approximate weeks remaining until the term-equivalent date
        weeks_to_term: u32,
    },
    /// Scored assessment at (possibly corrected) age
    Report {
        chronological_age: AgeBreakdown,
        corrected_age: Option<AgeBreakdown>,
        age_months: f64,
        indicators: Vec<IndicatorResult>,
    },
}

/// Assess a child's measurements against the growth reference
pub fn assess(
    reference: &GrowthReference,
    input: &GrowthInput,
) -> Result<GrowthAssessment, CalcError> {
    if input.measured < input.birth {
        return Err(CalcError::MeasurementBeforeBirth {
            birth: input.birth,
            measured: input.measured,
        });
    }

    let total_days = (input.measured - input.birth).num_days();
    let chronological_age = AgeBreakdown::from_days(total_days);

    // Prematurity correction: discount the weeks missing to term
    let mut corrected_days = total_days;
    let mut corrected = false;
    if let Some(weeks) = input.gestational_weeks {
        if weeks > 0.0 && weeks < TERM_WEEKS {
            let discount = ((TERM_WEEKS - weeks) * 7.0) as i64;
            corrected_days = total_days - discount;
            corrected = true;
            debug!(
                "prematurity correction: {} days chronological, {} corrected",
                total_days, corrected_days
            );
        }
    }

    if corrected_days < 0 {
        let weeks_to_term = ((-corrected_days) as f64 / 7.0).ceil() as u32;
        return Ok(GrowthAssessment::PreTerm {
            chronological_age,
            weeks_to_term,
        });
    }

    let age_months = corrected_days as f64 / DAYS_PER_MONTH;

    let candidates = [
        (GrowthMetric::WeightForAge, input.weight_kg),
        (GrowthMetric::LengthForAge, input.length_cm),
        (GrowthMetric::HeadCircumferenceForAge, input.head_circumference_cm),
    ];

    let mut indicators = Vec::new();
    for (metric, measurement) in candidates {
        let Some(value) = measurement else { continue };
        if value <= 0.0 {
            return Err(CalcError::InvalidInput(
                "measurements must be positive".into(),
            ));
        }
        if let Some(z) = reference.z_score(input.sex, metric, age_months, value) {
            indicators.push(IndicatorResult {
                metric,
                measurement: value,
                z_score: z,
                classification: ZClassification::from_z(z),
            });
        }
    }

    if indicators.is_empty() {
        return Err(CalcError::InvalidInput(
            "at least one measurement is required".into(),
        ));
    }

    Ok(GrowthAssessment::Report {
        chronological_age,
        corrected_age: corrected.then(|| AgeBreakdown::from_days(corrected_days)),
        age_months,
        indicators,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn newborn_boy(weight: f64) -> GrowthInput {
        GrowthInput {
            sex: Sex::Male,
            birth: date(2025, 1, 15),
            measured: date(2025, 1, 15),
            weight_kg: Some(weight),
            length_cm: None,
            head_circumference_cm: None,
            gestational_weeks: None,
        }
    }

    #[test]
    fn test_newborn_at_median_scores_zero() {
        let reference = GrowthReference::who_standard();
        let result = assess(&reference, &newborn_boy(3.3464)).unwrap();

        let GrowthAssessment::Report { age_months, indicators, corrected_age, .. } = result
        else {
            panic!("expected a scored report");
        };
        assert_abs_diff_eq!(age_months, 0.0, epsilon = 1e-9);
        assert!(corrected_age.is_none());
        assert_eq!(indicators.len(), 1);
        assert_abs_diff_eq!(indicators[0].z_score, 0.0, epsilon = 1e-9);
        assert_eq!(indicators[0].classification, ZClassification::Adequate);
    }

    #[test]
    fn test_low_weight_flags_below_reference() {
        let reference = GrowthReference::who_standard();
        let result = assess(&reference, &newborn_boy(2.0)).unwrap();

        let GrowthAssessment::Report { indicators, .. } = result else {
            panic!("expected a scored report");
        };
        assert!(indicators[0].z_score < -2.0);
        assert!(matches!(
            indicators[0].classification,
            ZClassification::Low | ZClassification::SeverelyLow
        ));
    }

    #[test]
    fn test_all_three_indicators() {
        let reference = GrowthReference::who_standard();
        let input = GrowthInput {
            sex: Sex::Female,
            birth: date(2024, 7, 1),
            measured: date(2025, 1, 1),
            weight_kg: Some(7.3),
            length_cm: Some(65.7),
            head_circumference_cm: Some(42.2),
            gestational_weeks: None,
        };
        let result = assess(&reference, &input).unwrap();

        let GrowthAssessment::Report { indicators, age_months, .. } = result else {
            panic!("expected a scored report");
        };
        assert_eq!(indicators.len(), 3);
        // 184 days is just past six reference months
        assert_abs_diff_eq!(age_months, 184.0 / DAYS_PER_MONTH, epsilon = 1e-9);
        for indicator in &indicators {
            assert_eq!(indicator.classification, ZClassification::Adequate);
        }
    }

    #[test]
    fn test_prematurity_correction_shifts_age() {
        let reference = GrowthReference::who_standard();
        let input = GrowthInput {
            sex: Sex::Male,
            birth: date(2024, 10, 1),
            measured: date(2025, 1, 1),
            weight_kg: Some(4.5),
            length_cm: None,
            head_circumference_cm: None,
            gestational_weeks: Some(34.0),
        };
        let result = assess(&reference, &input).unwrap();

        let GrowthAssessment::Report { corrected_age, age_months, .. } = result else {
            panic!("expected a scored report");
        };
        // 92 chronological days minus (40-34)*7 = 50 corrected days
        let corrected = corrected_age.unwrap();
        assert_eq!(corrected.months, 1);
        assert_abs_diff_eq!(age_months, 50.0 / DAYS_PER_MONTH, epsilon = 1e-9);
    }

    #[test]
    fn test_pre_term_baby_gets_no_scores() {
        let reference = GrowthReference::who_standard();
        let input = GrowthInput {
            sex: Sex::Female,
            birth: date(2025, 1, 1),
            measured: date(2025, 1, 31),
            weight_kg: Some(2.5),
            length_cm: None,
            head_circumference_cm: None,
            gestational_weeks: Some(32.0),
        };
        let result = assess(&reference, &input).unwrap();

        let GrowthAssessment::PreTerm { weeks_to_term, .. } = result else {
            panic!("expected a pre-term outcome");
        };
        // 30 days - 56 correction days = -26 days, about 4 weeks short
        assert_eq!(weeks_to_term, 4);
    }

    #[test]
    fn test_age_breakdown() {
        let age = AgeBreakdown::from_days(200);
        assert_eq!(age.months, 6);
        assert_eq!(age.days, 17);
    }

    #[test]
    fn test_rejects_measurement_before_birth() {
        let reference = GrowthReference::who_standard();
        let mut input = newborn_boy(3.3);
        input.measured = date(2024, 12, 31);
        assert!(matches!(
            assess(&reference, &input),
            Err(CalcError::MeasurementBeforeBirth { .. })
        ));
    }

    #[test]
    fn test_rejects_no_measurements() {
        let reference = GrowthReference::who_standard();
        let mut input = newborn_boy(3.3);
        input.weight_kg = None;
        assert!(assess(&reference, &input).is_err());
    }
}

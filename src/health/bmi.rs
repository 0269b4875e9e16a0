//! Body mass index with the adult classification bands

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Reference band considered healthy for adults
pub const IDEAL_BMI_RANGE: (f64, f64) = (18.5, 25.0);

/// Adult BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiClass {
    SevereThinness,
    ModerateThinness,
    MildThinness,
    Normal,
    Overweight,
    ObesityGrade1,
    ObesityGrade2,
    ObesityGrade3,
}

impl BmiClass {
    /// Classify a BMI value
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 16.0 {
            BmiClass::SevereThinness
        } else if bmi <= 16.9 {
            BmiClass::ModerateThinness
        } else if bmi <= 18.4 {
            BmiClass::MildThinness
        } else if bmi <= 24.9 {
            BmiClass::Normal
        } else if bmi <= 29.9 {
            BmiClass::Overweight
        } else if bmi <= 34.9 {
            BmiClass::ObesityGrade1
        } else if bmi <= 39.9 {
            BmiClass::ObesityGrade2
        } else {
            BmiClass::ObesityGrade3
        }
    }
}

/// BMI value and its classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub class: BmiClass,
}

/// Compute BMI from weight in kilograms and height in centimeters
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<BmiResult, CalcError> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(CalcError::InvalidInput(
            "weight and height must be positive".into(),
        ));
    }

    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);

    Ok(BmiResult {
        bmi: value,
        class: BmiClass::from_bmi(value),
    })
}

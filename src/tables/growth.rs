//! WHO child growth reference (0-24 months) and LMS Z-score evaluation
//!
//! Each metric stores one (L, M, S) triple per integer month. Fractional
//! ages interpolate the parameters linearly between the two surrounding
//! anchors before applying the LMS transform:
//!
//!   z = ((x / M)^L - 1) / (L * S)

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Sex of the child, selecting the reference dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Growth metric tracked by the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthMetric {
    WeightForAge,
    LengthForAge,
    HeadCircumferenceForAge,
}

/// Box-Cox power, median and coefficient of variation for one month
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LmsPoint {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

/// Z-score classification bands used by the assessment cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZClassification {
    SeverelyLow,
    Low,
    Adequate,
    High,
    SeverelyHigh,
}

impl ZClassification {
    /// Band for a Z-score: -3 and -2 open below, 2 and 3 closed above
    pub fn from_z(z: f64) -> Self {
        if z < -3.0 {
            ZClassification::SeverelyLow
        } else if z < -2.0 {
            ZClassification::Low
        } else if z <= 2.0 {
            ZClassification::Adequate
        } else if z <= 3.0 {
            ZClassification::High
        } else {
            ZClassification::SeverelyHigh
        }
    }
}

/// LMS anchors for the three metrics of one sex, indexed by month 0..=24
#[derive(Debug, Clone)]
struct SexReference {
    weight: Vec<LmsPoint>,
    length: Vec<LmsPoint>,
    head: Vec<LmsPoint>,
}

/// Complete 0-24 month growth reference for both sexes
#[derive(Debug, Clone)]
pub struct GrowthReference {
    boys: SexReference,
    girls: SexReference,
}

/// Highest anchored month; older ages clamp to it
pub const MAX_REFERENCE_MONTH: usize = 24;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

impl GrowthReference {
    /// Embedded WHO Child Growth Standards, months 0-24
    pub fn who_standard() -> Self {
        Self {
            boys: SexReference {
                weight: triples(&BOYS_WEIGHT),
                length: anchored_unit_l(&BOYS_LENGTH),
                head: anchored_unit_l(&BOYS_HEAD),
            },
            girls: SexReference {
                weight: triples(&GIRLS_WEIGHT),
                length: anchored_unit_l(&GIRLS_LENGTH),
                head: anchored_unit_l(&GIRLS_HEAD),
            },
        }
    }

    /// Build from loaded rows, validating that every (sex, metric) series
    /// covers months 0..=24 in order
    pub fn from_points(
        points: impl IntoIterator<Item = (Sex, GrowthMetric, u32, LmsPoint)>,
    ) -> Result<Self, TableError> {
        let mut series: [[Vec<LmsPoint>; 3]; 2] = Default::default();

        for (sex, metric, month, point) in points {
            let si = match sex {
                Sex::Male => 0,
                Sex::Female => 1,
            };
            let mi = match metric {
                GrowthMetric::WeightForAge => 0,
                GrowthMetric::LengthForAge => 1,
                GrowthMetric::HeadCircumferenceForAge => 2,
            };
            if month as usize != series[si][mi].len() {
                return Err(TableError::Validation(format!(
                    "LMS months must be contiguous from 0; got month {} out of order",
                    month
                )));
            }
            if point.m <= 0.0 || point.s <= 0.0 {
                return Err(TableError::Validation(format!(
                    "LMS median and variation must be positive at month {}",
                    month
                )));
            }
            series[si][mi].push(point);
        }

        for sex_series in &series {
            for metric_series in sex_series {
                if metric_series.len() != MAX_REFERENCE_MONTH + 1 {
                    return Err(TableError::Validation(format!(
                        "each LMS series must anchor months 0..={}, got {} rows",
                        MAX_REFERENCE_MONTH,
                        metric_series.len()
                    )));
                }
            }
        }

        let [boys, girls] = series;
        let [bw, bl, bh] = boys;
        let [gw, gl, gh] = girls;
        Ok(Self {
            boys: SexReference { weight: bw, length: bl, head: bh },
            girls: SexReference { weight: gw, length: gl, head: gh },
        })
    }

    fn series(&self, sex: Sex, metric: GrowthMetric) -> &[LmsPoint] {
        let by_sex = match sex {
            Sex::Male => &self.boys,
            Sex::Female => &self.girls,
        };
        match metric {
            GrowthMetric::WeightForAge => &by_sex.weight,
            GrowthMetric::LengthForAge => &by_sex.length,
            GrowthMetric::HeadCircumferenceForAge => &by_sex.head,
        }
    }

    /// Interpolated LMS parameters at a fractional age in months
    ///
    /// Ages past the last anchor clamp to month 24; negative ages return
    /// `None` (the caller handles pre-term babies before lookup).
    pub fn lms_at(&self, sex: Sex, metric: GrowthMetric, age_months: f64) -> Option<LmsPoint> {
        if !age_months.is_finite() || age_months < 0.0 {
            return None;
        }
        let series = self.series(sex, metric);

        let floor = (age_months.floor() as usize).min(MAX_REFERENCE_MONTH);
        let ceil = (age_months.ceil() as usize).min(MAX_REFERENCE_MONTH);
        let lower = series[floor];
        let upper = series[ceil];
        let fraction = age_months - floor as f64;

        Some(LmsPoint {
            l: lerp(lower.l, upper.l, fraction),
            m: lerp(lower.m, upper.m, fraction),
            s: lerp(lower.s, upper.s, fraction),
        })
    }

    /// Z-score of a measurement at a fractional age in months
    pub fn z_score(
        &self,
        sex: Sex,
        metric: GrowthMetric,
        age_months: f64,
        measurement: f64,
    ) -> Option<f64> {
        if measurement <= 0.0 {
            return None;
        }
        let LmsPoint { l, m, s } = self.lms_at(sex, metric, age_months)?;
        Some(((measurement / m).powf(l) - 1.0) / (l * s))
    }
}

fn triples(raw: &[(f64, f64, f64)]) -> Vec<LmsPoint> {
    raw.iter().map(|&(l, m, s)| LmsPoint { l, m, s }).collect()
}

fn anchored_unit_l(raw: &[(f64, f64)]) -> Vec<LmsPoint> {
    raw.iter().map(|&(m, s)| LmsPoint { l: 1.0, m, s }).collect()
}

// WHO weight-for-age, boys, months 0-24: (L, M, S)
const BOYS_WEIGHT: [(f64, f64, f64); 25] = [
    (0.3487, 3.3464, 0.14602),
    (0.2297, 4.4709, 0.13395),
    (0.1970, 5.5675, 0.12385),
    (0.1738, 6.3762, 0.11727),
    (0.1553, 7.0023, 0.11316),
    (0.1395, 7.5105, 0.11080),
    (0.1257, 7.9340, 0.10958),
    (0.1134, 8.2970, 0.10902),
    (0.1021, 8.6151, 0.10882),
    (0.0917, 8.9014, 0.10881),
    (0.0820, 9.1649, 0.10891),
    (0.0730, 9.4122, 0.10906),
    (0.0644, 9.6479, 0.10925),
    (0.0563, 9.8749, 0.10949),
    (0.0487, 10.0953, 0.10976),
    (0.0413, 10.3108, 0.11007),
    (0.0343, 10.5228, 0.11041),
    (0.0275, 10.7319, 0.11079),
    (0.0211, 10.9385, 0.11119),
    (0.0148, 11.1430, 0.11164),
    (0.0087, 11.3462, 0.11211),
    (0.0029, 11.5486, 0.11261),
    (-0.0028, 11.7504, 0.11314),
    (-0.0083, 11.9514, 0.11369),
    (-0.0137, 12.1515, 0.11426),
];

// WHO weight-for-age, girls, months 0-24: (L, M, S)
const GIRLS_WEIGHT: [(f64, f64, f64); 25] = [
    (0.3809, 3.2322, 0.14171),
    (0.1714, 4.1873, 0.13724),
    (0.0962, 5.1282, 0.13000),
    (0.0402, 5.8458, 0.12619),
    (-0.0050, 6.4237, 0.12402),
    (-0.0430, 6.8985, 0.12274),
    (-0.0756, 7.2970, 0.12204),
    (-0.1039, 7.6422, 0.12178),
    (-0.1288, 7.9487, 0.12181),
    (-0.1507, 8.2254, 0.12199),
    (-0.1700, 8.4800, 0.12223),
    (-0.1872, 8.7192, 0.12247),
    (-0.2024, 8.9481, 0.12268),
    (-0.2158, 9.1699, 0.12283),
    (-0.2278, 9.3870, 0.12294),
    (-0.2384, 9.6008, 0.12299),
    (-0.2478, 9.8124, 0.12303),
    (-0.2562, 10.0226, 0.12306),
    (-0.2637, 10.2315, 0.12309),
    (-0.2703, 10.4393, 0.12315),
    (-0.2762, 10.6464, 0.12323),
    (-0.2815, 10.8534, 0.12335),
    (-0.2862, 11.0608, 0.12350),
    (-0.2903, 11.2688, 0.12369),
    (-0.2941, 11.4775, 0.12390),
];

// WHO length-for-age, boys, months 0-24: (M, S); L is 1 throughout
const BOYS_LENGTH: [(f64, f64); 25] = [
    (49.8842, 0.03795),
    (54.7244, 0.03557),
    (58.4249, 0.03424),
    (61.4292, 0.03328),
    (63.8860, 0.03257),
    (65.9026, 0.03204),
    (67.6236, 0.03165),
    (69.1645, 0.03139),
    (70.5994, 0.03124),
    (71.9687, 0.03117),
    (73.2812, 0.03118),
    (74.5388, 0.03125),
    (75.7488, 0.03137),
    (76.9186, 0.03154),
    (78.0497, 0.03174),
    (79.1458, 0.03197),
    (80.2113, 0.03222),
    (81.2487, 0.03250),
    (82.2587, 0.03279),
    (83.2418, 0.03310),
    (84.1996, 0.03342),
    (85.1348, 0.03376),
    (86.0477, 0.03410),
    (86.9410, 0.03445),
    (87.8161, 0.03479),
];

// WHO length-for-age, girls, months 0-24: (M, S); L is 1 throughout
const GIRLS_LENGTH: [(f64, f64); 25] = [
    (49.1477, 0.03790),
    (53.6872, 0.03640),
    (57.0673, 0.03568),
    (59.8029, 0.03520),
    (62.0899, 0.03486),
    (64.0301, 0.03463),
    (65.7311, 0.03448),
    (67.2873, 0.03441),
    (68.7498, 0.03440),
    (70.1435, 0.03444),
    (71.4818, 0.03452),
    (72.7710, 0.03464),
    (74.0150, 0.03479),
    (75.2176, 0.03496),
    (76.3817, 0.03514),
    (77.5099, 0.03534),
    (78.6055, 0.03555),
    (79.6710, 0.03576),
    (80.7079, 0.03598),
    (81.7182, 0.03620),
    (82.7036, 0.03643),
    (83.6654, 0.03666),
    (84.6040, 0.03688),
    (85.5202, 0.03711),
    (86.4153, 0.03734),
];

// WHO head-circumference-for-age, boys, months 0-24: (M, S); L is 1
const BOYS_HEAD: [(f64, f64); 25] = [
    (34.4618, 0.03686),
    (37.2759, 0.03133),
    (39.1285, 0.02997),
    (40.5135, 0.02918),
    (41.6317, 0.02868),
    (42.5576, 0.02837),
    (43.3306, 0.02817),
    (43.9803, 0.02804),
    (44.5300, 0.02796),
    (44.9998, 0.02792),
    (45.4051, 0.02790),
    (45.7573, 0.02789),
    (46.0661, 0.02789),
    (46.3395, 0.02789),
    (46.5844, 0.02791),
    (46.8060, 0.02792),
    (47.0088, 0.02795),
    (47.1962, 0.02797),
    (47.3711, 0.02800),
    (47.5357, 0.02803),
    (47.6919, 0.02806),
    (47.8408, 0.02810),
    (47.9833, 0.02813),
    (48.1201, 0.02817),
    (48.2515, 0.02821),
];

// WHO head-circumference-for-age, girls, months 0-24: (M, S); L is 1
const GIRLS_HEAD: [(f64, f64); 25] = [
    (33.8787, 0.03496),
    (36.5463, 0.03210),
    (38.2521, 0.03168),
    (39.5328, 0.03140),
    (40.5817, 0.03119),
    (41.4590, 0.03102),
    (42.1995, 0.03087),
    (42.8290, 0.03075),
    (43.3671, 0.03063),
    (43.8300, 0.03053),
    (44.2319, 0.03044),
    (44.5844, 0.03035),
    (44.8965, 0.03027),
    (45.1752, 0.03019),
    (45.4265, 0.03012),
    (45.6551, 0.03006),
    (45.8650, 0.02999),
    (46.0598, 0.02993),
    (46.2424, 0.02987),
    (46.4152, 0.02982),
    (46.5801, 0.02977),
    (46.7384, 0.02972),
    (46.8913, 0.02967),
    (47.0391, 0.02962),
    (47.1822, 0.02957),
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_z_is_zero_at_median() {
        let reference = GrowthReference::who_standard();

        let z = reference
            .z_score(Sex::Male, GrowthMetric::WeightForAge, 0.0, 3.3464)
            .unwrap();
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-9);

        let z = reference
            .z_score(Sex::Female, GrowthMetric::LengthForAge, 12.0, 74.0150)
            .unwrap();
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_interpolation_midpoint() {
        let reference = GrowthReference::who_standard();

        let lms = reference
            .lms_at(Sex::Male, GrowthMetric::WeightForAge, 0.5)
            .unwrap();
        assert_abs_diff_eq!(lms.l, (0.3487 + 0.2297) / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lms.m, (3.3464 + 4.4709) / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lms.s, (0.14602 + 0.13395) / 2.0, epsilon = 1e-12);

        // A measurement at the interpolated median scores zero
        let z = reference
            .z_score(Sex::Male, GrowthMetric::WeightForAge, 0.5, lms.m)
            .unwrap();
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_integer_month_is_exact_anchor() {
        let reference = GrowthReference::who_standard();
        let lms = reference
            .lms_at(Sex::Female, GrowthMetric::HeadCircumferenceForAge, 6.0)
            .unwrap();
        assert_abs_diff_eq!(lms.m, 42.1995, epsilon = 1e-12);
        assert_abs_diff_eq!(lms.l, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clamps_past_last_anchor() {
        let reference = GrowthReference::who_standard();
        let at_24 = reference
            .lms_at(Sex::Male, GrowthMetric::LengthForAge, 24.0)
            .unwrap();
        let past = reference
            .lms_at(Sex::Male, GrowthMetric::LengthForAge, 30.0)
            .unwrap();
        assert_abs_diff_eq!(at_24.m, past.m, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_age_rejected() {
        let reference = GrowthReference::who_standard();
        assert!(reference
            .lms_at(Sex::Male, GrowthMetric::WeightForAge, -0.5)
            .is_none());
    }

    #[test]
    fn test_z_sign_matches_measurement_side() {
        let reference = GrowthReference::who_standard();
        let below = reference
            .z_score(Sex::Female, GrowthMetric::WeightForAge, 6.0, 6.0)
            .unwrap();
        let above = reference
            .z_score(Sex::Female, GrowthMetric::WeightForAge, 6.0, 8.5)
            .unwrap();
        assert!(below < 0.0);
        assert!(above > 0.0);
    }

    #[test]
    fn test_classification_bands() {
        assert_eq!(ZClassification::from_z(-3.5), ZClassification::SeverelyLow);
        assert_eq!(ZClassification::from_z(-3.0), ZClassification::Low);
        assert_eq!(ZClassification::from_z(-2.5), ZClassification::Low);
        assert_eq!(ZClassification::from_z(-2.0), ZClassification::Adequate);
        assert_eq!(ZClassification::from_z(0.0), ZClassification::Adequate);
        assert_eq!(ZClassification::from_z(2.0), ZClassification::Adequate);
        assert_eq!(ZClassification::from_z(2.5), ZClassification::High);
        assert_eq!(ZClassification::from_z(3.0), ZClassification::High);
        assert_eq!(ZClassification::from_z(3.1), ZClassification::SeverelyHigh);
    }

    #[test]
    fn test_medians_increase_with_age() {
        let reference = GrowthReference::who_standard();
        for month in 0..MAX_REFERENCE_MONTH {
            let a = reference
                .lms_at(Sex::Male, GrowthMetric::WeightForAge, month as f64)
                .unwrap();
            let b = reference
                .lms_at(Sex::Male, GrowthMetric::WeightForAge, month as f64 + 1.0)
                .unwrap();
            assert!(b.m > a.m, "median not increasing at month {}", month);
        }
    }
}

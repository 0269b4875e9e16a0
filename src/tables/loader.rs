//! CSV-based table loader
//!
//! Loads bracket and growth-reference overrides from CSV files in
//! data/tables/. The embedded defaults remain the source of truth when no
//! override directory is supplied.

use std::fs::File;
use std::path::Path;

use log::info;

use crate::error::TableError;
use crate::tables::growth::{GrowthMetric, LmsPoint, Sex};
use crate::tables::inss::InssBracket;
use crate::tables::irrf::IrrfBracket;

/// Default path to the tables directory
pub const DEFAULT_TABLES_PATH: &str = "data/tables";

fn parse_field<T: std::str::FromStr>(
    record: &csv::StringRecord,
    index: usize,
    file: &str,
) -> Result<T, TableError> {
    record
        .get(index)
        .ok_or_else(|| TableError::Malformed(format!("{}: missing column {}", file, index)))?
        .trim()
        .parse()
        .map_err(|_| {
            TableError::Malformed(format!(
                "{}: cannot parse column {} of row {:?}",
                file, index, record
            ))
        })
}

/// Load INSS brackets from `inss_brackets.csv` (upper_limit,rate)
pub fn load_inss_brackets(path: &Path) -> Result<Vec<InssBracket>, TableError> {
    let file = File::open(path.join("inss_brackets.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut brackets = Vec::new();
    for result in reader.records() {
        let record = result?;
        brackets.push(InssBracket {
            upper_limit: parse_field(&record, 0, "inss_brackets.csv")?,
            rate: parse_field(&record, 1, "inss_brackets.csv")?,
        });
    }

    info!("loaded {} INSS brackets", brackets.len());
    Ok(brackets)
}

/// Load IRRF brackets from `irrf_brackets.csv` (upper_limit,rate,deduction)
///
/// An empty limit field marks the unbounded top bracket.
pub fn load_irrf_brackets(path: &Path) -> Result<Vec<IrrfBracket>, TableError> {
    let file = File::open(path.join("irrf_brackets.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut brackets = Vec::new();
    for result in reader.records() {
        let record = result?;
        let limit_field = record
            .get(0)
            .ok_or_else(|| TableError::Malformed("irrf_brackets.csv: missing limit".into()))?
            .trim();
        let upper_limit = if limit_field.is_empty() {
            f64::INFINITY
        } else {
            limit_field.parse().map_err(|_| {
                TableError::Malformed(format!(
                    "irrf_brackets.csv: cannot parse limit {:?}",
                    limit_field
                ))
            })?
        };
        brackets.push(IrrfBracket {
            upper_limit,
            rate: parse_field(&record, 1, "irrf_brackets.csv")?,
            deduction: parse_field(&record, 2, "irrf_brackets.csv")?,
        });
    }

    info!("loaded {} IRRF brackets", brackets.len());
    Ok(brackets)
}

/// Load growth-reference rows from `who_lms.csv` (sex,metric,month,l,m,s)
pub fn load_who_lms(
    path: &Path,
) -> Result<Vec<(Sex, GrowthMetric, u32, LmsPoint)>, TableError> {
    let file = File::open(path.join("who_lms.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let sex = match record.get(0).map(str::trim) {
            Some("boys") => Sex::Male,
            Some("girls") => Sex::Female,
            other => {
                return Err(TableError::Malformed(format!(
                    "who_lms.csv: unknown sex {:?}",
                    other
                )))
            }
        };
        let metric = match record.get(1).map(str::trim) {
            Some("wfa") => GrowthMetric::WeightForAge,
            Some("lfa") => GrowthMetric::LengthForAge,
            Some("hcfa") => GrowthMetric::HeadCircumferenceForAge,
            other => {
                return Err(TableError::Malformed(format!(
                    "who_lms.csv: unknown metric {:?}",
                    other
                )))
            }
        };
        let month: u32 = parse_field(&record, 2, "who_lms.csv")?;
        let point = LmsPoint {
            l: parse_field(&record, 3, "who_lms.csv")?,
            m: parse_field(&record, 4, "who_lms.csv")?,
            s: parse_field(&record, 5, "who_lms.csv")?,
        };
        rows.push((sex, metric, month, point));
    }

    info!("loaded {} LMS anchor rows", rows.len());
    Ok(rows)
}

/// All table data loaded from one directory
pub struct LoadedTables {
    pub inss_brackets: Vec<InssBracket>,
    pub irrf_brackets: Vec<IrrfBracket>,
    pub who_lms: Vec<(Sex, GrowthMetric, u32, LmsPoint)>,
}

impl LoadedTables {
    /// Load from the default directory
    pub fn load_default() -> Result<Self, TableError> {
        Self::load_from(Path::new(DEFAULT_TABLES_PATH))
    }

    /// Load from a specific directory
    pub fn load_from(path: &Path) -> Result<Self, TableError> {
        Ok(Self {
            inss_brackets: load_inss_brackets(path)?,
            irrf_brackets: load_irrf_brackets(path)?,
            who_lms: load_who_lms(path)?,
        })
    }
}

//! Reference tables consumed by the calculators: INSS and IRRF brackets
//! and the WHO growth standards

mod growth;
mod inss;
mod irrf;
pub mod loader;

pub use growth::{
    GrowthMetric, GrowthReference, LmsPoint, Sex, ZClassification, MAX_REFERENCE_MONTH,
};
pub use inss::{InssAssessment, InssBracket, InssBracketLine, InssTable};
pub use irrf::{IrrfAssessment, IrrfBracket, IrrfTable, DEPENDENT_DEDUCTION, SIMPLIFIED_DEDUCTION};
pub use loader::LoadedTables;

use std::path::Path;

use crate::error::TableError;

/// Container for every table a calculation needs
#[derive(Debug, Clone)]
pub struct Tables {
    pub inss: InssTable,
    pub irrf: IrrfTable,
    pub growth: GrowthReference,
}

impl Tables {
    /// Embedded 2024/2025 tables and the WHO standard reference
    pub fn default_2024() -> Self {
        Self {
            inss: InssTable::table_2024(),
            irrf: IrrfTable::table_2024(),
            growth: GrowthReference::who_standard(),
        }
    }

    /// Load tables from CSV files in the default location (data/tables/)
    pub fn from_csv() -> Result<Self, TableError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_TABLES_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, TableError> {
        let loaded = LoadedTables::load_from(path)?;

        Ok(Self {
            inss: InssTable::new(loaded.inss_brackets)?,
            irrf: IrrfTable::new(loaded.irrf_brackets)?,
            growth: GrowthReference::from_points(loaded.who_lms)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_csv_tables_match_embedded() {
        let embedded = Tables::default_2024();
        let loaded = Tables::from_csv().expect("data/tables should load");

        for gross in [1000.0, 3000.0, 5000.0, 12_000.0] {
            assert_abs_diff_eq!(
                embedded.inss.contribution(gross),
                loaded.inss.contribution(gross),
                epsilon = 1e-6
            );
            assert_abs_diff_eq!(
                embedded.irrf.withholding(gross, 0.0, 0).tax,
                loaded.irrf.withholding(gross, 0.0, 0).tax,
                epsilon = 1e-6
            );
        }

        let z_embedded = embedded
            .growth
            .z_score(Sex::Male, GrowthMetric::WeightForAge, 3.5, 6.5)
            .unwrap();
        let z_loaded = loaded
            .growth
            .z_score(Sex::Male, GrowthMetric::WeightForAge, 3.5, 6.5)
            .unwrap();
        assert_abs_diff_eq!(z_embedded, z_loaded, epsilon = 1e-9);
    }
}

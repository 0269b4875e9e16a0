//! Error types shared across the calculators and the table loader

use thiserror::Error;

/// Errors raised by calculator input validation
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("dismissal date {dismissal} precedes admission date {admission}")]
    DateOrder {
        admission: chrono::NaiveDate,
        dismissal: chrono::NaiveDate,
    },

    #[error("measurement date {measured} precedes birth date {birth}")]
    MeasurementBeforeBirth {
        birth: chrono::NaiveDate,
        measured: chrono::NaiveDate,
    },

    #[error("target amount is unreachable: no contributions and no interest growth")]
    UnreachableTarget,
}

/// Errors raised while loading or validating reference tables
#[derive(Error, Debug)]
pub enum TableError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV parsing error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("malformed table row: {0}")]
    Malformed(String),

    #[error("table validation failed: {0}")]
    Validation(String),
}

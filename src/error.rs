//! Error types for projections, comparison, and the report surfaces

use thiserror::Error;

/// Errors raised while projecting or comparing scenarios
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// Horizon must cover at least one year
    #[error("invalid horizon: {years} years (must be at least 1)")]
    InvalidHorizon { years: u32 },

    /// Closed-form amortization is undefined at a zero rate
    #[error("amortization formula divides by zero at a mortgage rate of 0")]
    DivideByZeroRate,

    /// Comparator inputs cover a different number of years
    #[error("horizon mismatch: real estate covers {real_estate} years, stocks cover {stocks} years")]
    HorizonMismatch { real_estate: usize, stocks: usize },

    /// Comparator inputs have the same length but different year indices
    #[error("year misaligned at row {row}: real estate year {real_estate_year}, stock year {stock_year}")]
    YearMisaligned {
        row: usize,
        real_estate_year: u32,
        stock_year: u32,
    },

    /// Basic numeric check failed
    #[error("invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;

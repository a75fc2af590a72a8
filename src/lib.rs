//! Wealth Comparison - buy real estate or invest in equities
//!
//! This library provides:
//! - A real estate projection (mortgage, appreciation, carrying costs, rent avoided)
//! - A stock market projection (returns, dividends, fees)
//! - A year-by-year comparison of net value under each scenario
//! - Console, CSV, and JSON report output

pub mod error;
pub mod projection;
pub mod comparison;
pub mod config;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use projection::{
    RealEstateConfig, RealEstateProjector, RealEstateYear, StockMarketConfig,
    StockMarketProjector, StockMarketYear, MortgageTerms,
};
pub use comparison::{compare, ComparisonRow, ComparisonSummary, Leader};
pub use config::ComparisonConfig;
pub use scenario::{ComparisonReport, ScenarioRunner};

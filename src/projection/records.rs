//! Year-by-year output records for both projections

use serde::{Deserialize, Serialize};

/// One year of the real estate projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealEstateYear {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Market value after this year's appreciation
    pub property_value: f64,

    /// Down payment plus principal repaid to date
    pub equity: f64,

    /// Rent avoided net of mortgage payments, accumulated
    pub cumulative_rent_savings: f64,

    /// Property tax, insurance, and maintenance for the year
    pub annual_expenses: f64,

    /// equity + cumulative rent savings - annual expenses
    pub net_value: f64,
}

/// One year of the stock market projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMarketYear {
    pub year: u32,
    pub portfolio_value: f64,
    pub dividend_income: f64,
    pub net_value: f64,
}

/// Common view over a projected year, used to line up the two series
pub trait YearRecord {
    fn year(&self) -> u32;
    fn net_value(&self) -> f64;
}

impl YearRecord for RealEstateYear {
    fn year(&self) -> u32 {
        self.year
    }

    fn net_value(&self) -> f64 {
        self.net_value
    }
}

impl YearRecord for StockMarketYear {
    fn year(&self) -> u32 {
        self.year
    }

    fn net_value(&self) -> f64 {
        self.net_value
    }
}

/// Summary of a single projection series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub total_years: u32,
    pub final_net_value: f64,
    pub peak_net_value: f64,
}

impl SeriesSummary {
    pub fn from_records<R: YearRecord>(records: &[R]) -> Self {
        let final_net_value = records.last().map(|r| r.net_value()).unwrap_or(0.0);
        let peak_net_value = records
            .iter()
            .map(|r| r.net_value())
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            total_years: records.len() as u32,
            final_net_value,
            peak_net_value: if records.is_empty() { 0.0 } else { peak_net_value },
        }
    }
}

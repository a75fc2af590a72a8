//! Side-by-side comparison of the two projections

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::projection::{RealEstateYear, StockMarketYear};

/// One year of both scenarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub year: u32,
    pub real_estate_net_value: f64,
    pub stock_market_net_value: f64,
}

impl ComparisonRow {
    /// Stocks minus real estate; positive when stocks are ahead
    pub fn advantage(&self) -> f64 {
        self.stock_market_net_value - self.real_estate_net_value
    }

    pub fn leader(&self) -> Leader {
        Leader::from_advantage(self.advantage())
    }
}

/// Which scenario is ahead in a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Leader {
    RealEstate,
    StockMarket,
    Tied,
}

impl Leader {
    fn from_advantage(advantage: f64) -> Self {
        if advantage > 0.0 {
            Leader::StockMarket
        } else if advantage < 0.0 {
            Leader::RealEstate
        } else {
            Leader::Tied
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Leader::RealEstate => "Real Estate",
            Leader::StockMarket => "Stock Market",
            Leader::Tied => "Tied",
        }
    }
}

/// Zip the two series by position into one row per year
///
/// # Errors
/// `HorizonMismatch` when the series differ in length, `YearMisaligned` when a
/// position carries different year indices.
pub fn compare(real_estate: &[RealEstateYear], stocks: &[StockMarketYear]) -> Result<Vec<ComparisonRow>> {
    if real_estate.len() != stocks.len() {
        return Err(ProjectionError::HorizonMismatch {
            real_estate: real_estate.len(),
            stocks: stocks.len(),
        });
    }

    real_estate
        .iter()
        .zip(stocks)
        .enumerate()
        .map(|(row, (re, st))| {
            if re.year != st.year {
                return Err(ProjectionError::YearMisaligned {
                    row,
                    real_estate_year: re.year,
                    stock_year: st.year,
                });
            }
            Ok(ComparisonRow {
                year: re.year,
                real_estate_net_value: re.net_value,
                stock_market_net_value: st.net_value,
            })
        })
        .collect()
}

/// Headline figures for a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub total_years: u32,
    pub final_real_estate_net_value: f64,
    pub final_stock_market_net_value: f64,

    /// Stocks minus real estate at the horizon
    pub final_advantage: f64,

    /// Leader at the horizon
    pub leader: Leader,

    /// First year the leader differs from the prior year's leader
    pub crossover_year: Option<u32>,
}

impl ComparisonSummary {
    pub fn from_rows(rows: &[ComparisonRow]) -> Self {
        let final_real_estate_net_value = rows.last().map(|r| r.real_estate_net_value).unwrap_or(0.0);
        let final_stock_market_net_value = rows.last().map(|r| r.stock_market_net_value).unwrap_or(0.0);
        let final_advantage = final_stock_market_net_value - final_real_estate_net_value;

        let crossover_year = rows
            .windows(2)
            .find(|pair| pair[0].leader() != pair[1].leader())
            .map(|pair| pair[1].year);

        Self {
            total_years: rows.len() as u32,
            final_real_estate_net_value,
            final_stock_market_net_value,
            final_advantage,
            leader: Leader::from_advantage(final_advantage),
            crossover_year,
        }
    }
}

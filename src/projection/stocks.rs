//! Stock market projection: invest the same savings in equities

use serde::{Deserialize, Serialize};

use super::real_estate::DEFAULT_YEARS;
use super::records::StockMarketYear;

/// Default total market return (annual)
pub const DEFAULT_ANNUAL_RETURN: f64 = 0.07;
/// Default dividend yield (annual)
pub const DEFAULT_DIVIDEND_YIELD: f64 = 0.02;
/// Default fund fees (annual)
pub const DEFAULT_FEES: f64 = 0.01;

/// Inputs for a stock market projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockMarketConfig {
    /// Starting portfolio value
    pub savings: f64,
    pub annual_return: f64,
    pub dividend_yield: f64,
    pub fees: f64,
    pub years: u32,
}

impl Default for StockMarketConfig {
    fn default() -> Self {
        Self {
            savings: 30_000.0,
            annual_return: DEFAULT_ANNUAL_RETURN,
            dividend_yield: DEFAULT_DIVIDEND_YIELD,
            fees: DEFAULT_FEES,
            years: DEFAULT_YEARS,
        }
    }
}

impl StockMarketConfig {
    /// Config with default rates for the given starting savings
    pub fn new(savings: f64) -> Self {
        Self {
            savings,
            ..Default::default()
        }
    }

    /// Annual growth rate net of fees, excluding dividends
    pub fn net_growth_rate(&self) -> f64 {
        self.annual_return - self.fees
    }
}

/// Stock market projection engine
pub struct StockMarketProjector {
    config: StockMarketConfig,
}

impl StockMarketProjector {
    pub fn new(config: StockMarketConfig) -> Self {
        Self { config }
    }

    /// Run the projection, one record per year in increasing year order
    ///
    /// Dividends and growth are both computed on the prior year's value, then
    /// reinvested together.
    pub fn project(&self) -> Vec<StockMarketYear> {
        let mut portfolio_value = self.config.savings;
        let mut results = Vec::with_capacity(self.config.years as usize);

        for year in 1..=self.config.years {
            let dividend_income = portfolio_value * self.config.dividend_yield;
            let growth = portfolio_value * self.config.net_growth_rate();
            portfolio_value += dividend_income + growth;

            results.push(StockMarketYear {
                year,
                portfolio_value,
                dividend_income,
                net_value: portfolio_value,
            });
        }

        results
    }
}

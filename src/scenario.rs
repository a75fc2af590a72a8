//! Scenario runner: both projections plus the comparison in one call
//!
//! Validates the config once, then runs the real estate and stock market
//! projections independently and lines them up by year.

use serde::{Deserialize, Serialize};

use crate::comparison::{compare, ComparisonRow, ComparisonSummary};
use crate::config::ComparisonConfig;
use crate::error::Result;
use crate::projection::{
    MortgageTerms, RealEstateProjector, RealEstateYear, SeriesSummary, StockMarketProjector,
    StockMarketYear,
};

/// Everything a report needs from one comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub config: ComparisonConfig,
    pub mortgage: MortgageTerms,
    pub real_estate: Vec<RealEstateYear>,
    pub stock_market: Vec<StockMarketYear>,
    pub comparison: Vec<ComparisonRow>,
    pub summary: ComparisonSummary,
}

impl ComparisonReport {
    pub fn real_estate_summary(&self) -> SeriesSummary {
        SeriesSummary::from_records(&self.real_estate)
    }

    pub fn stock_market_summary(&self) -> SeriesSummary {
        SeriesSummary::from_records(&self.stock_market)
    }
}

/// Runner for a validated buy-vs-invest comparison
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ComparisonConfig::default())?;
/// let report = runner.run()?;
/// println!("{:?}", report.summary.leader);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: ComparisonConfig,
}

impl ScenarioRunner {
    /// Create runner, rejecting configs that fail basic numeric checks
    pub fn new(config: ComparisonConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run both projections and compare them
    pub fn run(&self) -> Result<ComparisonReport> {
        log::info!(
            "Running comparison: savings={:.2}, {} years",
            self.config.real_estate.savings,
            self.config.real_estate.years
        );

        let mortgage = self.config.real_estate.mortgage_terms();
        let real_estate = RealEstateProjector::new(self.config.real_estate.clone()).project();
        let stock_market = StockMarketProjector::new(self.config.stock_market.clone()).project();

        let comparison = compare(&real_estate, &stock_market)?;
        let summary = ComparisonSummary::from_rows(&comparison);

        log::info!(
            "Comparison complete: {} leads by {:.2} after {} years",
            summary.leader.label(),
            summary.final_advantage.abs(),
            summary.total_years
        );

        Ok(ComparisonReport {
            config: self.config.clone(),
            mortgage,
            real_estate,
            stock_market,
            comparison,
            summary,
        })
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self {
            config: ComparisonConfig::default(),
        }
    }
}

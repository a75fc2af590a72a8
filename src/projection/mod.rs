//! Projection engines for the two scenarios

mod state;
mod records;
mod real_estate;
mod stocks;
pub mod mortgage;

pub use state::RealEstateState;
pub use records::{RealEstateYear, StockMarketYear, YearRecord, SeriesSummary};
pub use real_estate::{
    RealEstateConfig, RealEstateProjector, DEFAULT_APPRECIATION_RATE, DEFAULT_INSURANCE_RATE,
    DEFAULT_MAINTENANCE_RATE, DEFAULT_MORTGAGE_RATE, DEFAULT_TAX_RATE, DEFAULT_YEARS,
};
pub use stocks::{
    StockMarketConfig, StockMarketProjector, DEFAULT_ANNUAL_RETURN, DEFAULT_DIVIDEND_YIELD,
    DEFAULT_FEES,
};
pub use mortgage::MortgageTerms;

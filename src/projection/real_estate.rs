//! Real estate projection: buy with a mortgage instead of renting

use serde::{Deserialize, Serialize};

use super::mortgage::MortgageTerms;
use super::records::RealEstateYear;
use super::state::RealEstateState;

/// Default mortgage rate (annual)
pub const DEFAULT_MORTGAGE_RATE: f64 = 0.05;
/// Default property appreciation (annual)
pub const DEFAULT_APPRECIATION_RATE: f64 = 0.03;
/// Default property tax as a fraction of value
pub const DEFAULT_TAX_RATE: f64 = 0.015;
/// Default insurance as a fraction of value
pub const DEFAULT_INSURANCE_RATE: f64 = 0.005;
/// Default maintenance as a fraction of value
pub const DEFAULT_MAINTENANCE_RATE: f64 = 0.01;
/// Default horizon in years
pub const DEFAULT_YEARS: u32 = 30;

/// Inputs for a real estate projection
///
/// Rates are fractional annual rates (0.05 for 5%), not percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealEstateConfig {
    /// Cash available for the purchase
    pub savings: f64,

    /// Purchase price. If None (or zero), derived as savings / 0.05
    pub property_price: Option<f64>,

    /// Monthly rent that buying avoids
    pub monthly_rent: f64,

    pub mortgage_rate: f64,
    pub appreciation_rate: f64,
    pub tax_rate: f64,
    pub insurance_rate: f64,
    pub maintenance_rate: f64,

    /// Number of years to project
    pub years: u32,
}

impl Default for RealEstateConfig {
    fn default() -> Self {
        Self {
            savings: 30_000.0,
            property_price: Some(300_000.0),
            monthly_rent: 1_500.0,
            mortgage_rate: DEFAULT_MORTGAGE_RATE,
            appreciation_rate: DEFAULT_APPRECIATION_RATE,
            tax_rate: DEFAULT_TAX_RATE,
            insurance_rate: DEFAULT_INSURANCE_RATE,
            maintenance_rate: DEFAULT_MAINTENANCE_RATE,
            years: DEFAULT_YEARS,
        }
    }
}

impl RealEstateConfig {
    /// Combined annual carrying cost rate (tax + insurance + maintenance)
    pub fn carrying_cost_rate(&self) -> f64 {
        self.tax_rate + self.insurance_rate + self.maintenance_rate
    }

    /// Loan terms implied by this config
    pub fn mortgage_terms(&self) -> MortgageTerms {
        MortgageTerms::derive(self.savings, self.property_price, self.mortgage_rate, self.years)
    }
}

/// Real estate projection engine
pub struct RealEstateProjector {
    config: RealEstateConfig,
}

impl RealEstateProjector {
    pub fn new(config: RealEstateConfig) -> Self {
        Self { config }
    }

    /// Run the projection, one record per year in increasing year order
    ///
    /// A zero-year horizon yields an empty sequence.
    pub fn project(&self) -> Vec<RealEstateYear> {
        let years = self.config.years;
        if years == 0 {
            return Vec::new();
        }

        let terms = self.config.mortgage_terms();
        let mut state = RealEstateState::at_purchase(&terms);
        let mut results = Vec::with_capacity(years as usize);

        for _year in 1..=years {
            state.advance_year(self.config.appreciation_rate);
            results.push(self.calculate_year(&terms, &mut state));
        }

        results
    }

    /// Calculate one year's record from the advanced state
    fn calculate_year(&self, terms: &MortgageTerms, state: &mut RealEstateState) -> RealEstateYear {
        let years = self.config.years;

        state.accrue_principal(terms, years);
        state.accrue_rent_savings(self.config.monthly_rent, terms);

        let annual_expenses = state.property_value * self.config.carrying_cost_rate();
        let net_value = state.equity + state.cumulative_rent_savings - annual_expenses;

        RealEstateYear {
            year: state.year,
            property_value: state.property_value,
            equity: state.equity,
            cumulative_rent_savings: state.cumulative_rent_savings,
            annual_expenses,
            net_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn worked_example() -> RealEstateConfig {
        RealEstateConfig {
            savings: 30_000.0,
            property_price: Some(300_000.0),
            monthly_rent: 1_500.0,
            mortgage_rate: 0.05,
            years: 30,
            ..Default::default()
        }
    }

    #[test]
    fn test_projection_runs() {
        let result = RealEstateProjector::new(worked_example()).project();

        assert_eq!(result.len(), 30);
        let years: Vec<u32> = result.iter().map(|r| r.year).collect();
        assert_eq!(years, (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_worked_example_year_one() {
        let config = worked_example();
        let terms = config.mortgage_terms();
        assert_eq!(terms.down_payment, 30_000.0);
        assert_eq!(terms.loan_amount, 270_000.0);

        let result = RealEstateProjector::new(config).project();
        let first = &result[0];

        assert_relative_eq!(first.property_value, 309_000.0, max_relative = 1e-12);
        assert_relative_eq!(first.equity, 39_000.0, max_relative = 1e-12);
        // (1500 - 1449.418) * 12
        assert_abs_diff_eq!(first.cumulative_rent_savings, 606.979, epsilon = 0.001);
        assert_abs_diff_eq!(first.annual_expenses, 9_270.0, epsilon = 1e-6);
        assert_abs_diff_eq!(first.net_value, 30_336.979, epsilon = 0.001);
    }

    #[test]
    fn test_final_year_equity_is_full_price() {
        let result = RealEstateProjector::new(worked_example()).project();
        let last = result.last().unwrap();

        // Straight-line principal reaches the full loan at the horizon
        assert_relative_eq!(last.equity, 300_000.0, max_relative = 1e-12);
        assert_relative_eq!(last.property_value, 300_000.0 * 1.03_f64.powi(30), max_relative = 1e-9);
    }

    #[test]
    fn test_net_value_identity() {
        for row in RealEstateProjector::new(worked_example()).project() {
            assert_abs_diff_eq!(
                row.net_value,
                row.equity + row.cumulative_rent_savings - row.annual_expenses,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_property_value_strictly_increasing() {
        let result = RealEstateProjector::new(worked_example()).project();
        for pair in result.windows(2) {
            assert!(pair[1].property_value > pair[0].property_value);
        }
    }

    #[test]
    fn test_rent_savings_never_decrease() {
        // Rent below the mortgage payment: every year is a loss year
        let config = RealEstateConfig {
            monthly_rent: 800.0,
            ..worked_example()
        };
        let result = RealEstateProjector::new(config).project();

        assert!(result.iter().all(|r| r.cumulative_rent_savings == 0.0));
        for pair in result.windows(2) {
            assert!(pair[1].cumulative_rent_savings >= pair[0].cumulative_rent_savings);
        }
    }

    #[test]
    fn test_rent_savings_accumulate() {
        let result = RealEstateProjector::new(worked_example()).project();
        for pair in result.windows(2) {
            assert!(pair[1].cumulative_rent_savings > pair[0].cumulative_rent_savings);
        }
        assert_abs_diff_eq!(
            result[29].cumulative_rent_savings,
            result[0].cumulative_rent_savings * 30.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_zero_rate_mortgage() {
        // 120k purchase with 20k down: 100k loan over 10 years
        let config = RealEstateConfig {
            savings: 20_000.0,
            property_price: Some(120_000.0),
            monthly_rent: 1_000.0,
            mortgage_rate: 0.0,
            years: 10,
            ..Default::default()
        };
        let terms = config.mortgage_terms();
        assert_eq!(terms.loan_amount, 100_000.0);
        assert_abs_diff_eq!(terms.monthly_payment, 833.33, epsilon = 0.01);

        let result = RealEstateProjector::new(config).project();
        assert_eq!(result.len(), 10);
        assert!(result.iter().all(|r| r.net_value.is_finite()));
        // (1000 - 833.33) * 12 per year
        assert_abs_diff_eq!(result[0].cumulative_rent_savings, 2_000.0, epsilon = 0.01);
    }

    #[test]
    fn test_zero_years_is_empty() {
        let config = RealEstateConfig {
            years: 0,
            ..worked_example()
        };
        assert!(RealEstateProjector::new(config).project().is_empty());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let projector = RealEstateProjector::new(worked_example());
        assert_eq!(projector.project(), projector.project());
    }

    #[test]
    fn test_derived_price_projection() {
        let config = RealEstateConfig {
            property_price: None,
            ..worked_example()
        };
        let result = RealEstateProjector::new(config).project();

        // 600k derived price, 30k down
        assert_relative_eq!(result[0].property_value, 618_000.0, max_relative = 1e-9);
        assert_relative_eq!(result[0].equity, 30_000.0 + 570_000.0 / 30.0, max_relative = 1e-9);
    }
}

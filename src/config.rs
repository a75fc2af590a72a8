//! Comparison configuration: both scenario configs plus JSON loading

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::projection::{RealEstateConfig, StockMarketConfig};

/// Inputs for a full buy-vs-invest comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub real_estate: RealEstateConfig,
    pub stock_market: StockMarketConfig,
}

impl ComparisonConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Set the same starting savings for both scenarios
    pub fn set_savings(&mut self, savings: f64) {
        self.real_estate.savings = savings;
        self.stock_market.savings = savings;
    }

    /// Set the same horizon for both scenarios
    pub fn set_years(&mut self, years: u32) {
        self.real_estate.years = years;
        self.stock_market.years = years;
    }

    /// Basic numeric checks before running a comparison
    ///
    /// The projectors accept a zero horizon and return nothing; a comparison
    /// report needs at least one year.
    pub fn validate(&self) -> Result<()> {
        for years in [self.real_estate.years, self.stock_market.years] {
            if years < 1 {
                return Err(ProjectionError::InvalidHorizon { years });
            }
        }

        let re = &self.real_estate;
        let st = &self.stock_market;
        non_negative("real_estate.savings", re.savings)?;
        non_negative("real_estate.monthly_rent", re.monthly_rent)?;
        if let Some(price) = re.property_price {
            non_negative("real_estate.property_price", price)?;
        }
        non_negative("stock_market.savings", st.savings)?;

        finite("real_estate.mortgage_rate", re.mortgage_rate)?;
        finite("real_estate.appreciation_rate", re.appreciation_rate)?;
        finite("real_estate.tax_rate", re.tax_rate)?;
        finite("real_estate.insurance_rate", re.insurance_rate)?;
        finite("real_estate.maintenance_rate", re.maintenance_rate)?;
        finite("stock_market.annual_return", st.annual_return)?;
        finite("stock_market.dividend_yield", st.dividend_yield)?;
        finite("stock_market.fees", st.fees)?;

        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ProjectionError::InvalidInput { field, value })
    }
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::InvalidInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_worked_example() {
        let config = ComparisonConfig::default();

        assert_eq!(config.real_estate.savings, 30_000.0);
        assert_eq!(config.real_estate.property_price, Some(300_000.0));
        assert_eq!(config.real_estate.monthly_rent, 1_500.0);
        assert_eq!(config.real_estate.mortgage_rate, 0.05);
        assert_eq!(config.real_estate.appreciation_rate, 0.03);
        assert_eq!(config.real_estate.tax_rate, 0.015);
        assert_eq!(config.real_estate.insurance_rate, 0.005);
        assert_eq!(config.real_estate.maintenance_rate, 0.01);
        assert_eq!(config.stock_market.annual_return, 0.07);
        assert_eq!(config.stock_market.dividend_yield, 0.02);
        assert_eq!(config.stock_market.fees, 0.01);
        assert_eq!(config.real_estate.years, 30);
        assert_eq!(config.stock_market.years, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_horizon() {
        let mut config = ComparisonConfig::default();
        config.set_years(0);

        assert!(matches!(
            config.validate(),
            Err(ProjectionError::InvalidHorizon { years: 0 })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_savings() {
        let mut config = ComparisonConfig::default();
        config.set_savings(-1.0);

        assert!(matches!(
            config.validate(),
            Err(ProjectionError::InvalidInput { field: "real_estate.savings", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_rate() {
        let mut config = ComparisonConfig::default();
        config.stock_market.fees = f64::NAN;

        assert!(matches!(
            config.validate(),
            Err(ProjectionError::InvalidInput { field: "stock_market.fees", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "real_estate": { "savings": 50000, "property_price": null, "years": 15 },
            "stock_market": { "annual_return": 0.06 }
        }"#;
        let config: ComparisonConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.real_estate.savings, 50_000.0);
        assert_eq!(config.real_estate.property_price, None);
        assert_eq!(config.real_estate.years, 15);
        assert_eq!(config.real_estate.monthly_rent, 1_500.0);
        assert_eq!(config.stock_market.annual_return, 0.06);
        assert_eq!(config.stock_market.savings, 30_000.0);
    }

    #[test]
    fn test_from_json_path() {
        let path = std::env::temp_dir().join(format!("wealth_comparison_config_{}.json", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, r#"{{ "stock_market": {{ "fees": 0.002 }} }}"#).unwrap();
        }

        let config = ComparisonConfig::from_json_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.stock_market.fees, 0.002);
        assert_eq!(config.real_estate, RealEstateConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ComparisonConfig::from_json_path(Path::new("/nonexistent/wealth.json"));
        assert!(matches!(result, Err(ProjectionError::Io(_))));
    }
}

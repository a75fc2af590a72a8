//! Running state for the real estate projection

use super::mortgage::MortgageTerms;

/// State of the owned property at a point in the projection
#[derive(Debug, Clone)]
pub struct RealEstateState {
    /// Current projection year (0 before the first year)
    pub year: u32,

    /// Market value, compounded from the purchase price
    pub property_value: f64,

    /// Down payment plus principal repaid to date
    pub equity: f64,

    /// Rent avoided net of mortgage payments, accumulated
    pub cumulative_rent_savings: f64,
}

impl RealEstateState {
    /// Initialize state at purchase
    pub fn at_purchase(terms: &MortgageTerms) -> Self {
        Self {
            year: 0,
            property_value: terms.property_price,
            equity: terms.down_payment,
            cumulative_rent_savings: 0.0,
        }
    }

    /// Advance to next year, applying one year of appreciation to the running value
    pub fn advance_year(&mut self, appreciation_rate: f64) {
        self.year += 1;
        self.property_value *= 1.0 + appreciation_rate;
    }

    /// Principal repaid by `year`, approximated straight-line over the term
    pub fn principal_paid(&self, terms: &MortgageTerms, years: u32) -> f64 {
        terms.loan_amount * (self.year as f64 / years as f64)
    }

    /// Set equity to the down payment plus principal repaid to date
    pub fn accrue_principal(&mut self, terms: &MortgageTerms, years: u32) {
        self.equity = terms.down_payment + self.principal_paid(terms, years);
    }

    /// Add one year of rent savings. Years where the mortgage costs more than rent
    /// contribute nothing; they never reduce the running total.
    pub fn accrue_rent_savings(&mut self, monthly_rent: f64, terms: &MortgageTerms) {
        let rent_savings = monthly_rent * 12.0 - terms.annual_payment();
        self.cumulative_rent_savings += rent_savings.max(0.0);
    }
}

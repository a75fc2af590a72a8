//! Mortgage terms: property price resolution, down payment, and monthly payment
//!
//! Used by the real estate projector to size the loan before the yearly loop

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Minimum down payment as a fraction of the property price
pub const MINIMUM_DOWN_PAYMENT_PCT: f64 = 0.05;

/// Loan terms derived once per projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageTerms {
    /// Purchase price (given, or derived from savings)
    pub property_price: f64,

    /// Cash put down at purchase
    pub down_payment: f64,

    /// Amount borrowed (negative when the down payment exceeds the price)
    pub loan_amount: f64,

    /// Fixed monthly payment for the life of the loan
    pub monthly_payment: f64,

    /// Loan term in months
    pub total_months: u64,
}

impl MortgageTerms {
    /// Size the loan for a purchase funded from `savings`
    pub fn derive(savings: f64, property_price: Option<f64>, mortgage_rate: f64, years: u32) -> Self {
        let property_price = resolve_property_price(savings, property_price);
        let down_payment = down_payment(savings, property_price);
        let loan_amount = property_price - down_payment;
        let total_months = u64::from(years) * 12;
        let monthly_payment = monthly_payment(loan_amount, mortgage_rate, total_months);

        log::debug!(
            "Mortgage terms: price={:.2} down={:.2} loan={:.2} payment={:.2}/mo over {} months",
            property_price, down_payment, loan_amount, monthly_payment, total_months
        );
        if down_payment > property_price {
            log::warn!(
                "Down payment {:.2} exceeds property price {:.2}; loan amount is negative",
                down_payment, property_price
            );
        }

        Self {
            property_price,
            down_payment,
            loan_amount,
            monthly_payment,
            total_months,
        }
    }

    /// Mortgage outlay over one year
    pub fn annual_payment(&self) -> f64 {
        self.monthly_payment * 12.0
    }

    /// Down payment as a fraction of the property price
    pub fn down_payment_pct(&self) -> f64 {
        if self.property_price > 0.0 {
            self.down_payment / self.property_price
        } else {
            0.0
        }
    }
}

/// Property price to use: the given price, or savings treated as a 5% down payment
/// when no price (or a zero price) is given
pub fn resolve_property_price(savings: f64, property_price: Option<f64>) -> f64 {
    match property_price {
        Some(price) if price != 0.0 => price,
        _ => savings / MINIMUM_DOWN_PAYMENT_PCT,
    }
}

/// Down payment = max(5% of price, savings)
///
/// All savings go into the purchase, so large savings can push the down payment
/// above the price. That case is kept as-is.
pub fn down_payment(savings: f64, property_price: f64) -> f64 {
    (MINIMUM_DOWN_PAYMENT_PCT * property_price).max(savings)
}

/// Standard fixed-rate amortization payment
///
/// payment = (loan * r) / (1 - (1 + r)^(-n)), r = annual_rate / 12
///
/// The discount term is evaluated as `-expm1(-n * ln_1p(r))` so tiny rates and
/// very long terms keep their precision.
///
/// # Errors
/// `DivideByZeroRate` when the discount term is zero (a zero rate, or one too
/// small to register) or the payment is not finite.
pub fn amortized_payment(loan_amount: f64, annual_rate: f64, total_months: u64) -> Result<f64> {
    let monthly_rate = annual_rate / 12.0;
    let discount = -(-(total_months as f64) * monthly_rate.ln_1p()).exp_m1();
    if annual_rate == 0.0 || discount == 0.0 {
        return Err(ProjectionError::DivideByZeroRate);
    }

    let payment = loan_amount * monthly_rate / discount;
    if !payment.is_finite() {
        return Err(ProjectionError::DivideByZeroRate);
    }
    Ok(payment)
}

/// Monthly payment with a straight-line fallback where amortization is undefined
pub fn monthly_payment(loan_amount: f64, annual_rate: f64, total_months: u64) -> f64 {
    if total_months == 0 {
        return 0.0;
    }

    match amortized_payment(loan_amount, annual_rate, total_months) {
        Ok(payment) => payment,
        Err(_) => {
            log::debug!("Mortgage rate {} too small to amortize: using straight-line principal payments", annual_rate);
            loan_amount / total_months as f64
        }
    }
}

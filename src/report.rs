//! Report output: fixed-width console tables, CSV, and JSON

use std::io::Write;

use serde::Serialize;

use crate::comparison::ComparisonRow;
use crate::error::Result;
use crate::projection::{MortgageTerms, RealEstateYear, StockMarketYear};
use crate::scenario::ComparisonReport;

const RULE_WIDTH: usize = 84;

/// Print the derived mortgage terms
pub fn write_mortgage_terms<W: Write>(out: &mut W, terms: &MortgageTerms) -> Result<()> {
    writeln!(out, "Mortgage:")?;
    writeln!(out, "  Property Price:  ${:.2}", terms.property_price)?;
    writeln!(out, "  Down Payment:    ${:.2} ({:.1}%)", terms.down_payment, terms.down_payment_pct() * 100.0)?;
    writeln!(out, "  Loan Amount:     ${:.2}", terms.loan_amount)?;
    writeln!(out, "  Monthly Payment: ${:.2} over {} months", terms.monthly_payment, terms.total_months)?;
    Ok(())
}

/// Print the real estate series
pub fn write_real_estate_table<W: Write>(out: &mut W, rows: &[RealEstateYear]) -> Result<()> {
    writeln!(out, "{:>4} {:>16} {:>14} {:>16} {:>14} {:>14}",
        "Year", "Property Value", "Equity", "Rent Savings", "Expenses", "Net Value")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for row in rows {
        writeln!(out, "{:>4} {:>16.2} {:>14.2} {:>16.2} {:>14.2} {:>14.2}",
            row.year,
            row.property_value,
            row.equity,
            row.cumulative_rent_savings,
            row.annual_expenses,
            row.net_value,
        )?;
    }
    Ok(())
}

/// Print the stock market series
pub fn write_stock_market_table<W: Write>(out: &mut W, rows: &[StockMarketYear]) -> Result<()> {
    writeln!(out, "{:>4} {:>16} {:>16} {:>16}", "Year", "Portfolio Value", "Dividends", "Net Value")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for row in rows {
        writeln!(out, "{:>4} {:>16.2} {:>16.2} {:>16.2}",
            row.year, row.portfolio_value, row.dividend_income, row.net_value)?;
    }
    Ok(())
}

/// Print the side-by-side comparison
pub fn write_comparison_table<W: Write>(out: &mut W, rows: &[ComparisonRow]) -> Result<()> {
    writeln!(out, "{:>4} {:>22} {:>22} {:>16} {:>14}",
        "Year", "Real Estate Net Value", "Stock Market Net Value", "Difference", "Leader")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for row in rows {
        writeln!(out, "{:>4} {:>22.2} {:>22.2} {:>16.2} {:>14}",
            row.year,
            row.real_estate_net_value,
            row.stock_market_net_value,
            row.advantage(),
            row.leader().label(),
        )?;
    }
    Ok(())
}

/// Print the headline figures
pub fn write_summary<W: Write>(out: &mut W, report: &ComparisonReport) -> Result<()> {
    let summary = &report.summary;
    writeln!(out, "Summary:")?;
    writeln!(out, "  Years:                  {}", summary.total_years)?;
    writeln!(out, "  Real Estate Net Value:  ${:.2}", summary.final_real_estate_net_value)?;
    writeln!(out, "  Stock Market Net Value: ${:.2}", summary.final_stock_market_net_value)?;
    writeln!(out, "  Leader:                 {} by ${:.2}", summary.leader.label(), summary.final_advantage.abs())?;
    match summary.crossover_year {
        Some(year) => writeln!(out, "  First Lead Change:      year {}", year)?,
        None => writeln!(out, "  First Lead Change:      none")?,
    }
    Ok(())
}

/// One CSV line: both scenarios for a year
#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "PropertyValue")]
    property_value: f64,
    #[serde(rename = "Equity")]
    equity: f64,
    #[serde(rename = "TotalRentSavings")]
    cumulative_rent_savings: f64,
    #[serde(rename = "AnnualExpenses")]
    annual_expenses: f64,
    #[serde(rename = "RealEstateNetValue")]
    real_estate_net_value: f64,
    #[serde(rename = "PortfolioValue")]
    portfolio_value: f64,
    #[serde(rename = "DividendIncome")]
    dividend_income: f64,
    #[serde(rename = "StockMarketNetValue")]
    stock_market_net_value: f64,
    #[serde(rename = "Difference")]
    difference: f64,
}

impl CsvRow {
    fn new(re: &RealEstateYear, st: &StockMarketYear, row: &ComparisonRow) -> Self {
        Self {
            year: row.year,
            property_value: re.property_value,
            equity: re.equity,
            cumulative_rent_savings: re.cumulative_rent_savings,
            annual_expenses: re.annual_expenses,
            real_estate_net_value: re.net_value,
            portfolio_value: st.portfolio_value,
            dividend_income: st.dividend_income,
            stock_market_net_value: st.net_value,
            difference: row.advantage(),
        }
    }
}

/// Write the full report as one CSV table, one row per year
pub fn write_csv<W: Write>(out: W, report: &ComparisonReport) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    for ((re, st), row) in report.real_estate.iter().zip(&report.stock_market).zip(&report.comparison) {
        writer.serialize(CsvRow::new(re, st, row))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the full report as pretty-printed JSON
pub fn write_json<W: Write>(out: W, report: &ComparisonReport) -> Result<()> {
    serde_json::to_writer_pretty(out, report)?;
    Ok(())
}

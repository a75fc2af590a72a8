//! Wealth Comparison CLI
//!
//! Projects buying a home against investing the same savings in equities
//! and prints the year-by-year net value of each.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use wealth_comparison::{report, ComparisonConfig, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(
    name = "wealth-comparison",
    version,
    about = "Compare buying real estate against investing in the stock market"
)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting savings, used for both scenarios
    #[arg(long)]
    savings: Option<f64>,

    /// Property price (defaults to savings as a 5% down payment when 0)
    #[arg(long)]
    price: Option<f64>,

    /// Monthly rent avoided by buying
    #[arg(long)]
    rent: Option<f64>,

    /// Annual mortgage rate (0.05 = 5%)
    #[arg(long)]
    mortgage_rate: Option<f64>,

    /// Annual property appreciation
    #[arg(long)]
    appreciation: Option<f64>,

    /// Annual property tax rate
    #[arg(long)]
    tax_rate: Option<f64>,

    /// Annual insurance rate
    #[arg(long)]
    insurance_rate: Option<f64>,

    /// Annual maintenance rate
    #[arg(long)]
    maintenance_rate: Option<f64>,

    /// Annual stock market return
    #[arg(long)]
    annual_return: Option<f64>,

    /// Annual dividend yield
    #[arg(long)]
    dividend_yield: Option<f64>,

    /// Annual fund fees
    #[arg(long)]
    fees: Option<f64>,

    /// Horizon in years, used for both scenarios
    #[arg(long)]
    years: Option<u32>,

    /// Also print each scenario's full table
    #[arg(long)]
    detail: bool,

    /// Write the yearly results to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn build_config(&self) -> Result<ComparisonConfig> {
        let mut config = match &self.config {
            Some(path) => ComparisonConfig::from_json_path(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => ComparisonConfig::default(),
        };

        if let Some(savings) = self.savings {
            config.set_savings(savings);
        }
        if let Some(years) = self.years {
            config.set_years(years);
        }
        if let Some(price) = self.price {
            config.real_estate.property_price = Some(price);
        }

        let re = &mut config.real_estate;
        re.monthly_rent = self.rent.unwrap_or(re.monthly_rent);
        re.mortgage_rate = self.mortgage_rate.unwrap_or(re.mortgage_rate);
        re.appreciation_rate = self.appreciation.unwrap_or(re.appreciation_rate);
        re.tax_rate = self.tax_rate.unwrap_or(re.tax_rate);
        re.insurance_rate = self.insurance_rate.unwrap_or(re.insurance_rate);
        re.maintenance_rate = self.maintenance_rate.unwrap_or(re.maintenance_rate);

        let st = &mut config.stock_market;
        st.annual_return = self.annual_return.unwrap_or(st.annual_return);
        st.dividend_yield = self.dividend_yield.unwrap_or(st.dividend_yield);
        st.fees = self.fees.unwrap_or(st.fees);

        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.build_config()?;

    let runner = ScenarioRunner::new(config).context("invalid comparison config")?;
    let result = runner.run().context("running comparison")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        report::write_json(&mut out, &result)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Wealth Comparison v{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "=========================\n")?;

        report::write_mortgage_terms(&mut out, &result.mortgage)?;
        writeln!(out)?;

        if cli.detail {
            writeln!(out, "Real Estate:")?;
            report::write_real_estate_table(&mut out, &result.real_estate)?;
            writeln!(out)?;
            writeln!(out, "Stock Market:")?;
            report::write_stock_market_table(&mut out, &result.stock_market)?;
            writeln!(out)?;
        }

        writeln!(out, "Comparison:")?;
        report::write_comparison_table(&mut out, &result.comparison)?;
        writeln!(out)?;
        report::write_summary(&mut out, &result)?;
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        report::write_csv(file, &result)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Results written to {}", path.display());
    }

    Ok(())
}

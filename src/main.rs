//! Annuity Valuation CLI
//!
//! Compares a lump-sum offer against the present value of a monthly annuity.
//! Inputs may come from flags or from the environment:
//!   LUMP_SUM, MONTHLY_PAYMENT, ANNUAL_RATE, YEARS

use annuity_valuation::{breakeven_annual_rate, evaluate, ComparisonInput, PreferredOption};
use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// Lump sum offered instead of the annuity
    #[arg(long, env = "LUMP_SUM", default_value_t = 500_000.0)]
    lump_sum: f64,

    /// Monthly annuity payment
    #[arg(long, env = "MONTHLY_PAYMENT", default_value_t = 2_500.0)]
    monthly_payment: f64,

    /// Annual discount rate as a decimal (0.05 = 5%)
    #[arg(long, env = "ANNUAL_RATE", default_value_t = 0.05)]
    annual_rate: f64,

    /// Number of years the annuity pays
    #[arg(long, env = "YEARS", default_value_t = 30.0)]
    years: f64,

    /// Print a JSON report instead of the verdict line
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ComparisonReport {
    lump_sum: f64,
    monthly_payment: f64,
    annual_rate: f64,
    years: f64,
    annuity_present_value: f64,
    preferred: PreferredOption,
    difference: f64,
    breakeven_annual_rate: Option<f64>,
    verdict: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    debug!("{:?}", cli);

    let input = ComparisonInput::new(cli.lump_sum, cli.monthly_payment, cli.annual_rate, cli.years)
        .context("cannot value the annuity")?;
    let result = evaluate(&input);
    let breakeven = breakeven_annual_rate(cli.lump_sum, cli.monthly_payment, cli.years);

    if cli.json {
        let report = ComparisonReport {
            lump_sum: cli.lump_sum,
            monthly_payment: cli.monthly_payment,
            annual_rate: cli.annual_rate,
            years: cli.years,
            annuity_present_value: result.annuity_present_value,
            preferred: result.preferred,
            difference: result.difference(),
            breakeven_annual_rate: breakeven,
            verdict: result.verdict(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", result);
    if let Some(rate) = breakeven {
        println!(
            "Break-even discount rate: {:.4}% (the annuity is worth more at any lower rate).",
            rate * 100.0
        );
    }

    Ok(())
}

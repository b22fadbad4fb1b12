//! Present value of a level monthly annuity (payments at end of each month)

use log::debug;
use serde::{Deserialize, Serialize};

use super::discount::{DiscountRate, PERIODS_PER_YEAR};
use crate::error::{Result, ValuationError};

/// Terms of a fixed monthly-payment annuity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnuityParameters {
    /// Amount paid at the end of each month
    pub monthly_payment: f64,

    /// Annual discount rate as a decimal (0.05 = 5%)
    pub annual_rate: f64,

    /// Term in years; fractional terms scale the payment count
    pub years: f64,
}

impl AnnuityParameters {
    /// Validated constructor. All three terms must be strictly positive.
    pub fn new(monthly_payment: f64, annual_rate: f64, years: f64) -> Result<Self> {
        // `!(x > 0.0)` also rejects NaN
        if !(annual_rate > 0.0) || !(years > 0.0) || !(monthly_payment > 0.0) {
            return Err(ValuationError::InvalidArgument(
                "annual rate, years, and monthly payment must be positive values".to_string(),
            ));
        }

        Ok(Self {
            monthly_payment,
            annual_rate,
            years,
        })
    }

    /// Total number of monthly payments
    pub fn number_of_payments(&self) -> f64 {
        self.years * PERIODS_PER_YEAR
    }

    pub fn discount_rate(&self) -> DiscountRate {
        DiscountRate::new(self.annual_rate)
    }

    /// Sum of all payments with no discounting
    pub fn total_payments(&self) -> f64 {
        self.monthly_payment * self.number_of_payments()
    }

    pub fn present_value(&self) -> f64 {
        AnnuityValuator::value(self)
    }
}

/// Present value calculations for ordinary annuities
pub struct AnnuityValuator;

impl AnnuityValuator {
    /// PV = payment * (1 - (1 + i)^-n) / i
    ///
    /// The parameters are already validated, so `i` is never zero here.
    pub fn value(params: &AnnuityParameters) -> f64 {
        let rate = params.discount_rate();
        let monthly_rate = rate.monthly_rate();
        let n = params.number_of_payments();

        let pv = params.monthly_payment * rate.discounted_share(n) / monthly_rate;

        debug!(
            "annuity pv: payment={} monthly_rate={} payments={} pv={}",
            params.monthly_payment, monthly_rate, n, pv
        );
        pv
    }

    /// Validate the raw terms and value the annuity
    pub fn present_value(monthly_payment: f64, annual_rate: f64, years: f64) -> Result<f64> {
        let params = AnnuityParameters::new(monthly_payment, annual_rate, years)?;
        Ok(Self::value(&params))
    }
}

/// Present value of `monthly_payment` per month for `years` years at `annual_rate`
pub fn present_value(monthly_payment: f64, annual_rate: f64, years: f64) -> Result<f64> {
    AnnuityValuator::present_value(monthly_payment, annual_rate, years)
}

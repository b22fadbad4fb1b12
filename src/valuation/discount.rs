//! Discount rate handling for monthly annuity valuation
//!
//! Rates are quoted as nominal annual rates compounded monthly, so the
//! periodic rate is simply `annual_rate / 12`.

use serde::{Deserialize, Serialize};

/// Number of payment periods in a year
pub const PERIODS_PER_YEAR: f64 = 12.0;

/// Nominal annual discount rate, compounded monthly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountRate {
    /// Annual rate as a decimal (0.05 = 5%)
    pub annual_rate: f64,
}

impl DiscountRate {
    pub fn new(annual_rate: f64) -> Self {
        Self { annual_rate }
    }

    /// Periodic (monthly) rate
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / PERIODS_PER_YEAR
    }

    /// Discount factor to `periods` months out. Fractional periods are allowed.
    pub fn discount_to_period(&self, periods: f64) -> f64 {
        (-periods * self.monthly_rate().ln_1p()).exp()
    }

    /// 1 - v^n, evaluated without cancellation when the rate is tiny
    pub fn discounted_share(&self, periods: f64) -> f64 {
        -(-periods * self.monthly_rate().ln_1p()).exp_m1()
    }
}

//! Annuity valuation: discounting, present value and break-even rate

mod discount;
mod annuity;
mod breakeven;

pub use discount::{DiscountRate, PERIODS_PER_YEAR};
pub use annuity::{AnnuityParameters, AnnuityValuator, present_value};
pub use breakeven::breakeven_annual_rate;

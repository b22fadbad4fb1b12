//! Annuity Valuation - Lump sum vs. monthly annuity comparison
//!
//! This library provides:
//! - Present value of a level monthly annuity at a nominal annual discount rate
//! - Comparison of that present value against a lump-sum offer
//! - The break-even discount rate at which both offers are worth the same

pub mod error;
pub mod valuation;
pub mod comparison;

// Re-export commonly used types
pub use error::ValuationError;
pub use valuation::{AnnuityParameters, AnnuityValuator, DiscountRate, present_value, breakeven_annual_rate};
pub use comparison::{compare, evaluate, ComparisonInput, ComparisonResult, OptionComparator, PreferredOption};

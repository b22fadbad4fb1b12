//! Lump sum vs. annuity decision

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use super::format::format_currency;
use crate::error::Result;
use crate::valuation::AnnuityParameters;

/// Which offer is worth more today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredOption {
    LumpSum,
    /// Also chosen on an exact tie
    Annuity,
}

impl fmt::Display for PreferredOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferredOption::LumpSum => write!(f, "lump sum"),
            PreferredOption::Annuity => write!(f, "annuity"),
        }
    }
}

/// A lump-sum offer alongside the annuity it replaces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonInput {
    /// Any real amount; zero and negative offers are compared as-is
    pub lump_sum: f64,
    pub annuity: AnnuityParameters,
}

impl ComparisonInput {
    pub fn new(lump_sum: f64, monthly_payment: f64, annual_rate: f64, years: f64) -> Result<Self> {
        Ok(Self {
            lump_sum,
            annuity: AnnuityParameters::new(monthly_payment, annual_rate, years)?,
        })
    }
}

/// Outcome of a comparison, with both amounts kept for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub lump_sum: f64,
    pub annuity_present_value: f64,
    pub preferred: PreferredOption,
}

impl ComparisonResult {
    /// Lump sum minus annuity present value
    pub fn difference(&self) -> f64 {
        self.lump_sum - self.annuity_present_value
    }

    /// Human-readable verdict
    pub fn verdict(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lump_sum = format_currency(self.lump_sum);
        let pv = format_currency(self.annuity_present_value);

        match self.preferred {
            PreferredOption::LumpSum => write!(
                f,
                "Lump sum of {} is better than the present value of the annuity ({}).",
                lump_sum, pv
            ),
            PreferredOption::Annuity => write!(
                f,
                "The present value of the annuity ({}) is better than the lump sum of {}.",
                pv, lump_sum
            ),
        }
    }
}

/// Compares lump-sum offers against annuity present values
pub struct OptionComparator;

impl OptionComparator {
    /// Value the annuity and decide. Strict `>`: a tie goes to the annuity.
    pub fn evaluate(input: &ComparisonInput) -> ComparisonResult {
        let annuity_present_value = input.annuity.present_value();

        let preferred = if input.lump_sum > annuity_present_value {
            PreferredOption::LumpSum
        } else {
            PreferredOption::Annuity
        };

        info!(
            "lump sum {:.2} vs annuity pv {:.2}: {} preferred",
            input.lump_sum, annuity_present_value, preferred
        );

        ComparisonResult {
            lump_sum: input.lump_sum,
            annuity_present_value,
            preferred,
        }
    }

    /// Validate raw inputs, compare, and return the verdict message
    pub fn compare(
        lump_sum: f64,
        monthly_payment: f64,
        annual_rate: f64,
        years: f64,
    ) -> Result<String> {
        let input = ComparisonInput::new(lump_sum, monthly_payment, annual_rate, years)?;
        Ok(Self::evaluate(&input).verdict())
    }
}

/// Verdict message for a lump sum against a monthly annuity
pub fn compare(lump_sum: f64, monthly_payment: f64, annual_rate: f64, years: f64) -> Result<String> {
    OptionComparator::compare(lump_sum, monthly_payment, annual_rate, years)
}

/// Structured comparison result for a lump sum against a monthly annuity
pub fn evaluate(input: &ComparisonInput) -> ComparisonResult {
    OptionComparator::evaluate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValuationError;
    use crate::valuation::present_value;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lump_sum_preferred() {
        let message = compare(500_000.0, 2500.0, 0.05, 30.0).unwrap();
        assert_eq!(
            message,
            "Lump sum of $500,000.00 is better than the present value of the annuity ($465,704.04)."
        );
    }

    #[test]
    fn test_annuity_preferred() {
        let message = compare(400_000.0, 2500.0, 0.05, 30.0).unwrap();
        assert_eq!(
            message,
            "The present value of the annuity ($465,704.04) is better than the lump sum of $400,000.00."
        );
    }

    #[test]
    fn test_tie_goes_to_annuity() {
        let pv = present_value(2500.0, 0.05, 30.0).unwrap();
        let input = ComparisonInput::new(pv, 2500.0, 0.05, 30.0).unwrap();

        let result = evaluate(&input);
        assert_eq!(result.preferred, PreferredOption::Annuity);
        assert_eq!(result.difference(), 0.0);

        let message = compare(pv, 2500.0, 0.05, 30.0).unwrap();
        assert!(message.starts_with("The present value of the annuity"));
    }

    #[test]
    fn test_result_carries_both_values() {
        let input = ComparisonInput::new(500_000.0, 2500.0, 0.05, 30.0).unwrap();
        let result = evaluate(&input);

        assert_eq!(result.lump_sum, 500_000.0);
        assert_abs_diff_eq!(result.annuity_present_value, 465_704.04, epsilon = 0.01);
        assert_abs_diff_eq!(result.difference(), 34_295.96, epsilon = 0.01);
        assert_eq!(result.verdict(), result.to_string());
    }

    #[test]
    fn test_negative_lump_sum_compared_as_is() {
        let message = compare(-1_234.5, 100.0, 0.05, 1.0).unwrap();
        assert!(message.starts_with("The present value of the annuity"));
        assert!(message.ends_with("the lump sum of $-1,234.50."));
    }

    #[test]
    fn test_invalid_annuity_propagates() {
        for (payment, rate, years) in [(0.0, 0.05, 30.0), (2500.0, 0.0, 30.0), (2500.0, 0.05, 0.0)] {
            let err = compare(500_000.0, payment, rate, years).unwrap_err();
            assert!(matches!(err, ValuationError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_preferred_option_serializes_snake_case() {
        let json = serde_json::to_string(&PreferredOption::LumpSum).unwrap();
        assert_eq!(json, "\"lump_sum\"");
    }
}

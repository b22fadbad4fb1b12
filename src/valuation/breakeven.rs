//! Break-even discount rate between a lump sum and an annuity
//!
//! The annuity present value falls monotonically as the rate rises, so the
//! rate at which it equals the lump sum is found by bisection.

use super::annuity::AnnuityParameters;

const LOWER_RATE: f64 = 1e-9;
const UPPER_RATE: f64 = 10.0; // 1000% annual
const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 1000;

/// Annual discount rate at which the annuity is worth exactly `lump_sum`.
///
/// Below this rate the annuity is worth more; above it the lump sum is.
///
/// # Returns
/// * `Option<f64>` - Annual rate as a decimal, or None if the terms are invalid
///   or no rate in (0, 1000%] equates the two
pub fn breakeven_annual_rate(lump_sum: f64, monthly_payment: f64, years: f64) -> Option<f64> {
    let pv_at = |rate: f64| {
        AnnuityParameters::new(monthly_payment, rate, years)
            .ok()
            .map(|p| p.present_value())
    };

    if !lump_sum.is_finite() {
        return None;
    }

    let mut low = LOWER_RATE;
    let mut high = UPPER_RATE;

    let gap_low = pv_at(low)? - lump_sum;
    let gap_high = pv_at(high)? - lump_sum;

    // Need a sign change across the bracket
    if !(gap_low * gap_high <= 0.0) {
        return None;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let gap_mid = pv_at(mid)? - lump_sum;

        if gap_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Some(mid);
        }

        // PV is decreasing in rate: a positive gap means the root lies above
        if gap_mid > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }

    None
}

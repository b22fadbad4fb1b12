//! Currency display: `$` prefix, comma thousands separators, two decimals

/// Format an amount as `$1,234,567.89`. Negative amounts render as `$-1,234.50`.
pub fn format_currency(amount: f64) -> String {
    format!("${}", group_thousands(amount))
}

/// Two-decimal rendering with comma-separated thousands
fn group_thousands(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some(parts) => parts,
        // inf / NaN
        None => return fixed,
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(7.5), "$7.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_currency(1_000.0), "$1,000.00");
        assert_eq!(format_currency(500_000.0), "$500,000.00");
        assert_eq!(format_currency(465_704.0426), "$465,704.04");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-1_234.5), "$-1,234.50");
        assert_eq!(group_thousands(-12.0), "-12.00");
    }
}

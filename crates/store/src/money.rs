// crates/store/src/money.rs
//! Helpers for the decimal-string amounts the backend speaks.
//!
//! Amounts cross the wire as strings (`"1234.56"`). Derived totals are
//! computed in `f64` and rendered back to two decimal places; the wire
//! values themselves are never rewritten.

/// Parse a backend amount string. Unparseable input counts as zero so one
/// bad row cannot poison an aggregate.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Render a derived total back to the backend's two-decimal string form.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_amount("1234.56"), 1234.56);
        assert_eq!(parse_amount("  -42.90 "), -42.90);
        assert_eq!(parse_amount("0"), 0.0);
    }

    #[test]
    fn garbage_counts_as_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
    }

    #[test]
    fn formats_to_two_decimals() {
        assert_eq!(format_amount(10.0), "10.00");
        assert_eq!(format_amount(3.14159), "3.14");
        assert_eq!(format_amount(-0.5), "-0.50");
    }
}

//! Price formatting and parsing shared by drafts and tables.

/// Format a price with two decimal places, e.g. `20.0` -> `"20.00"`.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Parse a decimal the user typed into a numeric field. Trims
/// surrounding whitespace; anything else non-numeric is rejected.
pub fn parse_decimal(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(20.0), "20.00");
        assert_eq!(format_price(99.999), "100.00");
        assert_eq!(format_price(0.0), "0.00");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("20.00"), Some(20.0));
        assert_eq!(parse_decimal(" 1.5 "), Some(1.5));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
    }
}

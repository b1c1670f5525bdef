/// Formats a derived value for display: two decimal places with the
/// currency prefix. Used for both the VAT amount and the total so the two
/// surfaces always agree.
pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

/// Echoes raw amount text with the currency prefix, exactly as typed.
/// The echo row mirrors the entry field and applies no formatting.
pub fn echo_amount(input: &str) -> String {
    format!("${input}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn format_currency_uses_two_decimals() {
        assert_eq!(format_currency(240.0), "$240.00");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn format_currency_rounds_at_display_time() {
        assert_eq!(format_currency(4.9995), "$5.00");
        assert_eq!(format_currency(104.9895), "$104.99");
    }

    #[test]
    fn format_currency_keeps_the_sign_inside() {
        assert_eq!(format_currency(-50.0), "$-50.00");
    }

    #[test]
    fn echo_amount_is_verbatim() {
        assert_eq!(echo_amount("99.99"), "$99.99");
        assert_eq!(echo_amount(""), "$");
    }
}

use crate::config::RENDER;

/// `$` plus the price at dashboard precision, e.g. `$142.1234`.
pub fn format_price(price: f64) -> String {
    format!("${:.*}", RENDER.price_decimals, price)
}

/// Shortest natural form of a number: `5`, `-3`, `12.5`.
pub fn format_number(value: f64) -> String {
    // f64's Display already drops a trailing `.0`
    if value == 0.0 {
        // Avoid printing "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_four_decimals() {
        assert_eq!(format_price(142.1), "$142.1000");
        assert_eq!(format_price(0.123456), "$0.1235");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-0.0), "0");
    }
}

//! Price formatting for human-readable display.

use rust_decimal::Decimal;

/// Trims trailing zeros, adds thousands separators.
pub fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let grouped = digits
        .rchunks(3)
        .rev()
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format an amount with at most two decimal places, e.g. `1234.5` → `"1,234.5"`.
pub fn display(amount: &Decimal) -> String {
    display_formatted_string(amount.round_dp(2).to_string())
}

/// Format a price the way the storefront shows it, e.g. `100` → `"$100"`.
pub fn money(amount: &Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-${}", display(&amount.abs()))
    } else {
        format!("${}", display(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formatted_string_thousands_separator() {
        assert_eq!(display_formatted_string("0".to_string()), "0");
        assert_eq!(display_formatted_string("123".to_string()), "123");
        assert_eq!(display_formatted_string("1000".to_string()), "1,000");
        assert_eq!(display_formatted_string("1234567".to_string()), "1,234,567");
    }

    #[test]
    fn test_display_formatted_string_trailing_zeros_trimmed() {
        assert_eq!(display_formatted_string("1.50".to_string()), "1.5");
        assert_eq!(display_formatted_string("100.00".to_string()), "100");
        assert_eq!(display_formatted_string("1000.00".to_string()), "1,000");
    }

    #[test]
    fn test_display_formatted_string_negative() {
        assert_eq!(display_formatted_string("-1000".to_string()), "-1,000");
        assert_eq!(display_formatted_string("-1234.56".to_string()), "-1,234.56");
    }

    #[test]
    fn test_money() {
        assert_eq!(money(&Decimal::from(100)), "$100");
        assert_eq!(money(&Decimal::new(123456, 2)), "$1,234.56");
        assert_eq!(money(&Decimal::new(19999, 3)), "$20");
        assert_eq!(money(&Decimal::ZERO), "$0");
        assert_eq!(money(&Decimal::from(-5)), "-$5");
    }
}

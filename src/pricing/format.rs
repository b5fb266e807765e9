//! US dollar display formatting.

use rust_decimal::Decimal;

use super::calculators::round_money;

/// Format an amount as US dollars, e.g. `$1,234.50` or `-$12.00`.
pub fn format_currency(amount: Decimal) -> String {
    let mut cents = round_money(amount, 2);
    let negative = cents < Decimal::ZERO;
    cents = cents.abs();
    cents.rescale(2);

    let text = cents.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_thousands(whole),
        fraction
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(5)), "$5.00");
        assert_eq!(format_currency(dec!(194.35)), "$194.35");
        assert_eq!(format_currency(dec!(999.999)), "$1,000.00");
        assert_eq!(format_currency(dec!(1689.35)), "$1,689.35");
        assert_eq!(format_currency(dec!(1234567.8)), "$1,234,567.80");
    }

    #[test]
    fn test_format_currency_rounds_half_up() {
        assert_eq!(format_currency(dec!(15.195)), "$15.20");
        assert_eq!(format_currency(dec!(0.004)), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-12)), "-$12.00");
        assert_eq!(format_currency(dec!(-1234.5)), "-$1,234.50");
        // Rounds to zero, no sign
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("100"), "100");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}

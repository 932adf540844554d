//! Display formatting for currency and percent values.
//!
//! These two functions define the only rounding/formatting rules in the
//! system: two-decimal USD with comma grouping, and a two-decimal percent
//! suffix. Summaries and analysis payloads must go through them — the
//! analysis client receives strings, never raw numerics.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Rounds half-up to two decimals and renders with exactly two fraction
/// digits, no grouping. Sign is preserved.
pub fn fixed2(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let (int_part, frac_part) = split_fixed2(rounded.abs());
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{int_part}.{frac_part}")
}

/// `$1,234.56` style two-decimal USD; negatives render as `-$1,234.56`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let (int_part, frac_part) = split_fixed2(rounded.abs());
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{frac_part}", group_thousands(&int_part))
}

/// `12.34%` style two-decimal percent, no grouping.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", fixed2(value))
}

/// Splits a non-negative, already-rounded value into integer digits and a
/// zero-padded two-digit fraction.
fn split_fixed2(value: Decimal) -> (String, String) {
    let s = value.to_string();
    match s.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), format!("{frac_part:0<2}")),
        None => (s, "00".to_string()),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_currency(dec!(300000)), "$300,000.00");
    }

    #[test]
    fn currency_small_values_have_no_separator() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(999.9)), "$999.90");
    }

    #[test]
    fn currency_negative_puts_sign_before_symbol() {
        assert_eq!(format_currency(dec!(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn currency_rounds_half_up() {
        assert_eq!(format_currency(dec!(10.005)), "$10.01");
        assert_eq!(format_currency(dec!(10.004)), "$10.00");
    }

    #[test]
    fn currency_negative_rounding_to_zero_drops_sign() {
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn percent_always_two_decimals() {
        assert_eq!(format_percent(dec!(7.2)), "7.20%");
        assert_eq!(format_percent(dec!(0)), "0.00%");
        assert_eq!(format_percent(dec!(-5.125)), "-5.13%");
    }

    #[test]
    fn percent_has_no_grouping() {
        assert_eq!(format_percent(dec!(1234.567)), "1234.57%");
    }

    #[test]
    fn fixed2_pads_single_fraction_digit() {
        assert_eq!(fixed2(dec!(2.4)), "2.40");
        assert_eq!(fixed2(dec!(25)), "25.00");
    }
}

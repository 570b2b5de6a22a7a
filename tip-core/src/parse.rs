//! Coercion of free-form text fields into numbers.
//!
//! Form fields hold whatever the user typed. Text that does not read as a
//! number becomes zero, which the submit validation then rejects; parsing
//! itself never fails.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::format::CurrencyFormat;

/// Whether `c` separates thousands in `format`'s locale.
///
/// Locales that group with a (narrow) no-break space also accept a plain
/// space, since that is what keyboards produce.
fn is_grouping_separator(
    c: char,
    format: &CurrencyFormat,
) -> bool {
    c == format.grouping_separator || (format.grouping_separator.is_whitespace() && c == ' ')
}

/// Strips well-placed grouping separators from the integer part.
///
/// The first group holds one to three digits and every later group exactly
/// three. Anything else is not a grouped number.
fn ungroup_integer(
    integer: &str,
    format: &CurrencyFormat,
) -> Option<String> {
    if !integer.chars().any(|c| is_grouping_separator(c, format)) {
        return Some(integer.to_string());
    }

    let (sign, digits) = match integer.strip_prefix(['-', '+']) {
        Some(rest) => (&integer[..1], rest),
        None => ("", integer),
    };

    let mut ungrouped = sign.to_string();
    for (i, group) in digits.split(|c: char| is_grouping_separator(c, format)).enumerate() {
        let valid_len = if i == 0 { (1..=3).contains(&group.len()) } else { group.len() == 3 };
        if !valid_len || !group.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        ungrouped.push_str(group);
    }
    Some(ungrouped)
}

/// Normalizes amount text for decimal parsing.
///
/// Trims the ends, removes grouping separators from the integer part and
/// rewrites the locale's decimal separator as `.`. Returns `None` when a
/// grouping separator is out of place.
fn normalize_amount_input(
    s: &str,
    format: &CurrencyFormat,
) -> Option<String> {
    let trimmed = s.trim();
    let (integer, fraction) = match trimmed.split_once(format.decimal_separator) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (trimmed, None),
    };

    if fraction.is_some_and(|f| f.chars().any(|c| is_grouping_separator(c, format))) {
        return None;
    }

    let integer = ungroup_integer(integer, format)?;
    Some(match fraction {
        Some(fraction) => format!("{integer}.{fraction}"),
        None => integer,
    })
}

/// Parses a bill amount typed in the conventions of `format`'s locale.
///
/// Accepts plain (`"1,234.56"` for `en-US`, `"1.234,56"` for `de-DE`) and
/// scientific (`"1.5e2"`) notation. Empty or unparsable input is zero, and so
/// is a number too large for [`Decimal`].
pub fn parse_amount(
    s: &str,
    format: &CurrencyFormat,
) -> Decimal {
    let Some(normalized) = normalize_amount_input(s, format) else {
        return Decimal::ZERO;
    };
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or(Decimal::ZERO)
}

/// Parses a whole-number tip percentage. Empty or unparsable input is zero.
pub fn parse_percent(s: &str) -> i32 {
    s.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn usd() -> CurrencyFormat {
        CurrencyFormat::for_locale("en-US")
    }

    #[test]
    fn parse_amount_accepts_plain_decimal() {
        assert_eq!(parse_amount("50", &usd()), dec!(50));
        assert_eq!(parse_amount("12.34", &usd()), dec!(12.34));
    }

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56", &usd()), dec!(1234.56));
        assert_eq!(parse_amount("1,234,567.89", &usd()), dec!(1234567.89));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  123.45  ", &usd()), dec!(123.45));
    }

    #[test]
    fn parse_amount_empty_treated_as_zero() {
        assert_eq!(parse_amount("", &usd()), Decimal::ZERO);
        assert_eq!(parse_amount("   ", &usd()), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_invalid_treated_as_zero() {
        assert_eq!(parse_amount("abc", &usd()), Decimal::ZERO);
        assert_eq!(parse_amount("12.3.4", &usd()), Decimal::ZERO);
        assert_eq!(parse_amount("$50", &usd()), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_keeps_negative_values() {
        assert_eq!(parse_amount("-50", &usd()), dec!(-50));
    }

    #[test]
    fn parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("1.5e2", &usd()), dec!(150));
    }

    #[test]
    fn parse_amount_follows_locale_separators() {
        let eur = CurrencyFormat::for_locale("de-DE");

        assert_eq!(parse_amount("1.234,56", &eur), dec!(1234.56));
        assert_eq!(parse_amount("7,5", &eur), dec!(7.5));
    }

    #[test]
    fn parse_amount_accepts_spaces_as_grouping_in_fr_fr() {
        let eur = CurrencyFormat::for_locale("fr-FR");

        assert_eq!(parse_amount("1 234,50", &eur), dec!(1234.50));
        assert_eq!(parse_amount("1\u{202f}234,50", &eur), dec!(1234.50));
    }

    #[test]
    fn parse_amount_rejects_misplaced_grouping() {
        assert_eq!(parse_amount("5,0", &usd()), Decimal::ZERO);
        assert_eq!(parse_amount("1,2,3", &usd()), Decimal::ZERO);
        assert_eq!(parse_amount(",123", &usd()), Decimal::ZERO);
        assert_eq!(parse_amount("1234,567", &usd()), Decimal::ZERO);
        assert_eq!(parse_amount("1.234,5", &usd()), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_rejects_interior_whitespace() {
        assert_eq!(parse_amount("5 0", &usd()), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_rejects_dot_decimal_in_de_de() {
        let eur = CurrencyFormat::for_locale("de-DE");

        assert_eq!(parse_amount("50.5", &eur), Decimal::ZERO);
        assert_eq!(parse_amount("50,5", &eur), dec!(50.5));
    }

    #[test]
    fn parse_amount_keeps_sign_on_grouped_values() {
        assert_eq!(parse_amount("-1,234.50", &usd()), dec!(-1234.50));
    }

    #[test]
    fn parse_amount_too_large_for_decimal_is_zero() {
        let huge = "9".repeat(32);

        assert_eq!(parse_amount(&huge, &usd()), Decimal::ZERO);
    }

    #[test]
    fn parse_percent_accepts_integers() {
        assert_eq!(parse_percent("15"), 15);
        assert_eq!(parse_percent(" 20 "), 20);
        assert_eq!(parse_percent("-5"), -5);
    }

    #[test]
    fn parse_percent_invalid_treated_as_zero() {
        assert_eq!(parse_percent(""), 0);
        assert_eq!(parse_percent("fifteen"), 0);
        assert_eq!(parse_percent("15.5"), 0);
        assert_eq!(parse_percent("99999999999"), 0);
    }
}

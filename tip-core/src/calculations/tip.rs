//! The tip calculator.
//!
//! A tip is `amount × percent / 100`, optionally rounded up to the next whole
//! currency unit, then formatted for the active locale.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::calculations::calculate_tip;
//! use tip_core::format::CurrencyFormat;
//!
//! let usd = CurrencyFormat::for_locale("en-US");
//!
//! assert_eq!(calculate_tip(dec!(50), 15, false, &usd), "$7.50");
//! assert_eq!(calculate_tip(dec!(50), 15, true, &usd), "$8.00");
//! ```
//!
//! The calculator does not validate its inputs. Negative amounts or
//! percentages are computed as given; rejecting them is the job of the form
//! (see [`crate::form`]).

use rust_decimal::Decimal;

use crate::calculations::common::{ceil_whole, percent_of};
use crate::format::CurrencyFormat;

/// Computes the numeric tip for `amount` at `percent` percent.
///
/// When `round_up` is set the raw tip is rounded toward positive infinity to
/// a whole unit. The result is unrounded otherwise; rounding to the
/// currency's fraction digits happens when it is formatted.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::compute_tip;
///
/// assert_eq!(compute_tip(dec!(50), 15, false), dec!(7.50));
/// assert_eq!(compute_tip(dec!(50), 15, true), dec!(8));
/// assert_eq!(compute_tip(dec!(0), 15, true), dec!(0));
/// ```
pub fn compute_tip(
    amount: Decimal,
    percent: i32,
    round_up: bool,
) -> Decimal {
    let raw = percent_of(amount, percent);
    if round_up { ceil_whole(raw) } else { raw }
}

/// Computes the tip and formats it as a currency string.
///
/// Total: every input produces a string. A zero amount or a zero percentage
/// yields the formatted zero of `format`.
pub fn calculate_tip(
    amount: Decimal,
    percent: i32,
    round_up: bool,
    format: &CurrencyFormat,
) -> String {
    format.format(compute_tip(amount, percent, round_up))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn usd() -> CurrencyFormat {
        CurrencyFormat::for_locale("en-US")
    }

    // =========================================================================
    // compute_tip tests
    // =========================================================================

    #[test]
    fn compute_tip_without_rounding_keeps_fraction() {
        let result = compute_tip(dec!(42.80), 18, false);

        assert_eq!(result, dec!(7.704));
    }

    #[test]
    fn compute_tip_with_rounding_uses_ceiling() {
        let result = compute_tip(dec!(42.80), 18, true);

        assert_eq!(result, dec!(8));
    }

    #[test]
    fn compute_tip_with_rounding_keeps_whole_tip() {
        let result = compute_tip(dec!(100), 20, true);

        assert_eq!(result, dec!(20));
    }

    #[test]
    fn compute_tip_rounds_tiny_tip_up_to_one_unit() {
        let result = compute_tip(dec!(0.10), 1, true);

        assert_eq!(result, dec!(1));
    }

    #[test]
    fn compute_tip_passes_negative_input_through() {
        assert_eq!(compute_tip(dec!(-50), 15, false), dec!(-7.5));
        assert_eq!(compute_tip(dec!(50), -15, false), dec!(-7.5));
        assert_eq!(compute_tip(dec!(-50), 15, true), dec!(-7));
    }

    // =========================================================================
    // calculate_tip tests
    // =========================================================================

    #[test]
    fn calculate_tip_formats_fifteen_percent_of_fifty() {
        let result = calculate_tip(dec!(50), 15, false, &usd());

        assert_eq!(result, "$7.50");
    }

    #[test]
    fn calculate_tip_rounds_fifteen_percent_of_fifty_up() {
        let result = calculate_tip(dec!(50), 15, true, &usd());

        assert_eq!(result, "$8.00");
    }

    #[test]
    fn calculate_tip_zero_amount_is_formatted_zero() {
        assert_eq!(calculate_tip(Decimal::ZERO, 15, false, &usd()), "$0.00");
        assert_eq!(calculate_tip(Decimal::ZERO, 15, true, &usd()), "$0.00");
    }

    #[test]
    fn calculate_tip_zero_percent_is_formatted_zero() {
        assert_eq!(calculate_tip(dec!(87.25), 0, false, &usd()), "$0.00");
        assert_eq!(calculate_tip(dec!(87.25), 0, true, &usd()), "$0.00");
    }

    #[test]
    fn calculate_tip_matches_formatted_raw_product() {
        let cases = [
            (dec!(19.99), 15),
            (dec!(1234.56), 18),
            (dec!(0.01), 50),
            (dec!(75), 22),
        ];

        for (amount, percent) in cases {
            let expected = usd().format(amount * Decimal::from(percent) / dec!(100));
            assert_eq!(calculate_tip(amount, percent, false, &usd()), expected);
        }
    }

    #[test]
    fn calculate_tip_matches_formatted_ceiling() {
        let cases = [
            (dec!(19.99), 15),
            (dec!(1234.56), 18),
            (dec!(0.01), 50),
            (dec!(75), 22),
        ];

        for (amount, percent) in cases {
            let expected = usd().format((amount * Decimal::from(percent) / dec!(100)).ceil());
            assert_eq!(calculate_tip(amount, percent, true, &usd()), expected);
        }
    }

    #[test]
    fn calculate_tip_groups_large_tips() {
        let result = calculate_tip(dec!(123456.78), 10, false, &usd());

        assert_eq!(result, "$12,345.68");
    }

    #[test]
    fn calculate_tip_uses_locale_conventions() {
        let eur = CurrencyFormat::for_locale("de-DE");
        let jpy = CurrencyFormat::for_locale("ja-JP");

        assert_eq!(calculate_tip(dec!(50), 15, false, &eur), "7,50\u{a0}€");
        assert_eq!(calculate_tip(dec!(5000), 15, false, &jpy), "￥750");
    }

    #[test]
    fn calculate_tip_is_stable_across_calls() {
        let first = calculate_tip(dec!(64.30), 17, true, &usd());
        let second = calculate_tip(dec!(64.30), 17, true, &usd());

        assert_eq!(first, second);
    }
}

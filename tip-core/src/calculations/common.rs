//! Common utility functions for tip calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value up to the next whole currency unit.
///
/// Rounding is toward positive infinity, so negative values move toward
/// zero. Values that are already whole are returned unchanged.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::ceil_whole;
///
/// assert_eq!(ceil_whole(dec!(7.50)), dec!(8));
/// assert_eq!(ceil_whole(dec!(7.01)), dec!(8));
/// assert_eq!(ceil_whole(dec!(7.00)), dec!(7));
/// assert_eq!(ceil_whole(dec!(-7.50)), dec!(-7));
/// ```
pub fn ceil_whole(value: Decimal) -> Decimal {
    value.ceil()
}

/// Returns `percent` percent of `amount`.
///
/// The multiplication saturates at the bounds of [`Decimal`] instead of
/// panicking, so the result is defined for every input.
pub fn percent_of(
    amount: Decimal,
    percent: i32,
) -> Decimal {
    amount.saturating_mul(Decimal::from(percent)) / Decimal::ONE_HUNDRED
}

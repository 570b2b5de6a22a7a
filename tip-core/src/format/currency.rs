//! Currency formatting per locale.
//!
//! Each supported locale maps to a [`CurrencyFormat`] describing its currency
//! symbol, where the symbol goes, and which separators and how many fraction
//! digits it uses.
//!
//! | locale  | example         |
//! |---------|-----------------|
//! | `en-US` | `$1,234.56`     |
//! | `en-GB` | `£1,234.56`     |
//! | `en-CA` | `$1,234.56`     |
//! | `de-DE` | `1.234,56 €`    |
//! | `fr-FR` | `1 234,56 €`    |
//! | `es-ES` | `1234,56 €`     |
//! | `es-MX` | `$1,234.56`     |
//! | `pt-BR` | `R$ 1.234,56`   |
//! | `ja-JP` | `￥1,235`       |

use rust_decimal::{Decimal, RoundingStrategy};

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$7.50`
    Prefix,
    /// `R$ 7,50`
    PrefixSpaced,
    /// `7,50€`
    Suffix,
    /// `7,50 €`
    SuffixSpaced,
}

/// Currency conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Locale tag this format was resolved for, e.g. `"en-US"`.
    pub locale: &'static str,
    /// ISO 4217 currency code.
    pub code: &'static str,
    pub symbol: &'static str,
    pub position: SymbolPosition,
    pub grouping_separator: char,
    pub decimal_separator: char,
    /// Digits after the decimal separator; 0 for currencies without minor units.
    pub fraction_digits: u32,
    /// Minimum number of digits in front of the first grouping separator.
    pub min_grouping_digits: usize,
}

const EN_US: CurrencyFormat = CurrencyFormat {
    locale: "en-US",
    code: "USD",
    symbol: "$",
    position: SymbolPosition::Prefix,
    grouping_separator: ',',
    decimal_separator: '.',
    fraction_digits: 2,
    min_grouping_digits: 1,
};

const LOCALES: &[CurrencyFormat] = &[
    EN_US,
    CurrencyFormat {
        locale: "en-GB",
        code: "GBP",
        symbol: "£",
        ..EN_US
    },
    CurrencyFormat {
        locale: "en-CA",
        code: "CAD",
        ..EN_US
    },
    CurrencyFormat {
        locale: "de-DE",
        code: "EUR",
        symbol: "€",
        position: SymbolPosition::SuffixSpaced,
        grouping_separator: '.',
        decimal_separator: ',',
        fraction_digits: 2,
        min_grouping_digits: 1,
    },
    CurrencyFormat {
        locale: "fr-FR",
        code: "EUR",
        symbol: "€",
        position: SymbolPosition::SuffixSpaced,
        grouping_separator: NARROW_NBSP,
        decimal_separator: ',',
        fraction_digits: 2,
        min_grouping_digits: 1,
    },
    CurrencyFormat {
        locale: "es-ES",
        code: "EUR",
        symbol: "€",
        position: SymbolPosition::SuffixSpaced,
        grouping_separator: '.',
        decimal_separator: ',',
        fraction_digits: 2,
        min_grouping_digits: 2,
    },
    CurrencyFormat {
        locale: "es-MX",
        code: "MXN",
        ..EN_US
    },
    CurrencyFormat {
        locale: "pt-BR",
        code: "BRL",
        symbol: "R$",
        position: SymbolPosition::PrefixSpaced,
        grouping_separator: '.',
        decimal_separator: ',',
        fraction_digits: 2,
        min_grouping_digits: 1,
    },
    CurrencyFormat {
        locale: "ja-JP",
        code: "JPY",
        symbol: "￥",
        fraction_digits: 0,
        ..EN_US
    },
];

impl Default for CurrencyFormat {
    fn default() -> Self {
        EN_US
    }
}

impl CurrencyFormat {
    /// Resolves the currency format for a locale tag.
    ///
    /// Matching is case-insensitive and accepts `_` as well as `-`
    /// (`en_us`, `EN-US`). An unknown region falls back to the first locale
    /// with the same language (`de-AT` resolves to `de-DE`); an unknown
    /// language falls back to `en-US`.
    pub fn for_locale(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-");
        let language = normalized.split('-').next().unwrap_or_default();

        LOCALES
            .iter()
            .find(|f| f.locale.eq_ignore_ascii_case(&normalized))
            .or_else(|| {
                LOCALES.iter().find(|f| {
                    f.locale
                        .split('-')
                        .next()
                        .is_some_and(|l| l.eq_ignore_ascii_case(language))
                })
            })
            .copied()
            .unwrap_or(EN_US)
    }

    /// Locale tags with a dedicated format.
    pub fn supported_locales() -> impl Iterator<Item = &'static str> {
        LOCALES.iter().map(|f| f.locale)
    }

    /// Formats `value` as an amount of this currency.
    ///
    /// The value is rounded to [`fraction_digits`](Self::fraction_digits)
    /// with half-even rounding. Negative amounts get a leading `-` in front
    /// of the whole string; a value that rounds to zero never carries a sign.
    pub fn format(
        &self,
        value: Decimal,
    ) -> String {
        let rounded =
            value.round_dp_with_strategy(self.fraction_digits, RoundingStrategy::MidpointNearestEven);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let plain = format!("{:.*}", self.fraction_digits as usize, rounded.abs());
        let (integer, fraction) = match plain.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (plain.as_str(), None),
        };

        let mut number = self.group(integer);
        if let Some(fraction) = fraction {
            number.push(self.decimal_separator);
            number.push_str(fraction);
        }

        let body = match self.position {
            SymbolPosition::Prefix => format!("{}{number}", self.symbol),
            SymbolPosition::PrefixSpaced => format!("{}{NBSP}{number}", self.symbol),
            SymbolPosition::Suffix => format!("{number}{}", self.symbol),
            SymbolPosition::SuffixSpaced => format!("{number}{NBSP}{}", self.symbol),
        };

        if negative { format!("-{body}") } else { body }
    }

    /// Inserts the grouping separator every three digits from the right.
    fn group(
        &self,
        digits: &str,
    ) -> String {
        if digits.len() < 3 + self.min_grouping_digits {
            return digits.to_string();
        }

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

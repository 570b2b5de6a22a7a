//! Locale-aware presentation of currency amounts.

mod currency;

pub use currency::{CurrencyFormat, SymbolPosition};

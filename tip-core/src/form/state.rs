use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::calculate_tip;
use crate::format::CurrencyFormat;
use crate::i18n::MessageKey;
use crate::parse::{parse_amount, parse_percent};

/// Tip percentage the form starts with.
pub const DEFAULT_TIP_PERCENT: i32 = 15;

/// Reasons a submit is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("tip percentage must be greater than zero")]
    PercentageNotPositive,
    #[error("bill amount must be greater than zero")]
    AmountNotPositive,
}

impl ValidationError {
    /// Key of the localized name of the offending field.
    pub fn field_key(&self) -> MessageKey {
        match self {
            Self::PercentageNotPositive => MessageKey::FieldTipPercentage,
            Self::AmountNotPositive => MessageKey::FieldBillAmount,
        }
    }
}

/// A discrete user action on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormEvent {
    AmountChanged(String),
    PercentChanged(String),
    RoundUpChanged(bool),
    Submit,
}

/// What applying an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A field changed; the result was left alone.
    Edited,
    /// The submit was accepted and produced this result.
    Calculated(String),
    /// The submit was rejected; the state is unchanged.
    Rejected(ValidationError),
}

/// Next state plus the outcome that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TipFormState,
    pub outcome: Outcome,
}

/// Everything the tip screen shows.
///
/// The text fields keep exactly what the user typed; they are only parsed
/// when the form is submitted. `tip_result` changes on an accepted submit
/// and at no other time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipFormState {
    pub amount_input: String,
    pub percent_input: String,
    pub round_up: bool,
    pub tip_result: String,
}

impl TipFormState {
    /// Fresh form: empty amount, `default_percent`, no rounding.
    ///
    /// The result is seeded once from those defaults, which with an empty
    /// amount is the formatted zero.
    pub fn new(
        default_percent: i32,
        format: &CurrencyFormat,
    ) -> Self {
        Self {
            amount_input: String::new(),
            percent_input: default_percent.to_string(),
            round_up: false,
            tip_result: calculate_tip(Decimal::ZERO, default_percent, false, format),
        }
    }

    pub fn amount(
        &self,
        format: &CurrencyFormat,
    ) -> Decimal {
        parse_amount(&self.amount_input, format)
    }

    pub fn percent(&self) -> i32 {
        parse_percent(&self.percent_input)
    }

    /// Checks the fields for a submit.
    ///
    /// The percentage is checked before the amount, so when both are invalid
    /// the percentage error wins.
    pub fn validate(
        &self,
        format: &CurrencyFormat,
    ) -> Result<(Decimal, i32), ValidationError> {
        let percent = self.percent();
        if percent <= 0 {
            return Err(ValidationError::PercentageNotPositive);
        }

        let amount = self.amount(format);
        if amount <= Decimal::ZERO {
            return Err(ValidationError::AmountNotPositive);
        }

        Ok((amount, percent))
    }

    /// Applies `event` and returns the resulting state. `self` is untouched.
    pub fn reduce(
        &self,
        event: FormEvent,
        format: &CurrencyFormat,
    ) -> Transition {
        let mut state = self.clone();

        let outcome = match event {
            FormEvent::AmountChanged(text) => {
                state.amount_input = text;
                Outcome::Edited
            }
            FormEvent::PercentChanged(text) => {
                state.percent_input = text;
                Outcome::Edited
            }
            FormEvent::RoundUpChanged(round_up) => {
                state.round_up = round_up;
                Outcome::Edited
            }
            FormEvent::Submit => match self.validate(format) {
                Ok((amount, percent)) => {
                    state.tip_result = calculate_tip(amount, percent, self.round_up, format);
                    Outcome::Calculated(state.tip_result.clone())
                }
                Err(error) => Outcome::Rejected(error),
            },
        };

        Transition { state, outcome }
    }
}

impl Default for TipFormState {
    fn default() -> Self {
        Self::new(DEFAULT_TIP_PERCENT, &CurrencyFormat::default())
    }
}

impl fmt::Display for TipFormState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Amount:   {:?}", self.amount_input)?;
        writeln!(f, "Percent:  {:?}", self.percent_input)?;
        writeln!(f, "Round up: {}", self.round_up)?;
        writeln!(f, "Tip:      {}", self.tip_result)
    }
}

//! Core logic for the Tip Time calculator.
//!
//! * [`calculations`]: the tip arithmetic.
//! * [`format`]: locale-aware currency strings.
//! * [`parse`]: text field coercion.
//! * [`i18n`]: message keys and the [`Localizer`](i18n::Localizer) capability.
//! * [`notify`]: the [`NotificationSink`](notify::NotificationSink) capability.
//! * [`form`]: view state, events and the submit gate.
//! * [`config`]: settings file.

pub mod calculations;
pub mod config;
pub mod form;
pub mod format;
pub mod i18n;
pub mod notify;
pub mod parse;

pub use calculations::{calculate_tip, compute_tip};
pub use config::{AppConfig, ConfigError};
pub use form::{FormEvent, Outcome, TipFormController, TipFormState, ValidationError};
pub use format::CurrencyFormat;
pub use i18n::{Localizer, MessageKey, StringCatalog};
pub use notify::{NotificationSink, RecordingSink};

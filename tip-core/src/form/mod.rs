//! The tip form: view state, events and the submit gate.
//!
//! [`TipFormState`] is a plain, serializable value. Every user action is a
//! [`FormEvent`] applied by the pure [`TipFormState::reduce`]; the
//! [`TipFormController`] wraps the reducer and reports rejected submits
//! through an injected [`NotificationSink`](crate::notify::NotificationSink).

mod controller;
mod state;

pub use controller::TipFormController;
pub use state::{DEFAULT_TIP_PERCENT, FormEvent, Outcome, TipFormState, Transition, ValidationError};

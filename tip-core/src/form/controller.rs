use tracing::debug;

use super::state::{FormEvent, Outcome, TipFormState, ValidationError};
use crate::format::CurrencyFormat;
use crate::i18n::{Localizer, MessageKey};
use crate::notify::NotificationSink;

/// Owns the tip form state and turns user events into state changes.
///
/// Rejected submits are reported to the user through the notification sink
/// and go no further: they are not errors to the caller.
#[derive(Debug)]
pub struct TipFormController<L, N> {
    state: TipFormState,
    format: CurrencyFormat,
    localizer: L,
    sink: N,
}

impl<L, N> TipFormController<L, N>
where
    L: Localizer,
    N: NotificationSink,
{
    pub fn new(
        default_percent: i32,
        format: CurrencyFormat,
        localizer: L,
        sink: N,
    ) -> Self {
        Self {
            state: TipFormState::new(default_percent, &format),
            format,
            localizer,
            sink,
        }
    }

    pub fn state(&self) -> &TipFormState {
        &self.state
    }

    pub fn format(&self) -> &CurrencyFormat {
        &self.format
    }

    pub fn localizer(&self) -> &L {
        &self.localizer
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    /// Applies one user event.
    pub fn dispatch(
        &mut self,
        event: FormEvent,
    ) -> Outcome {
        let transition = self.state.reduce(event, &self.format);
        self.state = transition.state;

        match &transition.outcome {
            Outcome::Edited => {}
            Outcome::Calculated(tip) => {
                debug!(tip = %tip, round_up = self.state.round_up, "tip calculated");
            }
            Outcome::Rejected(error) => {
                let message = self.rejection_message(*error);
                self.sink.notify(&message);
            }
        }

        transition.outcome
    }

    /// Localized text telling the user which field is invalid.
    pub fn rejection_message(
        &self,
        error: ValidationError,
    ) -> String {
        let field = self.localizer.text(error.field_key());
        self.localizer.resolve(MessageKey::GreaterThanZero, Some(&field))
    }

    /// Localized result line, e.g. `Tip Amount: $7.50`.
    pub fn result_label(&self) -> String {
        self.localizer
            .resolve(MessageKey::TipAmount, Some(&self.state.tip_result))
    }

    /// Localized percentage field label carrying the current percentage,
    /// e.g. `Tip Percentage (15%)`.
    pub fn percent_label(&self) -> String {
        let percent = self.state.percent().to_string();
        self.localizer.resolve(MessageKey::TipPercentage, Some(&percent))
    }

    /// Localized text for a key without arguments.
    pub fn label(
        &self,
        key: MessageKey,
    ) -> String {
        self.localizer.text(key)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form::DEFAULT_TIP_PERCENT;
    use crate::i18n::StringCatalog;
    use crate::notify::RecordingSink;

    fn controller() -> TipFormController<StringCatalog, RecordingSink> {
        TipFormController::new(
            DEFAULT_TIP_PERCENT,
            CurrencyFormat::for_locale("en-US"),
            StringCatalog::default(),
            RecordingSink::new(),
        )
    }

    #[test]
    fn edits_are_silent() {
        let mut form = controller();

        let outcome = form.dispatch(FormEvent::AmountChanged("50".into()));

        assert_eq!(outcome, Outcome::Edited);
        assert!(form.sink().messages().is_empty());
    }

    #[test]
    fn accepted_submit_updates_result_label() {
        let mut form = controller();
        form.dispatch(FormEvent::AmountChanged("50".into()));

        let outcome = form.dispatch(FormEvent::Submit);

        assert_eq!(outcome, Outcome::Calculated("$7.50".to_string()));
        assert_eq!(form.result_label(), "Tip Amount: $7.50");
        assert!(form.sink().messages().is_empty());
    }

    #[test]
    fn rejected_percentage_notifies_user() {
        let mut form = controller();
        form.dispatch(FormEvent::AmountChanged("50".into()));
        form.dispatch(FormEvent::PercentChanged("0".into()));

        let outcome = form.dispatch(FormEvent::Submit);

        assert_eq!(outcome, Outcome::Rejected(ValidationError::PercentageNotPositive));
        assert_eq!(
            form.sink().messages(),
            ["The tip percentage must be greater than zero"]
        );
        assert_eq!(form.state().tip_result, "$0.00");
    }

    #[test]
    fn rejected_amount_notifies_user() {
        let mut form = controller();

        let outcome = form.dispatch(FormEvent::Submit);

        assert_eq!(outcome, Outcome::Rejected(ValidationError::AmountNotPositive));
        assert_eq!(form.sink().last(), Some("The bill amount must be greater than zero"));
    }

    #[test]
    fn rejection_message_is_localized() {
        let form = TipFormController::new(
            DEFAULT_TIP_PERCENT,
            CurrencyFormat::for_locale("es-ES"),
            StringCatalog::for_locale("es-ES"),
            RecordingSink::new(),
        );

        let message = form.rejection_message(ValidationError::AmountNotPositive);

        assert_eq!(message, "El monto de la cuenta debe ser mayor que cero");
    }

    #[test]
    fn percent_label_tracks_field_value() {
        let mut form = controller();
        assert_eq!(form.percent_label(), "Tip Percentage (15%)");

        form.dispatch(FormEvent::PercentChanged("20".into()));
        assert_eq!(form.percent_label(), "Tip Percentage (20%)");

        form.dispatch(FormEvent::PercentChanged("lots".into()));
        assert_eq!(form.percent_label(), "Tip Percentage (0%)");
    }

    #[test]
    fn labels_come_from_localizer() {
        let form = controller();

        assert_eq!(form.label(MessageKey::CalculateButton), "Calculate");
        assert_eq!(form.label(MessageKey::RoundUpTip), "Round up tip?");
    }
}

use egui::{Key, RichText, Ui};
use tip_core::{FormEvent, Localizer, MessageKey, NotificationSink, TipFormController};

use super::number_field;

pub struct TipFormView;

impl TipFormView {
    /// Width of the text fields and the button.
    const FIELD_WIDTH: f32 = 280.0;
    const BUTTON_HEIGHT: f32 = 36.0;
    const RESULT_SIZE: f32 = 28.0;

    /// Draws the form and dispatches whatever the user did this frame.
    pub fn show<L, N>(
        form: &mut TipFormController<L, N>,
        ui: &mut Ui,
    ) where
        L: Localizer,
        N: NotificationSink,
    {
        let mut events = Vec::new();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(Self::FIELD_WIDTH);
                ui.add_space(40.0);

                ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
                    ui.label(RichText::new(form.label(MessageKey::CalculateTip)).strong());
                });
                ui.add_space(16.0);

                let mut amount = form.state().amount_input.clone();
                let amount_response = number_field(
                    ui,
                    &form.label(MessageKey::BillAmount),
                    &mut amount,
                    Self::FIELD_WIDTH,
                );
                if amount_response.changed() {
                    events.push(FormEvent::AmountChanged(amount));
                }
                ui.add_space(30.0);

                let mut percent = form.state().percent_input.clone();
                let percent_response = number_field(
                    ui,
                    &form.percent_label(),
                    &mut percent,
                    Self::FIELD_WIDTH,
                );
                if percent_response.changed() {
                    events.push(FormEvent::PercentChanged(percent));
                }
                ui.add_space(30.0);

                let mut round_up = form.state().round_up;
                if ui
                    .checkbox(&mut round_up, form.label(MessageKey::RoundUpTip))
                    .changed()
                {
                    events.push(FormEvent::RoundUpChanged(round_up));
                }
                ui.add_space(30.0);

                let submitted_with_enter = (amount_response.lost_focus()
                    || percent_response.lost_focus())
                    && ui.input(|i| i.key_pressed(Key::Enter));
                let clicked = ui
                    .add_sized(
                        [Self::FIELD_WIDTH, Self::BUTTON_HEIGHT],
                        egui::Button::new(form.label(MessageKey::CalculateButton)),
                    )
                    .clicked();
                if clicked || submitted_with_enter {
                    events.push(FormEvent::Submit);
                }

                ui.add_space(60.0);
                ui.label(
                    RichText::new(form.result_label())
                        .size(Self::RESULT_SIZE)
                        .strong(),
                );
            });
        });

        for event in events {
            form.dispatch(event);
        }
    }
}

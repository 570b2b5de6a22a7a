mod tip_form;
mod toasts;

pub use tip_form::TipFormView;
pub use toasts::show_toasts;

use egui::{Response, Ui};

/// A labeled single-line text field sized for numeric input.
pub fn number_field(
    ui: &mut Ui,
    label: &str,
    value: &mut String,
    width: f32,
) -> Response {
    ui.vertical(|ui| {
        ui.label(label);
        ui.add(
            egui::TextEdit::singleline(value)
                .desired_width(width)
                .hint_text("0"),
        )
    })
    .inner
}

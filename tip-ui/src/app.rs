use std::time::{Duration, Instant};

use tip_core::{AppConfig, ConfigError, StringCatalog, TipFormController};
use tracing::info;

use crate::{
    components::{TipFormView, show_toasts},
    toast::ToastQueue,
};

/// The form controller as wired up by the desktop app.
pub type TipForm = TipFormController<StringCatalog, ToastQueue>;

/// Main application state
pub struct TipApp {
    form: TipForm,
}

impl TipApp {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let toasts = ToastQueue::new(Duration::from_millis(config.notification_ms));
        let form = TipFormController::new(
            config.default_tip_percent,
            config.currency_format(),
            config.catalog()?,
            toasts,
        );

        info!(locale = %config.locale, currency = form.format().code, "tip form ready");
        Ok(Self { form })
    }

    pub fn form(&self) -> &TipForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TipForm {
        &mut self.form
    }
}

impl eframe::App for TipApp {
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        let now = Instant::now();
        self.form.sink_mut().expire(now);

        egui::CentralPanel::default().show(ctx, |ui| TipFormView::show(&mut self.form, ui));

        show_toasts(ctx, self.form.sink());

        // Keep drawing while a toast is up so it disappears on time.
        if let Some(remaining) = self.form.sink().next_expiry(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

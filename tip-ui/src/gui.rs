use anyhow::Context as _;
use egui::Vec2;
use tip_core::{AppConfig, MessageKey};
use tracing::info;

use crate::app::TipApp;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Vec2,
    pub min_size: Vec2,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self {
            size: egui::vec2(400.0, 720.0),
            min_size: egui::vec2(320.0, 520.0),
        }
    }
}

/// Opens the main window and runs the event loop until it is closed.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let app = TipApp::new(&config).context("cannot build tip form")?;
    let title = app.form().label(MessageKey::AppTitle);
    let prefs = WindowPreferences::default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(prefs.size)
            .with_min_inner_size(prefs.min_size),
        ..Default::default()
    };

    info!(%title, "opening window");
    eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("window event loop failed: {e}"))?;

    info!("window closed");
    Ok(())
}

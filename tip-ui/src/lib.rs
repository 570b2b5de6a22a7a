pub mod app;
pub mod cli;
pub mod components;
pub mod gui;
pub mod logging;
pub mod toast;

pub use app::TipApp;
pub use gui::run;

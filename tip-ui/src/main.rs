use clap::Parser;
use tracing::{debug, info};

use tip_ui::{cli::Cli, gui, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    logging::init_logging(&config.log_level);
    if cli.quiet {
        logging::set_stdout_enabled(false)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    info!(locale = %config.locale, tip = config.default_tip_percent, "starting Tip Time");
    debug!(?config, "resolved config");

    gui::run(config)
}

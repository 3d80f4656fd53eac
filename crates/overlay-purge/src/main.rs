use overlay_purge_core::config::defaults::DEFAULT_LOG_LEVEL;
use overlay_purge_core::{PurgeConfig, events, init_logging};

mod app;
mod commands;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    // The log level lives in the config, so load it before initializing logging
    let config = PurgeConfig::load_hierarchy();
    init_logging(
        config
            .as_ref()
            .map(PurgeConfig::log_level)
            .unwrap_or(DEFAULT_LOG_LEVEL),
    );
    events::log_app_startup();

    let config = config.map_err(commands::logged)?;
    commands::run_command(&matches, &config)?;

    Ok(())
}

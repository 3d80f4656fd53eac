use clap::ArgMatches;
use tracing::error;

use overlay_purge_core::errors::OverlayPurgeError;
use overlay_purge_core::{CloudinaryClient, PurgeConfig, events, purge_ops};

pub fn run_command(
    matches: &ArgMatches,
    config: &PurgeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(overlay) = matches.get_one::<String>("overlay") else {
        error!(event = "cli.overlay_missing");
        return Err("--overlay is required".into());
    };

    let credentials = config.credentials().map_err(logged)?;
    let client = CloudinaryClient::new(credentials, config.api_base(), config.request_timeout())
        .map_err(logged)?;

    let summary = purge_ops::run_purge(&client, overlay).map_err(logged)?;

    events::log_run_report(
        &summary.overlay,
        summary.transformations.len(),
        summary.total_submitted,
    );

    Ok(())
}

/// Log an error with its code on the way out.
pub fn logged<E: OverlayPurgeError>(error: E) -> E {
    events::log_coded_error(&error);
    error
}

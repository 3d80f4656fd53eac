//! Process lifecycle events shared by the CLI entry point.

use tracing::{error, info};

use crate::errors::OverlayPurgeError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Emit the final count line. Always logged, even when nothing matched.
pub fn log_run_report(overlay: &str, transformations: usize, total_submitted: usize) {
    info!(
        event = "core.app.run_reported",
        overlay = overlay,
        transformations = transformations,
        total_submitted = total_submitted,
        "Deleted overlay transformations associated with {total_submitted} resources."
    );
}

/// Log an application error together with its stable error code.
pub fn log_coded_error(error: &dyn OverlayPurgeError) {
    if error.is_user_error() {
        error!(
            event = "core.app.user_error",
            code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            code = error.error_code(),
            error = %error
        );
    }
}

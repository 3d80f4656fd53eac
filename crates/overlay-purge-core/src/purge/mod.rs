pub mod errors;
pub mod handler;
mod operations;
pub mod types;

// Public API exports
pub use errors::PurgeError;
pub use handler::{delete_batches, run_purge};
pub use operations::{partition_batches, validate_overlay_name};
pub use types::{PurgeStage, PurgeSummary};

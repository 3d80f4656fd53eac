pub mod handler;
pub mod operations;

// Public API exports
pub use handler::find_transformations;
pub use operations::{OVERLAY_PREFIX, matches_overlay, overlay_marker};

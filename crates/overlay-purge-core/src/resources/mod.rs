pub mod handler;
pub mod types;

// Public API exports
pub use handler::{resolve_all, resolve_resources};
pub use types::TransformationMap;

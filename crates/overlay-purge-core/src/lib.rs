//! overlay-purge-core: Core library for retiring Cloudinary overlay derivatives
//!
//! When an overlay image is retired, every derived image that was rendered
//! with it still sits in storage and in the CDN cache. This library finds the
//! transformations that reference the overlay, collects the derived resources
//! built from them, and deletes those derivatives in batches while keeping the
//! original assets.
//!
//! # Main Entry Points
//!
//! - [`purge`] - Run the whole list → resolve → delete sequence
//! - [`transformations`] - Find transformations that use an overlay
//! - [`resources`] - Collect derived resources per transformation
//! - [`api`] - The media API seam and its Cloudinary client
//! - [`config`] - Configuration management

pub mod api;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod purge;
pub mod resources;
pub mod transformations;

// Re-export commonly used types at crate root for convenience
pub use api::{ApiError, CloudinaryClient, MediaApi};
pub use config::PurgeConfig;
pub use purge::{PurgeError, PurgeSummary};
pub use resources::TransformationMap;

// Re-export handler modules as the primary API
pub use purge::handler as purge_ops;

// Re-export logging initialization
pub use logging::init_logging;

pub mod cloudinary;
pub mod errors;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Public API exports
pub use cloudinary::CloudinaryClient;
pub use errors::ApiError;
pub use traits::MediaApi;
pub use types::{
    DeleteRequest, DeleteResponse, DerivedPage, DerivedResource, MAX_DELETE_BATCH, MAX_PAGE_SIZE,
    TransformationEntry, TransformationPage,
};

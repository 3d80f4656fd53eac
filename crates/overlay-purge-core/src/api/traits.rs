//! Media API trait definition.

use crate::api::errors::ApiError;
use crate::api::types::{DeleteRequest, DeleteResponse, DerivedPage, TransformationPage};

/// The three Admin API operations the purge needs.
///
/// Implemented by [`crate::api::CloudinaryClient`] for real runs and by an
/// in-memory fake in tests. Each listing call returns at most
/// [`crate::api::MAX_PAGE_SIZE`] entries; pass the previous page's
/// `next_cursor` to continue.
pub trait MediaApi {
    /// List transformations, one page per call.
    fn list_transformations(&self, cursor: Option<&str>) -> Result<TransformationPage, ApiError>;

    /// List the derived resources built from one transformation.
    fn transformation_details(
        &self,
        transformation: &str,
        cursor: Option<&str>,
    ) -> Result<DerivedPage, ApiError>;

    /// Delete derivatives for up to [`crate::api::MAX_DELETE_BATCH`] public ids.
    fn delete_derived(&self, request: &DeleteRequest) -> Result<DeleteResponse, ApiError>;
}

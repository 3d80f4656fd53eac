//! Scripted in-memory [`MediaApi`] used by unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::api::errors::ApiError;
use crate::api::traits::MediaApi;
use crate::api::types::{
    DeleteRequest, DeleteResponse, DerivedPage, DerivedResource, TransformationEntry,
    TransformationPage,
};

/// A scripted API response; errors are produced lazily since `ApiError` is not `Clone`.
pub(crate) enum Scripted<T> {
    Page(T),
    RateLimited,
    Failure(u16),
}

impl<T> Scripted<T> {
    fn into_result(self) -> Result<T, ApiError> {
        match self {
            Scripted::Page(page) => Ok(page),
            Scripted::RateLimited => Err(ApiError::RateLimited),
            Scripted::Failure(status) => Err(ApiError::Status {
                status,
                message: "scripted failure".to_string(),
            }),
        }
    }
}

/// Records every call and replays scripted pages in order.
#[derive(Default)]
pub(crate) struct FakeMediaApi {
    listing: RefCell<VecDeque<Scripted<TransformationPage>>>,
    details: RefCell<HashMap<String, VecDeque<Scripted<DerivedPage>>>>,
    fail_delete_call: Option<usize>,
    pub listing_cursors: RefCell<Vec<Option<String>>>,
    pub detail_calls: RefCell<Vec<(String, Option<String>)>>,
    pub delete_calls: RefCell<Vec<DeleteRequest>>,
}

impl FakeMediaApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(self, page: Scripted<TransformationPage>) -> Self {
        self.listing.borrow_mut().push_back(page);
        self
    }

    pub fn with_details(self, transformation: &str, page: Scripted<DerivedPage>) -> Self {
        self.details
            .borrow_mut()
            .entry(transformation.to_string())
            .or_default()
            .push_back(page);
        self
    }

    /// Fail the n-th (0-based) delete call with a 500.
    pub fn failing_delete_at(mut self, call: usize) -> Self {
        self.fail_delete_call = Some(call);
        self
    }

    /// Queue `ids` for `transformation`, split into pages of `page_size`.
    pub fn with_derived_ids(
        mut self,
        transformation: &str,
        ids: &[String],
        page_size: usize,
    ) -> Self {
        let chunks: Vec<&[String]> = ids.chunks(page_size.max(1)).collect();
        let last = chunks.len().saturating_sub(1);
        for (index, chunk) in chunks.into_iter().enumerate() {
            let next_cursor = (index != last).then(|| format!("{transformation}-{}", index + 1));
            let page = derived_page(chunk, next_cursor);
            self = self.with_details(transformation, Scripted::Page(page));
        }
        self
    }
}

impl MediaApi for FakeMediaApi {
    fn list_transformations(&self, cursor: Option<&str>) -> Result<TransformationPage, ApiError> {
        self.listing_cursors
            .borrow_mut()
            .push(cursor.map(str::to_string));
        self.listing
            .borrow_mut()
            .pop_front()
            .unwrap_or(Scripted::Page(TransformationPage::default()))
            .into_result()
    }

    fn transformation_details(
        &self,
        transformation: &str,
        cursor: Option<&str>,
    ) -> Result<DerivedPage, ApiError> {
        self.detail_calls
            .borrow_mut()
            .push((transformation.to_string(), cursor.map(str::to_string)));
        self.details
            .borrow_mut()
            .get_mut(transformation)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Scripted::Page(DerivedPage::default()))
            .into_result()
    }

    fn delete_derived(&self, request: &DeleteRequest) -> Result<DeleteResponse, ApiError> {
        let call = self.delete_calls.borrow().len();
        self.delete_calls.borrow_mut().push(request.clone());
        if self.fail_delete_call == Some(call) {
            return Scripted::<DeleteResponse>::Failure(500).into_result();
        }
        Ok(DeleteResponse {
            deleted: request
                .public_ids
                .iter()
                .map(|id| (id.clone(), "deleted".to_string()))
                .collect(),
            partial: false,
        })
    }
}

pub(crate) fn listing_page(
    entries: Vec<TransformationEntry>,
    next_cursor: Option<&str>,
) -> TransformationPage {
    TransformationPage {
        transformations: entries,
        next_cursor: next_cursor.map(str::to_string),
    }
}

pub(crate) fn derived_page(ids: &[String], next_cursor: Option<String>) -> DerivedPage {
    DerivedPage {
        derived: ids
            .iter()
            .map(|id| DerivedResource {
                public_id: id.clone(),
            })
            .collect(),
        next_cursor,
    }
}

/// `prefix/0`, `prefix/1`, ...
pub(crate) fn public_ids(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}/{i}")).collect()
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Largest page the Admin API returns for listing endpoints.
pub const MAX_PAGE_SIZE: usize = 500;

/// Largest number of public ids accepted by one delete call.
pub const MAX_DELETE_BATCH: usize = 100;

/// One entry of the transformation listing.
///
/// `used` is kept as a raw JSON value: a missing or non-boolean flag must be
/// reported for that entry alone instead of failing to decode the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationEntry {
    pub name: String,
    #[serde(default)]
    pub used: Option<serde_json::Value>,
}

impl TransformationEntry {
    pub fn new(name: impl Into<String>, used: bool) -> Self {
        Self {
            name: name.into(),
            used: Some(serde_json::Value::Bool(used)),
        }
    }

    /// The `used` flag, or `None` when it is absent or not a boolean.
    pub fn used_flag(&self) -> Option<bool> {
        self.used.as_ref().and_then(serde_json::Value::as_bool)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformationPage {
    #[serde(default)]
    pub transformations: Vec<TransformationEntry>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// A derived resource as returned by the transformation detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedResource {
    pub public_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedPage {
    #[serde(default)]
    pub derived: Vec<DerivedResource>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Delete derivatives of up to [`MAX_DELETE_BATCH`] public ids for one transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub public_ids: Vec<String>,
    pub resource_type: &'static str,
    pub delivery_type: &'static str,
    pub keep_original: bool,
    pub invalidate: bool,
    pub transformation: String,
}

impl DeleteRequest {
    /// Request that removes only the derivative built by `transformation`
    /// and purges it from the CDN; the original upload is kept.
    pub fn derivatives(public_ids: Vec<String>, transformation: impl Into<String>) -> Self {
        Self {
            public_ids,
            resource_type: "image",
            delivery_type: "upload",
            keep_original: true,
            invalidate: true,
            transformation: transformation.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// public id → status reported by the API (e.g. "deleted", "not_found")
    #[serde(default)]
    pub deleted: BTreeMap<String, String>,
    #[serde(default)]
    pub partial: bool,
}

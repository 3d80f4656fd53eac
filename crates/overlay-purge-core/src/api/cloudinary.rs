//! Blocking HTTP client for the Cloudinary Admin API.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::errors::ApiError;
use crate::api::traits::MediaApi;
use crate::api::types::{
    DeleteRequest, DeleteResponse, DerivedPage, MAX_PAGE_SIZE, TransformationPage,
};
use crate::config::Credentials;

type QueryPairs = Vec<(&'static str, String)>;

/// Admin API client authenticated with HTTP basic auth (api key / api secret).
pub struct CloudinaryClient {
    http: Client,
    api_base: String,
    credentials: Credentials,
}

impl CloudinaryClient {
    pub fn new(
        credentials: Credentials,
        api_base: &str,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("overlay-purge/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// `{api_base}/v1_1/{cloud_name}/{path}`
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/v1_1/{}/{}",
            self.api_base, self.credentials.cloud_name, path
        )
    }

    fn send<T: DeserializeOwned>(&self, url: &str, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret))
            .send()?;

        let status = response.status();
        debug!(
            event = "core.api.response_received",
            url = url,
            status = status.as_u16()
        );

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }

        response.json::<T>().map_err(|e| ApiError::Decode {
            endpoint: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl MediaApi for CloudinaryClient {
    fn list_transformations(&self, cursor: Option<&str>) -> Result<TransformationPage, ApiError> {
        let url = self.endpoint("transformations");
        let request = self.http.get(&url).query(&listing_query(cursor));
        self.send(&url, request)
    }

    fn transformation_details(
        &self,
        transformation: &str,
        cursor: Option<&str>,
    ) -> Result<DerivedPage, ApiError> {
        let url = self.endpoint("transformations");
        let request = self
            .http
            .get(&url)
            .query(&details_query(transformation, cursor));
        self.send(&url, request)
    }

    fn delete_derived(&self, request: &DeleteRequest) -> Result<DeleteResponse, ApiError> {
        let url = self.endpoint(&format!(
            "resources/{}/{}",
            request.resource_type, request.delivery_type
        ));
        let http_request = self.http.delete(&url).query(&delete_query(request));
        self.send(&url, http_request)
    }
}

fn listing_query(cursor: Option<&str>) -> QueryPairs {
    let mut query = vec![("max_results", MAX_PAGE_SIZE.to_string())];
    if let Some(cursor) = cursor {
        query.push(("next_cursor", cursor.to_string()));
    }
    query
}

fn details_query(transformation: &str, cursor: Option<&str>) -> QueryPairs {
    let mut query = vec![("transformation", transformation.to_string())];
    query.extend(listing_query(cursor));
    query
}

fn delete_query(request: &DeleteRequest) -> QueryPairs {
    let mut query: QueryPairs = request
        .public_ids
        .iter()
        .map(|id| ("public_ids[]", id.clone()))
        .collect();
    query.push(("keep_original", request.keep_original.to_string()));
    query.push(("invalidate", request.invalidate.to_string()));
    query.push(("transformations", request.transformation.clone()));
    query
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Map a non-success status to an [`ApiError`].
///
/// Cloudinary signals rate limiting with 420; 429 is accepted as well.
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no error message".to_string()
            } else {
                trimmed.chars().take(200).collect()
            }
        });

    match status {
        420 | 429 => ApiError::RateLimited,
        401 | 403 => ApiError::Unauthorized { status, message },
        404 => ApiError::NotFound { message },
        _ => ApiError::Status { status, message },
    }
}

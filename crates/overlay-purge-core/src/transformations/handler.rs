use tracing::{debug, error, info};

use crate::api::{ApiError, MediaApi};
use crate::transformations::operations;

/// Find every used transformation whose name contains `marker`.
///
/// Listing fails closed: a rate limit or any other API error yields an empty
/// list, so no deletion is ever planned from a partial listing. A malformed
/// entry is the exception: pagination stops there and the matches gathered so
/// far are returned.
pub fn find_transformations(api: &dyn MediaApi, marker: &str) -> Vec<String> {
    info!(event = "core.transformations.list_started", marker = marker);

    let mut matches = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = match api.list_transformations(cursor.as_deref()) {
            Ok(page) => page,
            Err(ApiError::RateLimited) => {
                error!(
                    event = "core.transformations.rate_limited",
                    pages = pages,
                    "API rate limit has been reached. Try after 1 hour or reach out to Cloudinary Support"
                );
                return Vec::new();
            }
            Err(e) => {
                error!(
                    event = "core.transformations.list_failed",
                    pages = pages,
                    error = %e
                );
                return Vec::new();
            }
        };
        pages += 1;

        debug!(
            event = "core.transformations.page_received",
            page = pages,
            entries = page.transformations.len(),
            has_more = page.next_cursor.is_some()
        );

        if let Err(e) = operations::collect_matches(&page.transformations, marker, &mut matches) {
            error!(
                event = "core.transformations.malformed_entry",
                error = %e,
                kept = matches.len()
            );
            break;
        }

        // An empty cursor would request the first page again.
        match page.next_cursor.filter(|c| !c.is_empty()) {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    info!(
        event = "core.transformations.list_completed",
        pages = pages,
        count = matches.len()
    );

    matches
}

use tracing::{debug, info, warn};

use crate::api::{DeleteRequest, MAX_DELETE_BATCH, MediaApi};
use crate::purge::{errors::PurgeError, operations, types::*};
use crate::resources::{self, TransformationMap};
use crate::transformations;

/// Delete every derivative in `resources`, at most [`MAX_DELETE_BATCH`] ids per call.
///
/// Each call is scoped to the owning transformation, keeps the original asset
/// and invalidates the CDN copy. Returns the number of ids submitted. There is
/// no retry: the first failing call aborts the remaining batches.
pub fn delete_batches(
    api: &dyn MediaApi,
    resources: &TransformationMap,
) -> Result<usize, PurgeError> {
    info!(
        event = "core.purge.delete_started",
        transformations = resources.len(),
        resources = resources.total_resources()
    );

    let mut total_submitted = 0usize;

    for (transformation, public_ids) in resources.iter() {
        let batches = operations::partition_batches(public_ids, MAX_DELETE_BATCH);
        let batch_count = batches.len();

        for (index, batch) in batches.into_iter().enumerate() {
            debug!(
                event = "core.purge.batch_submitted",
                transformation = transformation,
                batch = index + 1,
                batches = batch_count,
                public_ids = ?batch
            );

            let request = DeleteRequest::derivatives(batch.to_vec(), transformation);
            let response = api.delete_derived(&request)?;

            debug!(
                event = "core.purge.batch_completed",
                transformation = transformation,
                batch = index + 1,
                response = ?response
            );
            if response.partial {
                warn!(
                    event = "core.purge.batch_partial",
                    transformation = transformation,
                    batch = index + 1,
                    submitted = batch.len(),
                    reported = response.deleted.len()
                );
            }

            total_submitted += batch.len();
        }
    }

    info!(
        event = "core.purge.delete_completed",
        total_submitted = total_submitted
    );

    Ok(total_submitted)
}

/// Run a full purge for `overlay`: list → resolve → delete.
///
/// Only input validation and resolve/delete failures surface as errors. A
/// failed listing looks like "nothing found" and reports zero.
pub fn run_purge(api: &dyn MediaApi, overlay: &str) -> Result<PurgeSummary, PurgeError> {
    let mut stage = PurgeStage::Start;
    debug!(event = "core.purge.stage_entered", stage = %stage);

    let overlay = operations::validate_overlay_name(overlay)?;
    let marker = transformations::overlay_marker(overlay);
    let mut summary = PurgeSummary::new(overlay, &marker);

    info!(
        event = "core.purge.run_started",
        overlay = overlay,
        marker = marker.as_str(),
        "Looking for transformations string: {marker}"
    );

    stage = advance(stage, PurgeStage::Listing);
    summary.transformations = transformations::find_transformations(api, &marker);

    if summary.transformations.is_empty() {
        info!(
            event = "core.purge.nothing_found",
            overlay = overlay,
            "No transformation found using overlay image \"{overlay}\"."
        );
        advance(stage, PurgeStage::Done);
        return Ok(summary);
    }

    info!(
        event = "core.purge.transformations_found",
        count = summary.transformations.len(),
        "Found {} transformations using the image \"{overlay}\"",
        summary.transformations.len()
    );

    stage = advance(stage, PurgeStage::Resolving);
    let resources = resources::resolve_all(api, &summary.transformations)?;
    summary.resources_found = resources.total_resources();
    info!(
        event = "core.purge.resources_resolved",
        resources = summary.resources_found,
        "Fetched impacted resources. Now trying to delete them..."
    );

    stage = advance(stage, PurgeStage::Deleting);
    summary.total_submitted = delete_batches(api, &resources)?;

    advance(stage, PurgeStage::Done);
    debug!(
        event = "core.purge.run_completed",
        overlay = overlay,
        transformations = summary.transformations.len(),
        total_submitted = summary.total_submitted
    );

    Ok(summary)
}

fn advance(from: PurgeStage, to: PurgeStage) -> PurgeStage {
    debug!(event = "core.purge.stage_entered", from = %from, stage = %to);
    to
}

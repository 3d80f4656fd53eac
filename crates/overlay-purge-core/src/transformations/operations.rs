use crate::api::TransformationEntry;
use crate::purge::PurgeError;

/// Prefix Cloudinary uses for the overlay (layer) parameter in a transformation string.
pub const OVERLAY_PREFIX: &str = "l_";

/// Build the substring to search for, e.g. `logo` → `l_logo`.
pub fn overlay_marker(overlay: &str) -> String {
    format!("{OVERLAY_PREFIX}{overlay}")
}

/// Whether a listing entry belongs to the working set.
///
/// # Errors
///
/// [`PurgeError::MalformedEntry`] when `used` is missing or not a boolean.
pub fn matches_overlay(entry: &TransformationEntry, marker: &str) -> Result<bool, PurgeError> {
    let used = entry.used_flag().ok_or_else(|| PurgeError::MalformedEntry {
        name: entry.name.clone(),
    })?;
    Ok(used && entry.name.contains(marker))
}

/// Append the names of matching entries to `matches`, in page order.
///
/// Stops at the first malformed entry; matches found before it stay in `matches`.
pub fn collect_matches(
    entries: &[TransformationEntry],
    marker: &str,
    matches: &mut Vec<String>,
) -> Result<(), PurgeError> {
    for entry in entries {
        if matches_overlay(entry, marker)? {
            matches.push(entry.name.clone());
        }
    }
    Ok(())
}

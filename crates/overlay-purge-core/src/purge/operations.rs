use crate::purge::errors::PurgeError;

/// Reject a missing or whitespace-only overlay name. The name itself is returned as given.
pub fn validate_overlay_name(overlay: &str) -> Result<&str, PurgeError> {
    if overlay.trim().is_empty() {
        return Err(PurgeError::EmptyOverlay);
    }
    Ok(overlay)
}

/// Split `public_ids` into consecutive batches of at most `max_batch` ids.
///
/// A list at or under the limit is a single batch; an empty list has none.
pub fn partition_batches(public_ids: &[String], max_batch: usize) -> Vec<&[String]> {
    public_ids.chunks(max_batch.max(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MAX_DELETE_BATCH;

    fn ids(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("img/{i}")).collect()
    }

    #[test]
    fn test_validate_overlay_name() {
        assert_eq!(validate_overlay_name("logo").unwrap(), "logo");
        assert_eq!(validate_overlay_name(" logo ").unwrap(), " logo ");
        assert!(matches!(validate_overlay_name(""), Err(PurgeError::EmptyOverlay)));
        assert!(matches!(validate_overlay_name(" \t\n"), Err(PurgeError::EmptyOverlay)));
    }

    #[test]
    fn test_partition_law() {
        for len in [0usize, 1, 99, 100, 101, 150, 200, 201, 1000, 1001] {
            let list = ids(len);
            let batches = partition_batches(&list, MAX_DELETE_BATCH);

            assert_eq!(batches.len(), len.div_ceil(MAX_DELETE_BATCH), "len={len}");
            assert!(batches.iter().all(|b| !b.is_empty() && b.len() <= MAX_DELETE_BATCH));
            assert_eq!(batches.iter().map(|b| b.len()).sum::<usize>(), len);
            assert_eq!(batches.concat(), list, "batches must keep order, len={len}");
        }
    }

    #[test]
    fn test_partition_final_batch_is_remainder() {
        let list = ids(150);
        let sizes: Vec<usize> = partition_batches(&list, MAX_DELETE_BATCH)
            .iter()
            .map(|b| b.len())
            .collect();
        assert_eq!(sizes, vec![100, 50]);
    }
}

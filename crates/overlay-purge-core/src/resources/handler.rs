use tracing::{debug, info};

use crate::api::MediaApi;
use crate::purge::PurgeError;
use crate::resources::types::TransformationMap;

/// Collect every derived public id for `transformation` into `resources`.
///
/// Pages through the transformation detail endpoint until no cursor is
/// returned. Nothing is filtered. API errors are returned to the caller
/// unchanged; ids already appended for earlier pages stay in `resources`.
///
/// Returns the number of ids appended by this call.
pub fn resolve_resources(
    api: &dyn MediaApi,
    transformation: &str,
    resources: &mut TransformationMap,
) -> Result<usize, PurgeError> {
    let mut cursor: Option<String> = None;
    let mut added = 0usize;

    loop {
        let page = api.transformation_details(transformation, cursor.as_deref())?;

        debug!(
            event = "core.resources.page_received",
            transformation = transformation,
            derived = page.derived.len(),
            has_more = page.next_cursor.is_some()
        );

        added += page.derived.len();
        resources.append(
            transformation,
            page.derived.into_iter().map(|derived| derived.public_id),
        );

        match page.next_cursor.filter(|c| !c.is_empty()) {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(added)
}

/// Resolve the derived resources of every transformation in order.
///
/// The first failing API call aborts the whole resolution.
pub fn resolve_all(
    api: &dyn MediaApi,
    transformations: &[String],
) -> Result<TransformationMap, PurgeError> {
    info!(
        event = "core.resources.resolve_started",
        transformations = transformations.len()
    );

    let mut resources = TransformationMap::new();
    for transformation in transformations {
        let added = resolve_resources(api, transformation, &mut resources)?;
        info!(
            event = "core.resources.transformation_resolved",
            transformation = transformation.as_str(),
            resources = added
        );
    }

    info!(
        event = "core.resources.resolve_completed",
        transformations = resources.len(),
        resources = resources.total_resources()
    );

    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::api::testing::{FakeMediaApi, Scripted, derived_page, public_ids};

    #[test]
    fn test_resolves_every_page_in_order() {
        let ids = public_ids("cats", 1200);
        let api = FakeMediaApi::new().with_derived_ids("l_logo", &ids, 500);

        let mut map = TransformationMap::new();
        let added = resolve_resources(&api, "l_logo", &mut map).unwrap();

        assert_eq!(added, 1200);
        assert_eq!(map.get("l_logo"), Some(&ids[..]));
        assert_eq!(
            *api.detail_calls.borrow(),
            vec![
                ("l_logo".to_string(), None),
                ("l_logo".to_string(), Some("l_logo-1".to_string())),
                ("l_logo".to_string(), Some("l_logo-2".to_string())),
            ]
        );
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let ids = public_ids("dogs", 700);
        let api = FakeMediaApi::new()
            .with_derived_ids("l_logo", &ids, 500)
            .with_derived_ids("l_logo", &ids, 500);

        let mut first = TransformationMap::new();
        let mut second = TransformationMap::new();
        resolve_resources(&api, "l_logo", &mut first).unwrap();
        resolve_resources(&api, "l_logo", &mut second).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.get("l_logo"), Some(&ids[..]));
    }

    #[test]
    fn test_no_derived_resources_leaves_map_empty() {
        let api = FakeMediaApi::new();
        let mut map = TransformationMap::new();

        assert_eq!(resolve_resources(&api, "l_logo", &mut map).unwrap(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn test_api_error_propagates() {
        let api = FakeMediaApi::new()
            .with_details(
                "l_logo",
                Scripted::Page(derived_page(&public_ids("a", 3), Some("next".to_string()))),
            )
            .with_details("l_logo", Scripted::RateLimited);

        let mut map = TransformationMap::new();
        let err = resolve_resources(&api, "l_logo", &mut map).unwrap_err();

        assert!(matches!(
            err,
            PurgeError::Api {
                source: ApiError::RateLimited
            }
        ));
        assert_eq!(map.total_resources(), 3);
    }

    #[test]
    fn test_resolve_all_stops_at_first_failure() {
        let api = FakeMediaApi::new()
            .with_details("l_logo,w_1", Scripted::Failure(500))
            .with_derived_ids("l_logo,w_2", &public_ids("b", 2), 500);

        let names = vec!["l_logo,w_1".to_string(), "l_logo,w_2".to_string()];
        assert!(resolve_all(&api, &names).is_err());
        assert_eq!(api.detail_calls.borrow().len(), 1);
    }

    #[test]
    fn test_resolve_all_keys_by_transformation() {
        let api = FakeMediaApi::new()
            .with_derived_ids("l_logo,w_1", &public_ids("a", 2), 500)
            .with_derived_ids("l_logo,w_2", &public_ids("b", 3), 500);

        let names = vec!["l_logo,w_1".to_string(), "l_logo,w_2".to_string()];
        let map = resolve_all(&api, &names).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("l_logo,w_1").map(<[String]>::len), Some(2));
        assert_eq!(map.get("l_logo,w_2").map(<[String]>::len), Some(3));
    }
}

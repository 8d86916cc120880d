//! Folding per-release snapshots into the cumulative timeline tree.
//!
//! Each level (group, version, resource) is matched by identity and either updated
//! in place or created. Release-indexed fields are overwritten when the same release
//! is merged twice, and release lists are deduplicated, so re-merging a release
//! never produces duplicate entries.

use indexmap::IndexMap;

use crate::core::domain::{ApiGroup, ApiResource, ApiVersion, Scope, Timeline, CORE_GROUP_NAME};
use crate::core::error::{TimelineError, TimelineResult};
use crate::core::snapshot::{ApiGroupInfo, ApiSnapshot, ApiVersionInfo, ResourceInfo};

/// Maps the unnamed legacy group to [`CORE_GROUP_NAME`].
///
/// # Examples
///
/// ```
/// use kube_api_timeline::algorithms::merge::normalize_group_name;
///
/// assert_eq!(normalize_group_name(""), "core");
/// assert_eq!(normalize_group_name("apps"), "apps");
/// ```
pub fn normalize_group_name(name: &str) -> &str {
    if name.is_empty() {
        CORE_GROUP_NAME
    } else {
        name
    }
}

/// Merge the API snapshot of `release` into the timeline's group tree.
///
/// Release metadata is not touched here; the caller records it before merging.
///
/// # Errors
/// [`TimelineError::InvalidSnapshot`] for versions or resources without an identity,
/// wrapped with the group, version and resource being processed.
pub fn merge_release(
    timeline: &mut Timeline,
    release: &str,
    snapshot: &ApiSnapshot,
) -> TimelineResult<()> {
    for group in &snapshot.api_groups {
        let name = normalize_group_name(&group.name);

        let dest = timeline
            .api_groups
            .entry(name.to_string())
            .or_insert_with(|| ApiGroup::new(name));

        merge_api_group(dest, group, release).map_err(|e| e.in_group(name))?;
    }

    Ok(())
}

fn merge_api_group(dest: &mut ApiGroup, info: &ApiGroupInfo, release: &str) -> TimelineResult<()> {
    dest.preferred_versions
        .insert(release.to_string(), info.preferred_version.clone());

    for version in &info.api_versions {
        merge_api_version(&mut dest.api_versions, version, release)
            .map_err(|e| e.in_version(&version.version))?;
    }

    Ok(())
}

fn merge_api_version(
    versions: &mut IndexMap<String, ApiVersion>,
    info: &ApiVersionInfo,
    release: &str,
) -> TimelineResult<()> {
    if info.version.is_empty() {
        return Err(TimelineError::InvalidSnapshot(
            "API version must not be empty".to_string(),
        ));
    }

    let dest = versions
        .entry(info.version.clone())
        .or_insert_with(|| ApiVersion::new(&info.version));

    dest.releases.insert(release.to_string());

    for resource in &info.resources {
        merge_api_resource(&mut dest.resources, resource, release)
            .map_err(|e| e.in_resource(&resource.kind))?;
    }

    Ok(())
}

fn merge_api_resource(
    resources: &mut IndexMap<String, ApiResource>,
    info: &ResourceInfo,
    release: &str,
) -> TimelineResult<()> {
    if info.kind.is_empty() {
        return Err(TimelineError::InvalidSnapshot(
            "resource kind must not be empty".to_string(),
        ));
    }

    let dest = resources
        .entry(info.kind.clone())
        .or_insert_with(|| ApiResource::new(&info.kind));

    // descriptive fields follow the most recently merged release
    dest.plural = info.plural.clone();
    dest.singular = info.singular.clone();
    dest.description = info.description.clone();

    dest.releases.insert(release.to_string());
    dest.scopes
        .insert(release.to_string(), Scope::from_namespaced(info.namespaced));

    Ok(())
}

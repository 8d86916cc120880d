//! Releases of interest: the releases at which something notable happened to a
//! group, version or resource.
//!
//! The signal computed for every resource is disappearance: a resource that was
//! served by the previous release and is gone in the current one. Results are
//! unioned upward, so a version lists every release any of its resources flagged,
//! and a group every release any of its versions flagged.
//!
//! Optionally, a group also flags releases in which a more mature version than
//! anything served by the previous release became available (e.g. `v1` appearing
//! next to `v1beta1`).

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::algorithms::api_version::compare_api_versions;
use crate::core::domain::{ApiGroup, ApiResource, ReleaseMetadata, Timeline};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterestOptions {
    /// Also flag releases that introduce a more mature version of a group.
    pub detect_maturity_upgrades: bool,
}

/// Releases at which `resource` disappeared, in chronological order.
///
/// The first release is never included since there is no earlier state to
/// compare against.
pub fn resource_releases_of_interest(
    resource: &ApiResource,
    releases: &[ReleaseMetadata],
) -> Vec<String> {
    let mut result = Vec::new();
    let mut was_available = false;

    for (idx, release) in releases.iter().enumerate() {
        let is_available = resource.is_available_in(&release.version);

        if idx > 0 && was_available && !is_available {
            result.push(release.version.clone());
        }

        was_available = is_available;
    }

    result
}

/// Releases in which `group` gained a version more mature than the most mature
/// one served by the immediately preceding release.
///
/// `compare` must order more mature versions first, like
/// [`compare_api_versions`].
pub fn maturity_upgrades<F>(group: &ApiGroup, releases: &[ReleaseMetadata], compare: F) -> Vec<String>
where
    F: Fn(&str, &str) -> Ordering,
{
    let mut result = Vec::new();
    let mut previous: Option<&str> = None;

    for release in releases {
        let current = group
            .versions_in(&release.version)
            .map(|v| v.version.as_str())
            .min_by(|a, b| compare(*a, *b));

        if let (Some(prev), Some(cur)) = (previous, current) {
            if compare(cur, prev) == Ordering::Less {
                result.push(release.version.clone());
            }
        }

        previous = current;
    }

    result
}

/// Keeps the releases named in `flagged`, in chronological order and without
/// duplicates.
fn chronological_union<'a, I>(flagged: I, releases: &[ReleaseMetadata]) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let flagged: HashSet<&str> = flagged.into_iter().map(String::as_str).collect();

    releases
        .iter()
        .filter(|r| flagged.contains(r.version.as_str()))
        .map(|r| r.version.clone())
        .collect()
}

/// Compute the releases of interest for every resource, version and group of the
/// timeline. `timeline.releases` must already be in chronological order.
pub fn calculate_releases_of_interest(timeline: &mut Timeline, options: &InterestOptions) {
    let Timeline {
        releases,
        api_groups,
    } = timeline;

    for group in api_groups.values_mut() {
        for version in group.api_versions.values_mut() {
            for resource in version.resources.values_mut() {
                resource.releases_of_interest = resource_releases_of_interest(resource, releases);
            }

            version.releases_of_interest = chronological_union(
                version
                    .resources
                    .values()
                    .flat_map(|r| &r.releases_of_interest),
                releases,
            );
        }

        let upgrades = if options.detect_maturity_upgrades {
            maturity_upgrades(group, releases, compare_api_versions)
        } else {
            Vec::new()
        };

        group.releases_of_interest = chronological_union(
            group
                .api_versions
                .values()
                .flat_map(|v| &v.releases_of_interest)
                .chain(&upgrades),
            releases,
        );
    }
}

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::algorithms::archive::{mark_archived, DEFAULT_RECENT_RELEASES};
use crate::algorithms::interest::{calculate_releases_of_interest, InterestOptions};
use crate::algorithms::merge::merge_release;
use crate::algorithms::metadata::build_release_metadata;
use crate::algorithms::sorting::sort_timeline;
use crate::core::domain::{ReleaseMetadata, Timeline};
use crate::core::error::{TimelineError, TimelineResult};
use crate::core::release::Release;

/// Tunables of a timeline build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineOptions {
    /// Size of the trailing window of releases that are not archived.
    pub recent_releases: usize,
    /// Also flag releases that introduce a more mature version of a group.
    pub detect_maturity_upgrades: bool,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            recent_releases: DEFAULT_RECENT_RELEASES,
            detect_maturity_upgrades: false,
        }
    }
}

impl TimelineOptions {
    fn interest(&self) -> InterestOptions {
        InterestOptions {
            detect_maturity_upgrades: self.detect_maturity_upgrades,
        }
    }
}

/// Headline numbers of a finished timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSummary {
    pub total_releases: usize,
    pub supported_releases: usize,
    pub archived_releases: usize,
    pub api_groups: usize,
    pub api_versions: usize,
    pub api_resources: usize,
    /// Distinct releases flagged by at least one group.
    pub releases_of_interest: usize,
}

/// Build the timeline of `releases` with default options.
///
/// See [`create_timeline_with_options`].
pub fn create_timeline<R: Release>(
    releases: &[R],
    now: DateTime<Utc>,
) -> TimelineResult<Timeline> {
    create_timeline_with_options(releases, now, &TimelineOptions::default())
}

/// Build the consolidated timeline of `releases` as seen at `now`.
///
/// Releases may be passed in any order; they are merged chronologically by their
/// semantic version. The first failing release aborts the build and no partial
/// timeline is returned.
///
/// # Errors
/// Any [`TimelineError`] raised while reading or merging a release, wrapped in
/// [`TimelineError::Release`] with the offending release's version.
pub fn create_timeline_with_options<R: Release>(
    releases: &[R],
    now: DateTime<Utc>,
    options: &TimelineOptions,
) -> TimelineResult<Timeline> {
    let mut ordered: Vec<&R> = releases.iter().collect();
    ordered.sort_by_cached_key(|r| (r.semver(), r.version().to_string()));

    info!("Building timeline from {} releases", ordered.len());

    let mut timeline = Timeline::new();
    for release in ordered {
        merge_release_into_timeline(&mut timeline, release, now)
            .map_err(|e| e.in_release(release.version()))?;
    }

    mark_archived(&mut timeline.releases, options.recent_releases);
    calculate_releases_of_interest(&mut timeline, &options.interest());
    sort_timeline(&mut timeline);

    info!(
        "Timeline built: {} releases, {} API groups",
        timeline.releases.len(),
        timeline.api_groups.len()
    );

    Ok(timeline)
}

fn merge_release_into_timeline<R: Release + ?Sized>(
    timeline: &mut Timeline,
    release: &R,
    now: DateTime<Utc>,
) -> TimelineResult<()> {
    let api = release
        .api()
        .map_err(|source| TimelineError::SnapshotRead {
            release: release.version().to_string(),
            source,
        })?;

    let metadata = build_release_metadata(release, now)?;
    record_release(&mut timeline.releases, metadata);

    debug!(
        "Merging release {} ({} API groups, {} resources)",
        release.version(),
        api.api_groups.len(),
        api.resource_count()
    );

    merge_release(timeline, release.version(), &api)
}

/// Append release metadata, replacing an earlier entry for the same release.
fn record_release(releases: &mut Vec<ReleaseMetadata>, metadata: ReleaseMetadata) {
    match releases.iter_mut().find(|r| r.version == metadata.version) {
        Some(existing) => {
            warn!("Release {} was supplied more than once", metadata.version);
            *existing = metadata;
        }
        None => releases.push(metadata),
    }
}

/// Compute headline numbers for a timeline.
pub fn summarize(timeline: &Timeline) -> TimelineSummary {
    let versions = timeline
        .api_groups
        .values()
        .flat_map(|g| g.api_versions.values());

    let mut flagged: Vec<&str> = timeline
        .api_groups
        .values()
        .flat_map(|g| g.releases_of_interest.iter().map(String::as_str))
        .collect();
    flagged.sort_unstable();
    flagged.dedup();

    TimelineSummary {
        total_releases: timeline.releases.len(),
        supported_releases: timeline.releases.iter().filter(|r| r.supported).count(),
        archived_releases: timeline.releases.iter().filter(|r| r.archived).count(),
        api_groups: timeline.api_groups.len(),
        api_versions: versions.clone().count(),
        api_resources: versions.map(|v| v.resources.len()).sum(),
        releases_of_interest: flagged.len(),
    }
}

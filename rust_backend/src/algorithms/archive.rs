use crate::core::domain::ReleaseMetadata;

/// Number of most recent releases shown by default (e.g. 1.19 through 1.29).
pub const DEFAULT_RECENT_RELEASES: usize = 11;

/// Number of oldest releases that fall outside the recent window.
///
/// # Examples
///
/// ```
/// use kube_api_timeline::algorithms::archive::archive_threshold;
///
/// assert_eq!(archive_threshold(15, 11), 4);
/// assert_eq!(archive_threshold(11, 11), 0);
/// assert_eq!(archive_threshold(3, 11), 0);
/// ```
pub fn archive_threshold(total_releases: usize, recent_releases: usize) -> usize {
    total_releases.saturating_sub(recent_releases)
}

/// Flag every release older than the trailing window of `recent_releases` as archived.
///
/// `releases` must be in chronological order, oldest first.
pub fn mark_archived(releases: &mut [ReleaseMetadata], recent_releases: usize) {
    let threshold = archive_threshold(releases.len(), recent_releases);
    log::debug!(
        "Archiving {} of {} releases (window of {})",
        threshold,
        releases.len(),
        recent_releases
    );

    for (idx, release) in releases.iter_mut().enumerate() {
        release.archived = idx < threshold;
    }
}

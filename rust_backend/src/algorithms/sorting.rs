use std::cmp::Ordering;

use crate::algorithms::api_version::compare_api_versions;
use crate::core::domain::Timeline;

/// Sort groups alphabetically and each group's versions most mature first.
pub fn sort_timeline(timeline: &mut Timeline) {
    sort_timeline_by(timeline, compare_api_versions);
}

/// Like [`sort_timeline`], with a custom version comparator.
///
/// `compare` returns [`Ordering::Less`] when its first argument should be listed
/// first.
pub fn sort_timeline_by<F>(timeline: &mut Timeline, compare: F)
where
    F: Fn(&str, &str) -> Ordering,
{
    timeline.api_groups.sort_keys();

    for group in timeline.api_groups.values_mut() {
        group
            .api_versions
            .sort_by(|a, _, b, _| compare(a.as_str(), b.as_str()));
    }
}

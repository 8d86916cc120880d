use chrono::{DateTime, Utc};

use crate::core::domain::ReleaseMetadata;
use crate::core::error::{TimelineError, TimelineResult};
use crate::core::release::Release;

/// Determine whether a release is out and still supported at `now`.
///
/// A release counts as released on its release date itself; it stops being
/// supported once `now` is strictly after its end-of-life date.
///
/// # Returns
/// `(released, supported)`
pub fn evaluate_support(
    release_date: DateTime<Utc>,
    end_of_life: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (bool, bool) {
    let eol = end_of_life.is_some_and(|eol| now > eol);
    let released = now >= release_date;

    (released, released && !eol)
}

/// Build the metadata of a single release.
///
/// The `archived` flag is left unset; it depends on the full release list and is
/// assigned later by [`crate::algorithms::archive::mark_archived`].
///
/// # Errors
/// [`TimelineError::InputRead`] if any of the release's date or version fields
/// cannot be read.
pub fn build_release_metadata<R: Release + ?Sized>(
    release: &R,
    now: DateTime<Utc>,
) -> TimelineResult<ReleaseMetadata> {
    let version = release.version();
    let read_error = |field: &'static str| {
        move |source: anyhow::Error| TimelineError::InputRead {
            release: version.to_string(),
            field,
            source,
        }
    };

    let end_of_life_date = release
        .end_of_life_date()
        .map_err(read_error("end-of-life date"))?;
    let release_date = release.release_date().map_err(read_error("release date"))?;
    let latest_version = release
        .latest_version()
        .map_err(read_error("latest version"))?;

    let (released, supported) = evaluate_support(release_date, end_of_life_date, now);

    Ok(ReleaseMetadata {
        version: version.to_string(),
        released,
        supported,
        release_date,
        end_of_life_date,
        latest_version,
        archived: false,
    })
}

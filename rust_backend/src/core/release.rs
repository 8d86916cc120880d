//! Accessor for a single platform release.
//!
//! Where the data comes from is up to the implementor: the crate ships a
//! file-backed implementation in [`crate::io::loaders`], tests use in-memory
//! fixtures. Every fallible accessor is read lazily by the timeline build and
//! any failure aborts it.

use chrono::{DateTime, Utc};

use super::snapshot::ApiSnapshot;

pub trait Release {
    /// Unique release identifier, e.g. `"1.29"`.
    fn version(&self) -> &str;

    /// Ordering key; only used to sort releases chronologically.
    fn semver(&self) -> semver::Version;

    fn release_date(&self) -> anyhow::Result<DateTime<Utc>>;

    /// `None` while the end-of-life date is not yet known.
    fn end_of_life_date(&self) -> anyhow::Result<Option<DateTime<Utc>>>;

    /// Most recent patch version of this release, e.g. `"1.29.4"`.
    fn latest_version(&self) -> anyhow::Result<String>;

    fn api(&self) -> anyhow::Result<ApiSnapshot>;
}

impl<T: Release + ?Sized> Release for &T {
    fn version(&self) -> &str {
        (**self).version()
    }

    fn semver(&self) -> semver::Version {
        (**self).semver()
    }

    fn release_date(&self) -> anyhow::Result<DateTime<Utc>> {
        (**self).release_date()
    }

    fn end_of_life_date(&self) -> anyhow::Result<Option<DateTime<Utc>>> {
        (**self).end_of_life_date()
    }

    fn latest_version(&self) -> anyhow::Result<String> {
        (**self).latest_version()
    }

    fn api(&self) -> anyhow::Result<ApiSnapshot> {
        (**self).api()
    }
}

impl<T: Release + ?Sized> Release for Box<T> {
    fn version(&self) -> &str {
        (**self).version()
    }

    fn semver(&self) -> semver::Version {
        (**self).semver()
    }

    fn release_date(&self) -> anyhow::Result<DateTime<Utc>> {
        (**self).release_date()
    }

    fn end_of_life_date(&self) -> anyhow::Result<Option<DateTime<Utc>>> {
        (**self).end_of_life_date()
    }

    fn latest_version(&self) -> anyhow::Result<String> {
        (**self).latest_version()
    }

    fn api(&self) -> anyhow::Result<ApiSnapshot> {
        (**self).api()
    }
}

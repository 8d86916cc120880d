//! In-memory release implementation.
//!
//! Holds every field of a release directly, which makes it the natural fixture
//! for tests and benchmarks. Individual accessors can be made to fail in order to
//! exercise error propagation.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::core::release::Release;
use crate::core::snapshot::ApiSnapshot;
use crate::parsing::release_parser::parse_release_version;

/// Accessor of a [`Release`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseField {
    ReleaseDate,
    EndOfLifeDate,
    LatestVersion,
    Api,
}

/// A release whose data lives entirely in memory.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use kube_api_timeline::core::Release;
/// use kube_api_timeline::io::InMemoryRelease;
///
/// let release = InMemoryRelease::new("1.29", Utc.with_ymd_and_hms(2023, 12, 13, 0, 0, 0).unwrap())
///     .unwrap()
///     .with_latest_version("1.29.4");
///
/// assert_eq!(release.version(), "1.29");
/// assert_eq!(release.latest_version().unwrap(), "1.29.4");
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryRelease {
    version: String,
    semver: semver::Version,
    release_date: DateTime<Utc>,
    end_of_life_date: Option<DateTime<Utc>>,
    latest_version: String,
    snapshot: ApiSnapshot,
    failure: Option<(ReleaseField, String)>,
}

impl InMemoryRelease {
    /// Create a release with an empty API snapshot and a latest version of
    /// `<version>.0`.
    ///
    /// Fails if `version` is not a valid release version.
    pub fn new(version: &str, release_date: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            semver: parse_release_version(version)?,
            version: version.to_string(),
            release_date,
            end_of_life_date: None,
            latest_version: format!("{}.0", version),
            snapshot: ApiSnapshot::default(),
            failure: None,
        })
    }

    pub fn with_end_of_life(mut self, end_of_life_date: DateTime<Utc>) -> Self {
        self.end_of_life_date = Some(end_of_life_date);
        self
    }

    pub fn with_latest_version(mut self, latest_version: impl Into<String>) -> Self {
        self.latest_version = latest_version.into();
        self
    }

    pub fn with_snapshot(mut self, snapshot: ApiSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Make reading `field` fail with `message`.
    pub fn failing(mut self, field: ReleaseField, message: impl Into<String>) -> Self {
        self.failure = Some((field, message.into()));
        self
    }

    fn check(&self, field: ReleaseField) -> Result<()> {
        match &self.failure {
            Some((failing, message)) if *failing == field => Err(anyhow::anyhow!("{}", message)),
            _ => Ok(()),
        }
    }
}

impl Release for InMemoryRelease {
    fn version(&self) -> &str {
        &self.version
    }

    fn semver(&self) -> semver::Version {
        self.semver.clone()
    }

    fn release_date(&self) -> Result<DateTime<Utc>> {
        self.check(ReleaseField::ReleaseDate)?;
        Ok(self.release_date)
    }

    fn end_of_life_date(&self) -> Result<Option<DateTime<Utc>>> {
        self.check(ReleaseField::EndOfLifeDate)?;
        Ok(self.end_of_life_date)
    }

    fn latest_version(&self) -> Result<String> {
        self.check(ReleaseField::LatestVersion)?;
        Ok(self.latest_version.clone())
    }

    fn api(&self) -> Result<ApiSnapshot> {
        self.check(ReleaseField::Api)?;
        Ok(self.snapshot.clone())
    }
}

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::domain::Timeline;
use crate::core::error::TimelineResult;
use crate::core::release::Release;
use crate::core::snapshot::ApiSnapshot;
use crate::parsing::json_parser;
use crate::parsing::release_parser::{self, parse_release_version, ReleaseInfo};

/// Release metadata file inside a release directory
pub const RELEASE_METADATA_FILE: &str = "release.toml";

/// API snapshot file inside a release directory
pub const API_SNAPSHOT_FILE: &str = "api.json";

/// A release stored as a directory named after its version.
///
/// Nothing is read when the release is opened; every accessor reads and parses
/// the underlying file on demand, so a broken file only surfaces when the
/// timeline build asks for it.
#[derive(Debug, Clone)]
pub struct FileRelease {
    version: String,
    semver: semver::Version,
    directory: PathBuf,
}

impl FileRelease {
    /// Open the release stored in `directory`, whose name is the release version.
    pub fn open(directory: &Path) -> Result<Self> {
        let version = directory
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Invalid release directory: {}", directory.display()))?
            .to_string();

        let semver = parse_release_version(&version)?;

        Ok(Self {
            version,
            semver,
            directory: directory.to_path_buf(),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn info(&self) -> Result<ReleaseInfo> {
        release_parser::parse_release_info(&self.directory.join(RELEASE_METADATA_FILE))
    }
}

impl Release for FileRelease {
    fn version(&self) -> &str {
        &self.version
    }

    fn semver(&self) -> semver::Version {
        self.semver.clone()
    }

    fn release_date(&self) -> Result<DateTime<Utc>> {
        self.info()?.release_date()
    }

    fn end_of_life_date(&self) -> Result<Option<DateTime<Utc>>> {
        self.info()?.end_of_life_date()
    }

    fn latest_version(&self) -> Result<String> {
        Ok(self.info()?.latest_version)
    }

    fn api(&self) -> Result<ApiSnapshot> {
        json_parser::parse_snapshot_json(&self.directory.join(API_SNAPSHOT_FILE))
    }
}

/// Discovers releases in a data directory
pub struct ReleaseLoader;

impl ReleaseLoader {
    /// List every release directory under `data_dir`, ordered by version.
    ///
    /// Entries that are not directories or whose name is not a release version
    /// are skipped.
    pub fn discover(data_dir: &Path) -> Result<Vec<FileRelease>> {
        let entries = fs::read_dir(data_dir)
            .with_context(|| format!("Failed to read data directory: {}", data_dir.display()))?;

        let mut releases = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read data directory: {}", data_dir.display()))?;
            let path = entry.path();

            if !path.is_dir() {
                debug!("Skipping non-directory {}", path.display());
                continue;
            }

            match FileRelease::open(&path) {
                Ok(release) => releases.push(release),
                Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
            }
        }

        releases.sort_by(|a, b| a.semver.cmp(&b.semver));

        info!(
            "Discovered {} releases in {}",
            releases.len(),
            data_dir.display()
        );

        Ok(releases)
    }
}

/// Serialize a timeline to JSON
pub fn timeline_to_json(timeline: &Timeline, pretty: bool) -> TimelineResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(timeline)?
    } else {
        serde_json::to_string(timeline)?
    };

    Ok(json)
}

/// Write a timeline as JSON, creating parent directories as needed
pub fn write_timeline_json(timeline: &Timeline, path: &Path, pretty: bool) -> TimelineResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, timeline_to_json(timeline, pretty)?)?;
    info!("Wrote timeline to {}", path.display());

    Ok(())
}

/// Read a timeline previously written by [`write_timeline_json`]
pub fn read_timeline_json(path: &Path) -> TimelineResult<Timeline> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

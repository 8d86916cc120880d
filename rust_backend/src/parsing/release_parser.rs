use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use std::path::Path;

/// Raw contents of a per-release `release.toml`.
///
/// Dates are kept as strings so that a malformed date only fails the accessor
/// that reads it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReleaseInfo {
    pub release_date: String,
    #[serde(default)]
    pub end_of_life_date: Option<String>,
    pub latest_version: String,
}

/// Parse a release identifier such as `1.29`, `1.29.4` or `v1.29` into a
/// semantic version used for chronological ordering.
///
/// # Examples
///
/// ```
/// use kube_api_timeline::parsing::release_parser::parse_release_version;
///
/// let v = parse_release_version("1.29").unwrap();
/// assert_eq!((v.major, v.minor, v.patch), (1, 29, 0));
///
/// assert!(parse_release_version("latest").is_err());
/// ```
pub fn parse_release_version(version: &str) -> Result<semver::Version> {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let parts: Vec<&str> = trimmed.split('.').collect();
    if !(2..=3).contains(&parts.len()) {
        anyhow::bail!("Invalid release version '{}': expected <major>.<minor>[.<patch>]", version);
    }

    let numbers = parts
        .iter()
        .map(|p| p.parse::<u64>())
        .collect::<std::result::Result<Vec<u64>, _>>()
        .with_context(|| format!("Invalid release version '{}'", version))?;

    Ok(semver::Version::new(
        numbers[0],
        numbers[1],
        numbers.get(2).copied().unwrap_or(0),
    ))
}

/// Parse a date as either an RFC 3339 timestamp or a plain `YYYY-MM-DD` date,
/// which is taken as midnight UTC.
pub fn parse_release_date(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD or RFC 3339", value))?;

    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Parse `release.toml` contents.
pub fn parse_release_info_str(toml_str: &str) -> Result<ReleaseInfo> {
    toml::from_str(toml_str).context("Failed to parse release metadata")
}

/// Read and parse a `release.toml` file.
pub fn parse_release_info(path: &Path) -> Result<ReleaseInfo> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read release metadata: {}", path.display()))?;

    parse_release_info_str(&content)
}

impl ReleaseInfo {
    pub fn release_date(&self) -> Result<DateTime<Utc>> {
        parse_release_date(&self.release_date)
    }

    pub fn end_of_life_date(&self) -> Result<Option<DateTime<Utc>>> {
        self.end_of_life_date
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(parse_release_date)
            .transpose()
    }
}

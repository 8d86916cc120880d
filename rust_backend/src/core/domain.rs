//! Domain models for the merged API timeline.
//!
//! A [`Timeline`] is the single artifact produced by a build: the chronological list
//! of releases plus the cumulative group → version → resource tree observed across
//! all of them. Every level of the tree is keyed by its identity (group name, version
//! string, resource kind) so that merging a release is a find-or-create per key.
//!
//! Keyed collections keep first-insertion order and serialize as plain JSON arrays,
//! which is the shape the rendering layer consumes.

use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used for the unnamed (legacy) API group.
pub const CORE_GROUP_NAME: &str = "core";

/// Types that carry their own identity key inside a keyed collection.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Serializes an identity map as a list of its values and rebuilds the map from
/// such a list, rejecting duplicate keys.
mod keyed_list {
    use super::Keyed;
    use indexmap::IndexMap;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(map: &IndexMap<String, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        serializer.collect_seq(map.values())
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Keyed,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        let mut map = IndexMap::with_capacity(items.len());

        for item in items {
            let key = item.key().to_string();
            if map.contains_key(&key) {
                return Err(D::Error::custom(format!("duplicate entry '{}'", key)));
            }
            map.insert(key, item);
        }

        Ok(map)
    }
}

/// Support status of a single release.
///
/// # Fields
///
/// * `version` - Release identifier, e.g. `"1.29"`
/// * `released` - `true` once the release date has been reached
/// * `supported` - Released and not yet past its end-of-life date
/// * `release_date` - Date the release became generally available
/// * `end_of_life_date` - Date support ended or will end (unknown for recent releases)
/// * `latest_version` - Most recent patch version, e.g. `"1.29.4"`
/// * `archived` - Older than the window of recent releases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseMetadata {
    pub version: String,
    pub released: bool,
    pub supported: bool,
    pub release_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_life_date: Option<DateTime<Utc>>,
    pub latest_version: String,
    #[serde(default)]
    pub archived: bool,
}

/// Whether a resource lives inside a namespace or at cluster level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Namespaced,
    Cluster,
}

impl Scope {
    pub fn from_namespaced(namespaced: bool) -> Self {
        if namespaced {
            Scope::Namespaced
        } else {
            Scope::Cluster
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Namespaced => "Namespaced",
            Scope::Cluster => "Cluster",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single resource kind within an API version, merged across releases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResource {
    pub kind: String,
    #[serde(default)]
    pub plural: String,
    #[serde(default)]
    pub singular: String,
    #[serde(default)]
    pub description: String,
    /// Releases the resource was observed in, in merge order.
    #[serde(default)]
    pub releases: IndexSet<String>,
    /// Scope per release; it can technically change between releases.
    #[serde(default)]
    pub scopes: IndexMap<String, Scope>,
    #[serde(default)]
    pub releases_of_interest: Vec<String>,
}

impl ApiResource {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn is_available_in(&self, release: &str) -> bool {
        self.releases.contains(release)
    }

    pub fn scope_in(&self, release: &str) -> Option<Scope> {
        self.scopes.get(release).copied()
    }
}

impl Keyed for ApiResource {
    fn key(&self) -> &str {
        &self.kind
    }
}

/// A version of an API group, e.g. `v1beta1`, merged across releases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVersion {
    pub version: String,
    #[serde(default)]
    pub releases: IndexSet<String>,
    #[serde(default, with = "keyed_list")]
    pub resources: IndexMap<String, ApiResource>,
    #[serde(default)]
    pub releases_of_interest: Vec<String>,
}

impl ApiVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    pub fn resource(&self, kind: &str) -> Option<&ApiResource> {
        self.resources.get(kind)
    }

    pub fn is_available_in(&self, release: &str) -> bool {
        self.releases.contains(release)
    }
}

impl Keyed for ApiVersion {
    fn key(&self) -> &str {
        &self.version
    }
}

/// An API group and every version it ever exposed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGroup {
    pub name: String,
    /// Preferred version per release.
    #[serde(default)]
    pub preferred_versions: IndexMap<String, String>,
    #[serde(default, with = "keyed_list")]
    pub api_versions: IndexMap<String, ApiVersion>,
    #[serde(default)]
    pub releases_of_interest: Vec<String>,
}

impl ApiGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn version(&self, version: &str) -> Option<&ApiVersion> {
        self.api_versions.get(version)
    }

    /// Versions of this group that were served by `release`, in current order.
    pub fn versions_in<'a>(&'a self, release: &'a str) -> impl Iterator<Item = &'a ApiVersion> + 'a {
        self.api_versions
            .values()
            .filter(move |v| v.is_available_in(release))
    }
}

impl Keyed for ApiGroup {
    fn key(&self) -> &str {
        &self.name
    }
}

/// The consolidated timeline of all releases and their APIs.
///
/// # Examples
///
/// ```
/// use kube_api_timeline::core::domain::{ApiGroup, Timeline};
///
/// let mut timeline = Timeline::new();
/// timeline.api_groups.insert("apps".to_string(), ApiGroup::new("apps"));
///
/// assert!(timeline.group("apps").is_some());
/// assert!(timeline.release("1.29").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// Releases in chronological order, oldest first.
    pub releases: Vec<ReleaseMetadata>,
    #[serde(default, with = "keyed_list")]
    pub api_groups: IndexMap<String, ApiGroup>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self, name: &str) -> Option<&ApiGroup> {
        self.api_groups.get(name)
    }

    pub fn release(&self, version: &str) -> Option<&ReleaseMetadata> {
        self.releases.iter().find(|r| r.version == version)
    }

    /// Position of a release in chronological order.
    pub fn release_index(&self, version: &str) -> Option<usize> {
        self.releases.iter().position(|r| r.version == version)
    }

    pub fn latest_release(&self) -> Option<&ReleaseMetadata> {
        self.releases.last()
    }

    /// Releases that are not archived, oldest first.
    pub fn recent_releases(&self) -> impl Iterator<Item = &ReleaseMetadata> {
        self.releases.iter().filter(|r| !r.archived)
    }
}

//! The API surface observed for a single release.
//!
//! Snapshots are written by an external collection process, one JSON document per
//! release. Only the fields the timeline needs are modelled; anything else in the
//! document is ignored and missing lists are treated as empty.

use serde::{Deserialize, Serialize};

/// Full group/version/resource tree of one release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSnapshot {
    #[serde(default, alias = "groups")]
    pub api_groups: Vec<ApiGroupInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGroupInfo {
    /// Empty for the legacy core group.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub preferred_version: String,
    #[serde(default, alias = "versions")]
    pub api_versions: Vec<ApiVersionInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVersionInfo {
    pub version: String,
    #[serde(default)]
    pub resources: Vec<ResourceInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    pub kind: String,
    #[serde(default)]
    pub plural: String,
    #[serde(default)]
    pub singular: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub namespaced: bool,
}

impl ApiSnapshot {
    pub fn new(api_groups: Vec<ApiGroupInfo>) -> Self {
        Self { api_groups }
    }

    pub fn is_empty(&self) -> bool {
        self.api_groups.is_empty()
    }

    /// Total number of resources across all groups and versions.
    pub fn resource_count(&self) -> usize {
        self.api_groups
            .iter()
            .flat_map(|g| &g.api_versions)
            .map(|v| v.resources.len())
            .sum()
    }
}

impl ApiGroupInfo {
    pub fn new(name: impl Into<String>, preferred_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferred_version: preferred_version.into(),
            api_versions: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: ApiVersionInfo) -> Self {
        self.api_versions.push(version);
        self
    }
}

impl ApiVersionInfo {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            resources: Vec::new(),
        }
    }

    pub fn with_resource(mut self, resource: ResourceInfo) -> Self {
        self.resources.push(resource);
        self
    }
}

impl ResourceInfo {
    /// Creates a resource with plural/singular names derived from the kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use kube_api_timeline::core::snapshot::ResourceInfo;
    ///
    /// let res = ResourceInfo::new("Deployment", true);
    /// assert_eq!(res.plural, "deployments");
    /// assert_eq!(res.singular, "deployment");
    /// ```
    pub fn new(kind: impl Into<String>, namespaced: bool) -> Self {
        let kind = kind.into();
        let singular = kind.to_lowercase();
        Self {
            plural: format!("{}s", singular),
            singular,
            kind,
            description: String::new(),
            namespaced,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

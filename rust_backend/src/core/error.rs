//! Error types for timeline construction.
//!
//! Merge failures are wrapped once per level of the tree, so the final message reads
//! as a breadcrumb: release → group → version → resource → cause.

/// Result type for timeline operations
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Error type for timeline operations
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("failed to read {field}: {source:#}")]
    InputRead {
        release: String,
        field: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to load API: {source:#}")]
    SnapshotRead {
        release: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("failed to process release {release}: {source}")]
    Release {
        release: String,
        #[source]
        source: Box<TimelineError>,
    },

    #[error("failed to process API group {group}: {source}")]
    Group {
        group: String,
        #[source]
        source: Box<TimelineError>,
    },

    #[error("failed to process API version {version}: {source}")]
    Version {
        version: String,
        #[source]
        source: Box<TimelineError>,
    },

    #[error("failed to process API resource {kind}: {source}")]
    Resource {
        kind: String,
        #[source]
        source: Box<TimelineError>,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TimelineError {
    pub(crate) fn in_release(self, release: &str) -> Self {
        TimelineError::Release {
            release: release.to_string(),
            source: Box::new(self),
        }
    }

    pub(crate) fn in_group(self, group: &str) -> Self {
        TimelineError::Group {
            group: group.to_string(),
            source: Box::new(self),
        }
    }

    pub(crate) fn in_version(self, version: &str) -> Self {
        TimelineError::Version {
            version: version.to_string(),
            source: Box::new(self),
        }
    }

    pub(crate) fn in_resource(self, kind: &str) -> Self {
        TimelineError::Resource {
            kind: kind.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with all breadcrumb wrappers removed.
    pub fn root_cause(&self) -> &TimelineError {
        match self {
            TimelineError::Release { source, .. }
            | TimelineError::Group { source, .. }
            | TimelineError::Version { source, .. }
            | TimelineError::Resource { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<toml::de::Error> for TimelineError {
    fn from(e: toml::de::Error) -> Self {
        TimelineError::Configuration(format!("Failed to parse config file: {}", e))
    }
}

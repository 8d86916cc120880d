//! Kubernetes API timeline builder.
//!
//! Consolidates the API surface served by successive releases into a single
//! timeline: every API group, version and resource kind together with the
//! releases that served it, the support status of each release and the releases
//! at which something notable happened.
//!
//! # Modules
//!
//! - [`core`]: Timeline data model, snapshot input types, the [`core::Release`] trait and errors
//! - [`algorithms`]: Merge, archive, releases-of-interest and ordering passes
//! - [`services`]: Timeline construction entry points
//! - [`parsing`]: Parsers for `api.json` snapshots and `release.toml` metadata
//! - [`io`]: Release sources and timeline output
//! - [`config`]: `timeline.toml` configuration
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use kube_api_timeline::core::snapshot::{ApiGroupInfo, ApiSnapshot, ApiVersionInfo, ResourceInfo};
//! use kube_api_timeline::io::InMemoryRelease;
//! use kube_api_timeline::services::create_timeline;
//!
//! let snapshot = ApiSnapshot::new(vec![ApiGroupInfo::new("apps", "v1").with_version(
//!     ApiVersionInfo::new("v1").with_resource(ResourceInfo::new("Deployment", true)),
//! )]);
//! let release = InMemoryRelease::new("1.29", Utc.with_ymd_and_hms(2023, 12, 13, 0, 0, 0).unwrap())
//!     .unwrap()
//!     .with_snapshot(snapshot);
//!
//! let timeline = create_timeline(&[release], Utc::now()).unwrap();
//! assert!(timeline.group("apps").unwrap().version("v1").is_some());
//! ```

pub mod algorithms;
pub mod config;
pub mod core;
pub mod io;
pub mod parsing;
pub mod services;

pub use crate::config::TimelineConfig;
pub use crate::core::{Release, Timeline, TimelineError, TimelineResult};
pub use crate::services::{create_timeline, create_timeline_with_options, TimelineOptions};

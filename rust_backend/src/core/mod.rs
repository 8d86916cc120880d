//! Core domain models for the API timeline.
//!
//! This module defines the fundamental data structures used throughout the crate:
//! the merged timeline that gets handed to a rendering layer, the per-release API
//! snapshot it is built from, the accessor trait through which releases are read,
//! and the error type shared by the whole build.

pub mod domain;
pub mod error;
pub mod release;
pub mod snapshot;

pub use domain::{ApiGroup, ApiResource, ApiVersion, ReleaseMetadata, Scope, Timeline};
pub use error::{TimelineError, TimelineResult};
pub use release::Release;
pub use snapshot::{ApiGroupInfo, ApiSnapshot, ApiVersionInfo, ResourceInfo};

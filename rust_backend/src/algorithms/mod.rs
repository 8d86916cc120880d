//! Timeline construction algorithms.
//!
//! Each stage of a timeline build lives in its own module and can be used on its
//! own; [`crate::services::timeline::create_timeline`] chains them together.
//!
//! # Components
//!
//! - [`metadata`]: Release support status from release and end-of-life dates
//! - [`merge`]: Folding a release snapshot into the cumulative group tree
//! - [`archive`]: Flagging releases outside the recent window as archived
//! - [`interest`]: Releases of interest per resource, version and group
//! - [`sorting`]: Final ordering of groups and versions
//! - [`api_version`]: Maturity ordering of API version strings
//!
//! # Example
//!
//! ```
//! use kube_api_timeline::algorithms::{compare_api_versions, normalize_group_name};
//! use std::cmp::Ordering;
//!
//! assert_eq!(normalize_group_name(""), "core");
//! assert_eq!(compare_api_versions("v1", "v1beta1"), Ordering::Less);
//! ```

pub mod api_version;
pub mod archive;
pub mod interest;
pub mod merge;
pub mod metadata;
pub mod sorting;

pub use api_version::{compare_api_versions, ApiVersionLevel, ParsedApiVersion};
pub use archive::{archive_threshold, mark_archived, DEFAULT_RECENT_RELEASES};
pub use interest::{calculate_releases_of_interest, resource_releases_of_interest, InterestOptions};
pub use merge::{merge_release, normalize_group_name};
pub use metadata::{build_release_metadata, evaluate_support};
pub use sorting::{sort_timeline, sort_timeline_by};

//! Parsers for the on-disk release data formats.
//!
//! # Parsers
//!
//! - [`json_parser`]: Parse per-release API snapshots (`api.json`)
//! - [`release_parser`]: Parse release metadata (`release.toml`), release versions and dates
//!
//! # Example
//!
//! ```no_run
//! use kube_api_timeline::parsing::json_parser::parse_snapshot_json;
//! use std::path::Path;
//!
//! let snapshot = parse_snapshot_json(Path::new("data/1.29/api.json"))
//!     .expect("Failed to parse snapshot");
//! println!("{} API groups", snapshot.api_groups.len());
//! ```

pub mod json_parser;
pub mod release_parser;


pub use json_parser::{parse_snapshot_json, parse_snapshot_json_str};
pub use release_parser::{parse_release_date, parse_release_version, ReleaseInfo};

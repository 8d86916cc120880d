//! Release sources and timeline output.
//!
//! This module provides the [`Release`](crate::core::Release) implementations the
//! crate ships with (a directory-per-release data layout and an in-memory
//! fixture) and helpers for writing the finished timeline as JSON.
//!
//! # Data layout
//!
//! ```text
//! data/
//!   1.28/
//!     release.toml
//!     api.json
//!   1.29/
//!     release.toml
//!     api.json
//! ```
//!
//! # Example
//!
//! ```no_run
//! use kube_api_timeline::io::loaders::ReleaseLoader;
//! use std::path::Path;
//!
//! let releases = ReleaseLoader::discover(Path::new("data"))
//!     .expect("Failed to read data directory");
//! println!("Found {} releases", releases.len());
//! ```

pub mod loaders;
pub mod memory;


pub use loaders::{read_timeline_json, write_timeline_json, FileRelease, ReleaseLoader};
pub use memory::{InMemoryRelease, ReleaseField};

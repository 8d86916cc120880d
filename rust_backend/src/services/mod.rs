//! Service layer for timeline orchestration.
//!
//! This module sits between the release sources in [`crate::io`] and the pure
//! algorithms in [`crate::algorithms`]: it orders the releases, drives the merge
//! and runs the post-processing passes in the order they depend on each other.

pub mod timeline;

#[cfg(test)]
mod timeline_tests;

pub use timeline::{
    create_timeline, create_timeline_with_options, summarize, TimelineOptions, TimelineSummary,
};

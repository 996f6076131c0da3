//! npm registry client
//!
//! This crate provides HTTP client functionality for the npm registry's
//! public API: full-text package search and package metadata fetch. Both
//! operations perform a single GET request against the registry and decode
//! the JSON response; there is no caching, retrying or shared state between
//! calls.

pub mod api;
pub mod client;

// Re-export main types
pub use client::{RegistryClient, SearchOptions};
pub use api::{
    Author, BugTracker, DistInfo, Maintainer, PackageFlags, PackageItem, PackageLinks,
    PackageMetadataResponse, PackageScore, PackageSummary, RepositoryInfo, ScoreDetail,
    SearchResults, TimeInfo, VersionMetadata,
};

use sprout_core::error::SproutError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, SproutError>;

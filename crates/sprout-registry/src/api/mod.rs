//! npm registry API response types
//!
//! Wire-format mirrors of the registry's search envelope and full package
//! document. The registry may omit any field, so every field defaults to its
//! zero value on decode; unknown fields are ignored.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Search response envelope from `/-/v1/search`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SearchResults {
    /// Search hits in the registry's relevance order
    #[serde(default)]
    pub objects: Vec<PackageItem>,
    /// Total number of matches (may exceed `objects.len()` when paginated)
    #[serde(default)]
    pub total: u32,
    /// Server-reported response generation time, opaque
    #[serde(default)]
    pub time: String,
}

/// One search hit
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PackageItem {
    #[serde(default)]
    pub package: PackageSummary,
    #[serde(default)]
    pub flags: PackageFlags,
    #[serde(default)]
    pub score: PackageScore,
}

/// Package summary as returned by search
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PackageSummary {
    #[serde(default)]
    pub name: String,
    /// Scope without the leading `@`, or `"unscoped"`
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Last publish date, opaque timestamp string
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub links: PackageLinks,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub publisher: Maintainer,
    #[serde(default)]
    pub maintainers: Vec<Maintainer>,
}

/// Related URLs for a search hit
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PackageLinks {
    /// Registry page
    #[serde(default)]
    pub npm: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub repository: String,
    /// Bug tracker
    #[serde(default)]
    pub bugs: String,
}

/// Author identity (most complete contact shape)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub username: String,
}

/// Publisher/maintainer identity.
///
/// The search API sends `username` + `email`; the package document sends
/// `name` + `email`. Whichever is absent stays empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Maintainer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
}

/// Registry flags for a search hit
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PackageFlags {
    #[serde(default)]
    pub unstable: bool,
}

/// Relevance scoring for a search hit
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PackageScore {
    /// Combined score
    #[serde(rename = "final", default)]
    pub final_score: f32,
    #[serde(default)]
    pub detail: ScoreDetail,
    /// Raw search-engine score
    #[serde(rename = "searchScore", default)]
    pub search_score: f32,
}

/// Sub-scores behind the final score
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScoreDetail {
    #[serde(default)]
    pub quality: f32,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub maintenance: f32,
}

/// Full package document from `GET /<name>`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PackageMetadataResponse {
    /// Internal document id
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Document revision tag
    #[serde(rename = "_rev", default)]
    pub rev: String,
    #[serde(default)]
    pub name: String,
    /// Dist-tag name (e.g. "latest") to version string
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: HashMap<String, String>,
    /// Version string to full version metadata
    #[serde(default)]
    pub versions: HashMap<String, VersionMetadata>,
    #[serde(default)]
    pub time: TimeInfo,
    #[serde(default)]
    pub maintainers: Vec<Maintainer>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub repository: RepositoryInfo,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub bugs: BugTracker,
    /// License identifier (e.g. "MIT")
    #[serde(default)]
    pub license: String,
    /// Raw README text
    #[serde(default)]
    pub readme: String,
    #[serde(rename = "readmeFilename", default)]
    pub readme_filename: String,
}

/// Publish timestamps for a package.
///
/// Besides `created` and `modified`, the registry keys this object by
/// version string; those land in `versions`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TimeInfo {
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub modified: String,
    /// Version string to its publish timestamp
    #[serde(flatten)]
    pub versions: HashMap<String, String>,
}

/// Bug tracker location
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BugTracker {
    #[serde(default)]
    pub url: String,
}

/// Repository information
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RepositoryInfo {
    /// Repository type (usually "git")
    #[serde(rename = "type", default)]
    pub repo_type: String,
    #[serde(default)]
    pub url: String,
}

/// Metadata for a specific package version
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VersionMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    /// Main entry point
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub repository: RepositoryInfo,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub bugs: BugTracker,
    #[serde(default)]
    pub homepage: String,
    /// Git commit the version was published from
    #[serde(rename = "gitHead", default)]
    pub git_head: String,
    #[serde(rename = "_id", default)]
    pub id: String,
    /// npm version used to publish
    #[serde(rename = "_npmVersion", default)]
    pub npm_version: String,
    /// Node version used to publish
    #[serde(rename = "_nodeVersion", default)]
    pub node_version: String,
    /// Identity of the publisher
    #[serde(rename = "_npmUser", default)]
    pub npm_user: Maintainer,
    #[serde(default)]
    pub dist: DistInfo,
    #[serde(default)]
    pub maintainers: Vec<Maintainer>,
    #[serde(rename = "_hasShrinkwrap", default)]
    pub has_shrinkwrap: bool,
}

/// Distribution information for a version's tarball
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DistInfo {
    /// Subresource integrity hash (preferred)
    #[serde(default)]
    pub integrity: String,
    /// SHA-1 checksum (legacy)
    #[serde(default)]
    pub shasum: String,
    /// Tarball download URL
    #[serde(default)]
    pub tarball: String,
    #[serde(rename = "fileCount", default)]
    pub file_count: u64,
    /// Unpacked size in bytes
    #[serde(rename = "unpackedSize", default)]
    pub unpacked_size: u64,
    #[serde(rename = "npm-signature", default)]
    pub npm_signature: String,
}

#[cfg(test)]
mod tests;

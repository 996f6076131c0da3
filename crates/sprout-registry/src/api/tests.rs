//! Unit tests for the wire data model

use super::*;

#[test]
fn test_empty_search_envelope_decodes_to_defaults() {
    let results: SearchResults = serde_json::from_str("{}").unwrap();
    assert_eq!(results, SearchResults::default());
    assert!(results.objects.is_empty());
    assert_eq!(results.total, 0);
    assert_eq!(results.time, "");
}

#[test]
fn test_empty_package_document_decodes_to_defaults() {
    let package: PackageMetadataResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(package, PackageMetadataResponse::default());
    assert!(package.dist_tags.is_empty());
    assert!(package.versions.is_empty());
    assert_eq!(package.license, "");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let raw = r#"{
        "name": "left-pad",
        "total": 1,
        "some-future-field": { "nested": [1, 2, 3] }
    }"#;
    let results: SearchResults = serde_json::from_str(raw).unwrap();
    assert_eq!(results.total, 1);

    let package: PackageMetadataResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(package.name, "left-pad");
}

#[test]
fn test_score_wire_renames() {
    let raw = r#"{
        "final": 0.75,
        "detail": { "quality": 0.7, "popularity": 0.6, "maintenance": 0.9 },
        "searchScore": 42.0
    }"#;
    let score: PackageScore = serde_json::from_str(raw).unwrap();
    assert!((score.final_score - 0.75).abs() < 1e-6);
    assert!((score.search_score - 42.0).abs() < 1e-6);
}

#[test]
fn test_time_info_captures_version_timestamps() {
    let raw = r#"{
        "created": "2019-12-30T21:38:51.919Z",
        "modified": "2020-08-04T17:01:55.922Z",
        "1.0.0": "2019-12-30T21:38:52.061Z",
        "2.1.1": "2020-08-04T17:01:53.476Z"
    }"#;
    let time: TimeInfo = serde_json::from_str(raw).unwrap();
    assert_eq!(time.created, "2019-12-30T21:38:51.919Z");
    assert_eq!(time.modified, "2020-08-04T17:01:55.922Z");
    assert_eq!(time.versions.len(), 2);
    assert_eq!(time.versions["1.0.0"], "2019-12-30T21:38:52.061Z");
}

#[test]
fn test_version_metadata_wire_renames() {
    let raw = r#"{
        "version": "1.0.0",
        "gitHead": "abc123",
        "_id": "pkg@1.0.0",
        "_npmVersion": "6.13.4",
        "_nodeVersion": "12.14.1",
        "_npmUser": { "name": "someone", "email": "someone@example.com" },
        "_hasShrinkwrap": true,
        "dist": {
            "tarball": "https://registry.npmjs.org/pkg/-/pkg-1.0.0.tgz",
            "fileCount": 3,
            "unpackedSize": 1024,
            "npm-signature": "-----BEGIN PGP SIGNATURE-----"
        }
    }"#;
    let version: VersionMetadata = serde_json::from_str(raw).unwrap();
    assert_eq!(version.git_head, "abc123");
    assert_eq!(version.id, "pkg@1.0.0");
    assert_eq!(version.npm_version, "6.13.4");
    assert_eq!(version.node_version, "12.14.1");
    assert_eq!(version.npm_user.name, "someone");
    assert!(version.has_shrinkwrap);
    assert_eq!(version.dist.file_count, 3);
    assert_eq!(version.dist.unpacked_size, 1024);
    assert!(version.dist.npm_signature.starts_with("-----BEGIN"));
}

#[test]
fn test_maintainer_covers_both_wire_shapes() {
    // Search API shape
    let search: Maintainer =
        serde_json::from_str(r#"{ "username": "janedoe", "email": "jane@example.com" }"#).unwrap();
    assert_eq!(search.username, "janedoe");
    assert_eq!(search.name, "");

    // Package document shape
    let document: Maintainer =
        serde_json::from_str(r#"{ "name": "janedoe", "email": "jane@example.com" }"#).unwrap();
    assert_eq!(document.name, "janedoe");
    assert_eq!(document.username, "");
}

#[test]
fn test_search_results_round_trip() {
    let raw = r#"{
        "objects": [
            {
                "package": {
                    "name": "taita",
                    "version": "2.1.1",
                    "description": "command palette library",
                    "links": { "npm": "https://www.npmjs.com/package/taita" },
                    "publisher": { "username": "ethanjustice" }
                },
                "flags": { "unstable": false },
                "score": { "final": 0.5, "searchScore": 9.9 }
            }
        ],
        "total": 1,
        "time": "Tue Aug 04 2020 17:01:55 GMT+0000"
    }"#;
    let results: SearchResults = serde_json::from_str(raw).unwrap();

    let encoded = serde_json::to_string(&results).unwrap();
    let decoded: SearchResults = serde_json::from_str(&encoded).unwrap();
    assert_eq!(results, decoded);
}

#[test]
fn test_package_document_round_trip() {
    let raw = r#"{
        "_id": "taita",
        "_rev": "12-abc",
        "name": "taita",
        "dist-tags": { "latest": "2.1.1" },
        "versions": {
            "2.1.1": {
                "version": "2.1.1",
                "dist": { "tarball": "https://registry.npmjs.org/taita/-/taita-2.1.1.tgz" }
            }
        },
        "time": { "created": "2019-12-30T21:38:51.919Z", "2.1.1": "2020-08-04T17:01:53.476Z" },
        "readmeFilename": "README.md"
    }"#;
    let package: PackageMetadataResponse = serde_json::from_str(raw).unwrap();

    let encoded = serde_json::to_string(&package).unwrap();
    let decoded: PackageMetadataResponse = serde_json::from_str(&encoded).unwrap();
    assert_eq!(package, decoded);

    // Renames survive the round trip on the wire side
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert!(value.get("dist-tags").is_some());
    assert!(value.get("readmeFilename").is_some());
    assert!(value.get("_id").is_some());
}

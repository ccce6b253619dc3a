//! Contract tests for the path mirror walk, driven through the public API
//! with an in-memory folder creator.

use async_trait::async_trait;
use std::io::Write;
use synsync::error::{ApiError, MirrorError};
use synsync::mirror::{mirror_objects, FolderCreator};
use synsync::ops::mirror_run::read_object_list;

/// Hands out sequential folder ids and records every creation call.
struct FakeCatalog {
    calls: Vec<(String, String)>,
}

impl FakeCatalog {
    fn new() -> Self {
        Self { calls: Vec::new() }
    }
}

#[async_trait]
impl FolderCreator for FakeCatalog {
    async fn create_folder(&mut self, name: &str, parent_id: &str) -> Result<String, ApiError> {
        self.calls.push((name.to_string(), parent_id.to_string()));
        Ok(format!("syn{}", self.calls.len()))
    }
}

#[tokio::test]
async fn worked_example_matches_contract() {
    // Input: two objects sharing ancestor `a`; folder `a` must be created once.
    let mut catalog = FakeCatalog::new();
    let records = mirror_objects(
        ["s3://prefix/a/b/obj1", "s3://prefix/a/c/obj2"],
        "s3://prefix/",
        "ROOT",
        &mut catalog,
    )
    .await
    .unwrap();

    assert_eq!(
        catalog.calls,
        vec![
            ("a".to_string(), "ROOT".to_string()),
            ("b".to_string(), "syn1".to_string()),
            ("c".to_string(), "syn1".to_string()),
        ]
    );
    let lines: Vec<String> = records
        .iter()
        .map(|r| format!("{},{}", r.object_uri, r.folder_id))
        .collect();
    assert_eq!(
        lines,
        vec!["s3://prefix/a/b/obj1,syn2", "s3://prefix/a/c/obj2,syn3"]
    );
}

#[tokio::test]
async fn creation_count_equals_distinct_directory_count() {
    let objects = [
        "s3://p/r/x/1.bin",
        "s3://p/r/x/2.bin",
        "s3://p/r/x/y/3.bin",
        "s3://p/r/z/4.bin",
        "s3://p/r/x/5.bin",
        "s3://p/r/6.bin",
    ];
    // Distinct non-root directories: x, x/y, z.
    let mut catalog = FakeCatalog::new();
    let records = mirror_objects(objects, "s3://p/r/", "ROOT", &mut catalog)
        .await
        .unwrap();
    assert_eq!(catalog.calls.len(), 3);
    assert_eq!(records.len(), objects.len());
}

#[tokio::test]
async fn output_order_equals_input_order() {
    let objects = [
        "s3://p/r/b/1.bin",
        "s3://p/r/a/2.bin",
        "s3://p/r/b/3.bin",
        "s3://p/r/4.bin",
    ];
    let mut catalog = FakeCatalog::new();
    let records = mirror_objects(objects, "s3://p/r/", "ROOT", &mut catalog)
        .await
        .unwrap();
    let uris: Vec<&str> = records.iter().map(|r| r.object_uri.as_str()).collect();
    assert_eq!(uris, objects);
    // Objects directly under the root resolve to the root id.
    assert_eq!(records[3].folder_id, "ROOT");
}

#[tokio::test]
async fn unnormalized_prefix_is_accepted() {
    let mut catalog = FakeCatalog::new();
    let records = mirror_objects(
        ["s3://p/r/a/obj"],
        "s3://p/r", // no trailing separator
        "ROOT",
        &mut catalog,
    )
    .await
    .unwrap();
    assert_eq!(catalog.calls, vec![("a".to_string(), "ROOT".to_string())]);
    assert_eq!(records[0].folder_id, "syn1");
}

#[tokio::test]
async fn object_outside_prefix_aborts_the_run() {
    let mut catalog = FakeCatalog::new();
    let err = mirror_objects(
        ["s3://p/r/a/obj", "s3://elsewhere/obj"],
        "s3://p/r/",
        "ROOT",
        &mut catalog,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, MirrorError::OutsideRoot { .. }));
}

#[tokio::test]
async fn object_list_file_drives_the_walk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "s3://p/r/a/b/obj1\ns3://p/r/a/c/obj2\n\ns3://p/r/obj3\n"
    )
    .unwrap();
    file.flush().unwrap();

    let objects = read_object_list(file.path()).unwrap();
    let mut catalog = FakeCatalog::new();
    let records = mirror_objects(objects, "s3://p/r/", "ROOT", &mut catalog)
        .await
        .unwrap();

    // Blank line skipped; three records out.
    assert_eq!(records.len(), 3);
    assert_eq!(catalog.calls.len(), 3);
    assert_eq!(records[2].object_uri, "s3://p/r/obj3");
    assert_eq!(records[2].folder_id, "ROOT");
}

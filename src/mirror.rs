//! Path Mirror Builder
//!
//! Reconstructs a tree of catalog Folder entities from a flat list of object
//! URIs sharing a common root prefix, and resolves the immediate parent
//! folder of every object. Previously created folders are memoized so each
//! distinct directory path costs exactly one creation call.

use crate::client::SynapseClient;
use crate::error::{ApiError, MirrorError};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info};

/// Folder-creation seam. Production uses [`SynapseClient`]; tests substitute
/// an in-memory implementation.
#[async_trait]
pub trait FolderCreator {
    /// Create a folder named `name` under `parent_id`, returning the new id.
    async fn create_folder(&mut self, name: &str, parent_id: &str) -> Result<String, ApiError>;
}

#[async_trait]
impl FolderCreator for &SynapseClient {
    async fn create_folder(&mut self, name: &str, parent_id: &str) -> Result<String, ApiError> {
        let entity = SynapseClient::create_folder(*self, name, parent_id).await?;
        info!(name, parent_id, folder_id = %entity.id, "created folder");
        Ok(entity.id)
    }
}

/// Registry of folder path -> catalog identifier.
///
/// Seeded with the normalized root prefix; grows monotonically and never
/// overwrites an entry. Every inserted path has its immediate parent present,
/// guaranteed by the outermost-to-innermost walk in [`MirrorBuilder`].
pub struct PathRegistry {
    entries: HashMap<String, String>,
    root_prefix: String,
}

impl PathRegistry {
    pub fn new(root_prefix: &str, root_id: &str) -> Self {
        let root_prefix = normalize_prefix(root_prefix);
        let mut entries = HashMap::new();
        entries.insert(root_prefix.clone(), root_id.to_string());
        Self {
            entries,
            root_prefix,
        }
    }

    /// Root prefix, normalized to end in exactly one separator.
    pub fn root_prefix(&self) -> &str {
        &self.root_prefix
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Record a newly created folder. Existing entries are kept as-is.
    fn record(&mut self, path: String, id: String) {
        self.entries.entry(path).or_insert(id);
    }

    /// Number of registered paths, the seeded root included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize a root prefix to end in exactly one `/`.
fn normalize_prefix(prefix: &str) -> String {
    format!("{}/", prefix.trim_end_matches('/'))
}

/// One output record of a mirroring run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorRecord {
    pub object_uri: String,
    pub folder_id: String,
}

/// Mirrors object paths into catalog folders, memoizing created ancestors.
pub struct MirrorBuilder {
    registry: PathRegistry,
}

impl MirrorBuilder {
    pub fn new(root_prefix: &str, root_id: &str) -> Self {
        Self {
            registry: PathRegistry::new(root_prefix, root_id),
        }
    }

    pub fn registry(&self) -> &PathRegistry {
        &self.registry
    }

    /// Resolve the immediate parent folder of `object_uri`, creating any
    /// missing ancestor folders outermost-to-innermost.
    pub async fn resolve_parent<C: FolderCreator>(
        &mut self,
        object_uri: &str,
        creator: &mut C,
    ) -> Result<String, MirrorError> {
        let dir = containing_dir(object_uri);
        let relative = dir
            .strip_prefix(self.registry.root_prefix())
            .ok_or_else(|| MirrorError::OutsideRoot {
                path: object_uri.to_string(),
                prefix: self.registry.root_prefix().to_string(),
            })?
            .to_string();

        let mut current = self.registry.root_prefix().to_string();
        // Seeded root id; replaced as the walk descends.
        let mut folder_id = self
            .registry
            .get(&current)
            .expect("registry is seeded with the root prefix")
            .to_string();

        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            let parent_id = folder_id;
            current.push_str(segment);
            current.push('/');
            folder_id = match self.registry.get(&current) {
                Some(id) => {
                    debug!(path = %current, folder_id = %id, "folder already registered");
                    id.to_string()
                }
                None => {
                    let id = creator.create_folder(segment, &parent_id).await?;
                    self.registry.record(current.clone(), id.clone());
                    id
                }
            };
        }

        Ok(folder_id)
    }
}

/// Containing directory of an object path, trailing separator included.
/// An object directly under the root has the root prefix as its directory.
fn containing_dir(object_uri: &str) -> &str {
    match object_uri.rfind('/') {
        Some(idx) => &object_uri[..=idx],
        None => "",
    }
}

/// Mirror a sequence of object URIs, in order. Lines are right-trimmed and
/// blank lines skipped. Returns one record per object, input order preserved.
pub async fn mirror_objects<C, I, S>(
    objects: I,
    root_prefix: &str,
    root_id: &str,
    creator: &mut C,
) -> Result<Vec<MirrorRecord>, MirrorError>
where
    C: FolderCreator,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = MirrorBuilder::new(root_prefix, root_id);
    let mut records = Vec::new();
    for line in objects {
        let object_uri = line.as_ref().trim_end();
        if object_uri.is_empty() {
            continue;
        }
        let folder_id = builder.resolve_parent(object_uri, creator).await?;
        records.push(MirrorRecord {
            object_uri: object_uri.to_string(),
            folder_id,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory creator handing out sequential ids and recording calls.
    pub(crate) struct RecordingCreator {
        pub calls: Vec<(String, String)>,
    }

    impl RecordingCreator {
        pub fn new() -> Self {
            Self { calls: Vec::new() }
        }
    }

    #[async_trait]
    impl FolderCreator for RecordingCreator {
        async fn create_folder(
            &mut self,
            name: &str,
            parent_id: &str,
        ) -> Result<String, ApiError> {
            self.calls.push((name.to_string(), parent_id.to_string()));
            Ok(format!("syn{}", self.calls.len()))
        }
    }

    #[test]
    fn prefix_is_normalized_to_one_separator() {
        assert_eq!(normalize_prefix("s3://bucket/out"), "s3://bucket/out/");
        assert_eq!(normalize_prefix("s3://bucket/out/"), "s3://bucket/out/");
        assert_eq!(normalize_prefix("s3://bucket/out//"), "s3://bucket/out/");
    }

    #[test]
    fn containing_dir_keeps_trailing_separator() {
        assert_eq!(containing_dir("s3://b/a/obj"), "s3://b/a/");
        assert_eq!(containing_dir("s3://b/obj"), "s3://b/");
        assert_eq!(containing_dir("no-separator"), "");
    }

    #[test]
    fn registry_never_overwrites() {
        let mut registry = PathRegistry::new("s3://b/root", "ROOT");
        registry.record("s3://b/root/a/".to_string(), "syn1".to_string());
        registry.record("s3://b/root/a/".to_string(), "syn2".to_string());
        assert_eq!(registry.get("s3://b/root/a/"), Some("syn1"));
        assert_eq!(registry.get("s3://b/root/"), Some("ROOT"));
        assert_eq!(registry.len(), 2);
    }

    #[tokio::test]
    async fn object_at_root_resolves_to_root_id() {
        let mut creator = RecordingCreator::new();
        let mut builder = MirrorBuilder::new("s3://b/root/", "ROOT");
        let id = builder
            .resolve_parent("s3://b/root/obj.txt", &mut creator)
            .await
            .unwrap();
        assert_eq!(id, "ROOT");
        assert!(creator.calls.is_empty());
    }

    #[tokio::test]
    async fn ancestors_are_created_outermost_first() {
        let mut creator = RecordingCreator::new();
        let mut builder = MirrorBuilder::new("s3://b/root/", "ROOT");
        let id = builder
            .resolve_parent("s3://b/root/a/b/obj.txt", &mut creator)
            .await
            .unwrap();
        assert_eq!(
            creator.calls,
            vec![
                ("a".to_string(), "ROOT".to_string()),
                ("b".to_string(), "syn1".to_string()),
            ]
        );
        assert_eq!(id, "syn2");
    }

    #[tokio::test]
    async fn shared_ancestors_are_created_once() {
        let mut creator = RecordingCreator::new();
        let records = mirror_objects(
            ["s3://b/root/a/b/obj1", "s3://b/root/a/c/obj2"],
            "s3://b/root/",
            "ROOT",
            &mut creator,
        )
        .await
        .unwrap();

        // a under ROOT, b under a, c under a: three creations total.
        assert_eq!(
            creator.calls,
            vec![
                ("a".to_string(), "ROOT".to_string()),
                ("b".to_string(), "syn1".to_string()),
                ("c".to_string(), "syn1".to_string()),
            ]
        );
        assert_eq!(
            records,
            vec![
                MirrorRecord {
                    object_uri: "s3://b/root/a/b/obj1".to_string(),
                    folder_id: "syn2".to_string(),
                },
                MirrorRecord {
                    object_uri: "s3://b/root/a/c/obj2".to_string(),
                    folder_id: "syn3".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn outside_root_fails_loudly() {
        let mut creator = RecordingCreator::new();
        let mut builder = MirrorBuilder::new("s3://b/root/", "ROOT");
        let err = builder
            .resolve_parent("s3://other/a/obj.txt", &mut creator)
            .await
            .unwrap_err();
        assert!(matches!(err, MirrorError::OutsideRoot { .. }));
        assert!(creator.calls.is_empty());
    }

    #[tokio::test]
    async fn blank_and_padded_lines_are_skipped_or_trimmed() {
        let mut creator = RecordingCreator::new();
        let records = mirror_objects(
            ["s3://b/root/a/obj1\r\n", "", "   ", "s3://b/root/a/obj2\n"],
            "s3://b/root",
            "ROOT",
            &mut creator,
        )
        .await
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].object_uri, "s3://b/root/a/obj1");
        assert_eq!(records[1].object_uri, "s3://b/root/a/obj2");
        assert_eq!(creator.calls.len(), 1);
    }
}

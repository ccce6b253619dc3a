//! Mirror-run orchestration: read the object list, drive the mirror walk.

use crate::client::SynapseClient;
use crate::error::MirrorError;
use crate::mirror::{mirror_objects, MirrorRecord};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read the newline-delimited object list.
pub fn read_object_list(path: &Path) -> Result<Vec<String>, std::io::Error> {
    let reader = BufReader::new(File::open(path)?);
    reader.lines().collect()
}

/// Mirror every object in `objects_file` under `parent_id`, returning one
/// record per object in input order.
pub async fn mirror_object_list(
    client: &SynapseClient,
    objects_file: &Path,
    s3_prefix: &str,
    parent_id: &str,
) -> Result<Vec<MirrorRecord>, MirrorError> {
    let objects = read_object_list(objects_file).map_err(crate::error::ApiError::Io)?;
    debug!(count = objects.len(), s3_prefix, parent_id, "read object list");
    let mut creator = client;
    mirror_objects(objects, s3_prefix, parent_id, &mut creator).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_object_list_splits_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "s3://b/root/a/obj1\ns3://b/root/obj2\n").unwrap();
        file.flush().unwrap();
        let lines = read_object_list(file.path()).unwrap();
        assert_eq!(lines, vec!["s3://b/root/a/obj1", "s3://b/root/obj2"]);
    }

    #[test]
    fn read_object_list_missing_file_is_an_error() {
        assert!(read_object_list(Path::new("/nonexistent/objects.txt")).is_err());
    }
}

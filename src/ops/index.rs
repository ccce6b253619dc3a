//! Object indexing: checksum a local file, then register it as a File entity
//! backed by an existing S3 object.

use crate::checksum::md5_hex;
use crate::client::SynapseClient;
use crate::error::ApiError;
use crate::sanitize::sanitize_entity_name;
use crate::uri::S3Uri;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Inputs of one indexing run.
#[derive(Debug, Clone)]
pub struct IndexRequest {
    /// Storage location the S3 object lives under.
    pub storage_id: i64,
    /// Local copy of the object, used for the checksum and display name.
    pub file: PathBuf,
    /// S3 URI of the object being indexed.
    pub uri: S3Uri,
    /// Folder entity the new File entity is created under.
    pub parent_id: String,
}

/// Result of one indexing run.
#[derive(Debug, Clone)]
pub struct IndexOutcome {
    pub uri: String,
    pub entity_id: String,
    pub checksum: String,
}

/// Index one S3 object as a catalog File entity.
pub async fn index_object(
    client: &SynapseClient,
    request: &IndexRequest,
) -> Result<IndexOutcome, ApiError> {
    let checksum = md5_hex(&request.file)?;
    let name = display_name(&request.file)?;
    debug!(file = %request.file.display(), %checksum, name, "checksummed local file");

    let handle = client
        .create_s3_file_handle(
            request.storage_id,
            &name,
            &checksum,
            &request.uri.bucket,
            &request.uri.key,
        )
        .await?;
    let entity = client
        .create_file_entity(&handle.file_name, &request.parent_id, &handle.id)
        .await?;
    info!(uri = %request.uri, entity_id = %entity.id, "indexed object");

    Ok(IndexOutcome {
        uri: request.uri.to_string(),
        entity_id: entity.id,
        checksum,
    })
}

/// Sanitized display name from the local path's final component.
fn display_name(file: &Path) -> Result<String, ApiError> {
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ApiError::ConfigError(format!("Cannot derive a file name from {:?}", file))
        })?;
    Ok(sanitize_entity_name(name))
}

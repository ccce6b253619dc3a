//! Wire types for the Synapse REST API.
//!
//! Field names follow the catalog's JSON schema (camelCase). Each request
//! struct carries the `concreteType` discriminator the service dispatches on.

use serde::{Deserialize, Serialize};

pub const FOLDER_TYPE: &str = "org.sagebionetworks.repo.model.Folder";
pub const FILE_ENTITY_TYPE: &str = "org.sagebionetworks.repo.model.FileEntity";
pub const S3_FILE_HANDLE_TYPE: &str = "org.sagebionetworks.repo.model.file.S3FileHandle";
pub const EXTERNAL_S3_STORAGE_LOCATION_TYPE: &str =
    "org.sagebionetworks.repo.model.project.ExternalS3StorageLocationSetting";

/// Profile of the authenticated principal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Numeric principal identifier, serialized as a string by the service.
    pub owner_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Request body registering an S3 bucket/prefix as an external storage location.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStorageLocation {
    pub upload_type: String,
    pub concrete_type: String,
    pub bucket: String,
    pub base_key: String,
}

impl NewStorageLocation {
    pub fn external_s3(bucket: &str, base_key: &str) -> Self {
        Self {
            upload_type: "S3".to_string(),
            concrete_type: EXTERNAL_S3_STORAGE_LOCATION_TYPE.to_string(),
            bucket: bucket.to_string(),
            base_key: base_key.to_string(),
        }
    }
}

/// Storage location allocated by the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLocation {
    pub storage_location_id: i64,
}

/// Request body for an external-object file handle on the file endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewS3FileHandle {
    pub concrete_type: String,
    pub storage_location_id: i64,
    pub file_name: String,
    pub content_md5: String,
    pub bucket_name: String,
    pub key: String,
}

/// File handle record returned by the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    pub id: String,
    pub file_name: String,
}

/// Request body creating a Folder entity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFolder {
    pub name: String,
    pub parent_id: String,
    pub concrete_type: String,
}

impl NewFolder {
    pub fn new(name: &str, parent_id: &str) -> Self {
        Self {
            name: name.to_string(),
            parent_id: parent_id.to_string(),
            concrete_type: FOLDER_TYPE.to_string(),
        }
    }
}

/// Request body creating a File entity pointing at a file handle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFileEntity {
    pub name: String,
    pub parent_id: String,
    pub data_file_handle_id: String,
    pub concrete_type: String,
}

impl NewFileEntity {
    pub fn new(name: &str, parent_id: &str, data_file_handle_id: &str) -> Self {
        Self {
            name: name.to_string(),
            parent_id: parent_id.to_string(),
            data_file_handle_id: data_file_handle_id.to_string(),
            concrete_type: FILE_ENTITY_TYPE.to_string(),
        }
    }
}

/// Entity record returned by `/entity` creation calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEntity {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

//! HTTP client for the Synapse REST API.
//!
//! An explicitly constructed session object passed into each operation.
//! Entity and storage-location calls go to the repository endpoint; file
//! handle calls go to the file endpoint.

use crate::config::{ConfigLoader, SynapseConfig};
use crate::error::ApiError;
use crate::types::{
    CreatedEntity, FileHandle, NewFileEntity, NewFolder, NewS3FileHandle, NewStorageLocation,
    StorageLocation, UserProfile, S3_FILE_HANDLE_TYPE,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(70);

/// Authenticated catalog session.
pub struct SynapseClient {
    http: Client,
    repo_endpoint: String,
    file_endpoint: String,
    token: String,
}

impl SynapseClient {
    /// Create a session from configuration.
    ///
    /// Fails if no auth token is configured or the HTTP client cannot be built.
    pub fn new(config: &SynapseConfig) -> Result<Self, ApiError> {
        let token = ConfigLoader::require_token(config)?;
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            http,
            repo_endpoint: config.repo_endpoint.trim_end_matches('/').to_string(),
            file_endpoint: config.file_endpoint.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Profile of the authenticated principal.
    pub async fn get_user_profile(&self) -> Result<UserProfile, ApiError> {
        self.get(&self.repo_endpoint, "/userProfile").await
    }

    /// Register an S3 bucket/prefix pair as an external storage location.
    pub async fn create_storage_location(
        &self,
        bucket: &str,
        base_key: &str,
    ) -> Result<StorageLocation, ApiError> {
        let body = NewStorageLocation::external_s3(bucket, base_key);
        self.post(&self.repo_endpoint, "/storageLocation", &body)
            .await
    }

    /// Create a file handle referencing an existing S3 object.
    pub async fn create_s3_file_handle(
        &self,
        storage_location_id: i64,
        file_name: &str,
        content_md5: &str,
        bucket: &str,
        key: &str,
    ) -> Result<FileHandle, ApiError> {
        let body = NewS3FileHandle {
            concrete_type: S3_FILE_HANDLE_TYPE.to_string(),
            storage_location_id,
            file_name: file_name.to_string(),
            content_md5: content_md5.to_string(),
            bucket_name: bucket.to_string(),
            key: key.to_string(),
        };
        self.post(&self.file_endpoint, "/externalFileHandle/s3", &body)
            .await
    }

    /// Create a Folder entity under the given parent.
    pub async fn create_folder(
        &self,
        name: &str,
        parent_id: &str,
    ) -> Result<CreatedEntity, ApiError> {
        let body = NewFolder::new(name, parent_id);
        self.post(&self.repo_endpoint, "/entity", &body).await
    }

    /// Create a File entity pointing at a file handle.
    pub async fn create_file_entity(
        &self,
        name: &str,
        parent_id: &str,
        data_file_handle_id: &str,
    ) -> Result<CreatedEntity, ApiError> {
        let body = NewFileEntity::new(name, parent_id, data_file_handle_id);
        self.post(&self.repo_endpoint, "/entity", &body).await
    }

    async fn get<R: DeserializeOwned>(&self, base: &str, path: &str) -> Result<R, ApiError> {
        debug!(path, "GET");
        let response = self
            .http
            .get(format!("{}{}", base, path))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::read_response(response).await
    }

    async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        debug!(path, "POST");
        let response = self
            .http
            .post(format!("{}{}", base, path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        Self::read_response(response).await
    }

    async fn read_response<R: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<R, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::RequestFailed {
            status: status.as_u16(),
            reason: extract_reason(&body),
        })
    }
}

/// Pull the `reason` field out of a catalog error body, falling back to the
/// raw body when it is not the expected JSON shape.
fn extract_reason(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("reason").and_then(|r| r.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}

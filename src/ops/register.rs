//! Storage-location registration.

use crate::client::SynapseClient;
use crate::error::ApiError;
use tracing::info;

/// Register a bucket/prefix pair as an S3-backed external storage location.
///
/// Not idempotent: every call allocates a new registration.
pub async fn register_bucket(
    client: &SynapseClient,
    bucket: &str,
    base_key: &str,
) -> Result<i64, ApiError> {
    let location = client.create_storage_location(bucket, base_key).await?;
    info!(
        bucket,
        base_key,
        storage_location_id = location.storage_location_id,
        "registered storage location"
    );
    Ok(location.storage_location_id)
}

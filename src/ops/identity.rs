//! Identity resolution.

use crate::client::SynapseClient;
use crate::error::ApiError;
use tracing::debug;

/// Resolve the authenticated principal's numeric identifier.
pub async fn resolve_user_id(client: &SynapseClient) -> Result<String, ApiError> {
    let profile = client.get_user_profile().await?;
    debug!(owner_id = %profile.owner_id, user_name = ?profile.user_name, "resolved principal");
    Ok(profile.owner_id)
}

//! Auth priority handlers

use std::collections::BTreeMap;

use authgate_credential::PriorityUpdate;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Response body for `GET /v0/management/auth-priority`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPriorityResponse {
    /// Priority per file-backed credential, keyed by display name
    #[serde(rename = "auth-priority")]
    pub auth_priority: BTreeMap<String, i64>,
}

/// Request body for `PATCH /v0/management/auth-priority`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchAuthPriorityRequest {
    /// Display name or ID of the credential
    #[serde(default)]
    pub name: Option<String>,
    /// New priority; `null` or absent clears it
    #[serde(default)]
    pub priority: Option<i64>,
}

/// Acknowledgement body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Always `"ok"`
    pub status: String,
}

impl StatusResponse {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// List priorities of file-backed credentials
pub async fn get_auth_priority(State(state): State<AppState>) -> ApiResult<Json<AuthPriorityResponse>> {
    let auth_priority = state.registry.list_priorities().await?;
    Ok(Json(AuthPriorityResponse { auth_priority }))
}

/// Set or clear one credential's priority
///
/// The body is decoded as JSON regardless of its `Content-Type`.
pub async fn patch_auth_priority(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<StatusResponse>> {
    let body: PatchAuthPriorityRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected auth priority body");
        ApiError::InvalidBody
    })?;

    let name = body.name.ok_or(ApiError::NameRequired)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::EmptyName);
    }

    state
        .registry
        .set_priority(name, PriorityUpdate::from(body.priority))
        .await?;
    Ok(Json(StatusResponse::ok()))
}

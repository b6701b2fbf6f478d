//! GET/POST /api/settings — the site editor's persisted settings object.
//!
//! The payload is opaque to the server; it is stored and returned without
//! interpreting any field.

use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct SaveData {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

pub(super) async fn get_settings(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse {
        data: state.settings.get(),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn save_settings(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(value): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<SaveData>>, ApiError> {
    state.settings.save(value).map_err(|e| {
        tracing::error!(error = %e, "failed to persist settings");
        ApiError::new(req_id.0.clone(), "internal_error", "failed to persist settings")
    })?;

    Ok(Json(ApiResponse {
        data: SaveData {
            success: true,
            message: "settings saved".to_string(),
            timestamp: Utc::now(),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

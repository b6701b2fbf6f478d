//! POST /api/search-business — find one listing by industry and phone.

use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use homepros_core::{normalize_phone, Service};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct BusinessLookup {
    pub industry: Option<String>,
    pub phone: Option<String>,
}

/// Both the request phone and each stored phone are stripped to digits
/// before comparison, so formatting differences never prevent a match.
pub(super) async fn search_business(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<BusinessLookup>,
) -> Result<Json<ApiResponse<Service>>, ApiError> {
    let industry = body.industry.as_deref().unwrap_or("").trim();
    let phone = body.phone.as_deref().unwrap_or("").trim();
    if industry.is_empty() || phone.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "industry and phone are required",
        ));
    }

    let wanted_digits = normalize_phone(phone);
    let industry_lower = industry.to_lowercase();

    let snapshot = state.store.snapshot();
    let matched = snapshot
        .iter()
        .filter(|s| !s.duplicate)
        .find(|s| {
            s.industry.to_lowercase().contains(&industry_lower)
                && normalize_phone(&s.phone) == wanted_digits
        })
        .cloned();

    match matched {
        Some(service) => Ok(Json(ApiResponse {
            data: service,
            meta: ResponseMeta::new(req_id.0),
        })),
        None => Err(ApiError::new(
            req_id.0,
            "not_found",
            "no business matches that industry and phone",
        )),
    }
}

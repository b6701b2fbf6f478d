//! GET /api/services — raw listing, duplicate-flagged rows included.

use axum::{extract::State, Extension, Json};
use homepros_core::Service;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_services(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Service>>> {
    Json(ApiResponse {
        data: state.store.get_all(),
        meta: ResponseMeta::new(req_id.0),
    })
}

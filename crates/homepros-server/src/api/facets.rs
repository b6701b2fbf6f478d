//! GET /api/industries and /api/cities — global facet lists for the
//! search UI's filter dropdowns.

use axum::{extract::State, Extension, Json};
use homepros_store::{city_facets, industry_facets};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_industries(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse {
        data: industry_facets(&state.store.snapshot()),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn list_cities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse {
        data: city_facets(&state.store.snapshot()),
        meta: ResponseMeta::new(req_id.0),
    })
}

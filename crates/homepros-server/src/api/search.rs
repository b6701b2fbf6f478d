//! GET /api/search — filtered, sorted, paginated directory search.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use homepros_store::{normalize_limit, SearchFilters, SearchResult, SortKey};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Wire shape of the search query string. Parameter names match the
/// published API (camelCase).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SearchQuery {
    pub query: Option<String>,
    pub industry: Option<String>,
    pub city: Option<String>,
    pub min_rating: Option<f64>,
    pub company_name: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl SearchQuery {
    fn into_filters(self) -> SearchFilters {
        SearchFilters {
            query: self.query,
            industry: self.industry,
            city: self.city,
            min_rating: self.min_rating,
            company_name: self.company_name,
            sort_by: SortKey::parse(self.sort_by.as_deref()),
            page: self.page.unwrap_or(1),
            limit: normalize_limit(self.limit),
        }
    }
}

pub(super) async fn search_services(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<SearchResult>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "validation_error", rejection.body_text())
    })?;

    let result = state.store.search(&query.into_filters());

    Ok(Json(ApiResponse {
        data: result,
        meta: ResponseMeta::new(req_id.0),
    }))
}

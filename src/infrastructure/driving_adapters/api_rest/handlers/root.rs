//! API Root and Fallback Handlers

use axum::{
    http::{header::HOST, HeaderMap, Uri},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::errors::ApiError;

/// Collection URL of every resource mounted under `/api/`
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiRootResponse {
    #[schema(example = "http://localhost:8000/api/destinations/")]
    pub destinations: String,
}

/// GET /api/ - Links to every resource collection
///
/// URLs are absolute when the request carries a `Host`, relative otherwise.
#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Resource collection URLs", body = ApiRootResponse),
    ),
    tag = "root"
)]
pub async fn api_root(headers: HeaderMap) -> Json<ApiRootResponse> {
    let base = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(|host| format!("http://{host}"))
        .unwrap_or_default();

    Json(ApiRootResponse {
        destinations: format!("{base}/api/destinations/"),
    })
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

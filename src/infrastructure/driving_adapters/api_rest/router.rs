//! Router
//!
//! Maps verbs and paths to the destination handlers and mounts the API
//! documentation. Every path is served with and without its trailing slash.

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{destinations, root};
use super::middleware::{allowed_hosts_middleware, request_id_middleware, AllowedHosts};
use super::openapi::ApiDoc;
use super::AppState;

/// Swagger UI mount point
pub const SWAGGER_UI_PATH: &str = "/swagger";

/// Raw OpenAPI document location
pub const OPENAPI_JSON_PATH: &str = "/swagger.json";

fn collection() -> MethodRouter<AppState> {
    get(destinations::list_destinations).post(destinations::create_destination)
}

fn item() -> MethodRouter<AppState> {
    get(destinations::get_destination)
        .put(destinations::update_destination)
        .patch(destinations::partial_update_destination)
        .delete(destinations::delete_destination)
}

/// Build the full application router with all routes and middleware
pub fn router(state: AppState) -> Router {
    let allowed_hosts = AllowedHosts::new(state.config.security.effective_allowed_hosts());

    let api = Router::new()
        .route("/api/", get(root::api_root))
        .route("/api", get(root::api_root))
        .route("/api/destinations/", collection())
        .route("/api/destinations", collection())
        .route("/api/destinations/{id}/", item())
        .route("/api/destinations/{id}", item())
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .fallback(root::not_found)
        .layer(middleware::from_fn_with_state(allowed_hosts, allowed_hosts_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

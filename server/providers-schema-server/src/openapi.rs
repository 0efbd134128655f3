use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::routes::paths;
use crate::server::SchemaServer;

/// OpenAPI documentation for the HTTP surface
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::schema::get,
        crate::handlers::health::health_check,
        crate::handlers::health::version_info,
    ),
    components(
        schemas(
            crate::handlers::health::HealthResponse,
            crate::handlers::health::VersionResponse,
        )
    ),
    tags(
        (name = "schema", description = "Published configuration JSON Schemas"),
        (name = "health", description = "Service health and version endpoints"),
    ),
    info(
        title = "Providers Schema API",
        description = "Serves the JSON Schema for provider selection in the UI configuration.",
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Route serving the generated OpenAPI document
pub fn docs_routes() -> Router<SchemaServer> {
    Router::new().route(paths::docs::OPENAPI_JSON, get(openapi_json))
}

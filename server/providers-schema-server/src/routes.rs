pub mod paths;

use axum::{routing::get, Router};

use crate::{
    handlers::{self, health, schema},
    openapi,
    server::SchemaServer,
};

/// Create health check routes
pub fn health_routes() -> Router<SchemaServer> {
    Router::new()
        .route(paths::health::HEALTH, get(health::health_check))
        .route(paths::health::VERSION, get(health::version_info))
}

/// Create schema document routes
pub fn schema_routes() -> Router<SchemaServer> {
    Router::new().route(paths::schema::PROVIDERS, get(schema::get))
}

/// Create all application routes
pub fn create_routes() -> Router<SchemaServer> {
    Router::new()
        .merge(health_routes())
        .merge(schema_routes())
        .merge(openapi::docs_routes())
        .fallback(handlers::not_found)
}

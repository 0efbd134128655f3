//! Providers Schema Server
//!
//! Publishes the JSON Schema for the `providers` configuration block over
//! HTTP, alongside health, version and OpenAPI endpoints.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod schema;
pub mod server;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ServerError};
pub use schema::{providers_schema, ProviderDefaults, ProvidersConfig};
pub use server::{SchemaServer, ServerConfig};

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: SchemaServer) -> Router {
    let cors = middleware::create_cors_layer(&server.config.cors_origins);

    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}

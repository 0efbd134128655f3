use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::schema::PROVIDERS_SCHEMA_ID;
use crate::server::SchemaServer;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service health status
    #[schema(example = "healthy")]
    pub status: String,
    /// Service name
    #[schema(example = "providers-schema-server")]
    pub service: String,
    /// Current timestamp in RFC3339 format
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: String,
}

/// Version information response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VersionResponse {
    /// Service name
    #[schema(example = "providers-schema-server")]
    pub name: String,
    /// Crate version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// `$id`s of the schemas this server publishes
    pub schemas: Vec<String>,
}

/// Health check handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(server): State<SchemaServer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: server.config.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Version information handler
#[utoipa::path(
    get,
    path = "/version",
    tag = "health",
    responses(
        (status = 200, description = "Version information retrieved successfully", body = VersionResponse)
    )
)]
pub async fn version_info(State(server): State<SchemaServer>) -> Json<VersionResponse> {
    Json(VersionResponse {
        name: server.config.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schemas: vec![PROVIDERS_SCHEMA_ID.to_string()],
    })
}

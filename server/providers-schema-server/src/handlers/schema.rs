use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
};

use crate::error::ApiResult;
use crate::schema::{providers_schema_body, PROVIDERS_SCHEMA_ID};
use crate::server::SchemaServer;

/// Serve the providers configuration JSON Schema.
///
/// The request carries no input; every call returns the same cached body.
#[utoipa::path(
    get,
    path = "/schema/providers.json",
    tag = "schema",
    responses(
        (status = 200, description = "Providers configuration JSON Schema (draft 2020-12)")
    )
)]
pub async fn get(State(server): State<SchemaServer>) -> ApiResult<Response> {
    tracing::debug!(schema_id = PROVIDERS_SCHEMA_ID, "Serving providers schema");

    let cache_control = format!("public, max-age={}", server.config.cache_max_age_secs);
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CACHE_CONTROL, cache_control)
        .body(Body::from(providers_schema_body()))?;

    Ok(response)
}

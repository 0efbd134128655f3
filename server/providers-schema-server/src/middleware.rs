use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::routes::paths;
use crate::schema::PROVIDERS_SCHEMA_ID;

/// Origin value that opens the schema to every site
const ANY_ORIGIN: &str = "*";

/// Logs each request with its latency. Schema fetches carry the `$id` they
/// served; health and version checks drop to `debug`.
pub async fn request_timing_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    match path.as_str() {
        paths::schema::PROVIDERS => tracing::info!(
            method = %method,
            schema_id = PROVIDERS_SCHEMA_ID,
            status,
            duration_ms,
            "Schema served"
        ),
        paths::health::HEALTH | paths::health::VERSION => tracing::debug!(
            method = %method,
            path = %path,
            status,
            duration_ms,
            "Health check served"
        ),
        _ => tracing::info!(
            method = %method,
            path = %path,
            status,
            duration_ms,
            "Request processed"
        ),
    }

    response
}

/// Create CORS layer for the configured origins.
///
/// A `*` entry allows any origin. Otherwise origins that are not valid
/// header values are logged and skipped.
pub fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    layer.allow_origin(allowed_origins(origins))
}

fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|origin| origin.trim() == ANY_ORIGIN) {
        return AllowOrigin::any();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(allowed)
}

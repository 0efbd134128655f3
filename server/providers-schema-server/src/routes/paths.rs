//! Centralized route path constants
//!
//! utoipa `#[path(...)]` attributes need string literals, so the paths in
//! handler attributes must be kept in sync with these constants by hand.

/// Health check endpoints
pub mod health {
    pub const HEALTH: &str = "/health";
    pub const VERSION: &str = "/version";
}

/// Published JSON Schema documents
pub mod schema {
    pub const PROVIDERS: &str = "/schema/providers.json";
}

/// API documentation endpoints
pub mod docs {
    pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
}

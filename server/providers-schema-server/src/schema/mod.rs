//! Configuration schemas published by the server

pub mod config;
pub mod providers;

pub use config::{ProviderDefaults, ProvidersConfig};
pub use providers::{
    cached_providers_schema, providers_schema, providers_schema_body, JSON_SCHEMA_DIALECT,
    PROVIDERS_SCHEMA_ID,
};

//! JSON Schema for the providers configuration block.
//!
//! The document describes which provider instances the UI enables and how
//! provider-aware views behave by default. It is a static literal: the same
//! value is produced for every call, and the serialized form is cached for the
//! lifetime of the process so responses stay byte-identical.

use lazy_static::lazy_static;
use serde_json::{json, Value};

/// Meta-schema every document published by this server declares.
pub const JSON_SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// `$id` of the providers schema.
pub const PROVIDERS_SCHEMA_ID: &str = "providers.schema.json";

const PATTERN_SYNTAX: &str = "Supports exact instance IDs (gitlab:gitlab.com), provider wildcards (gitlab:*), or provider aliases (gitlab/github).";

lazy_static! {
    static ref PROVIDERS_SCHEMA: Value = providers_schema();
    static ref PROVIDERS_SCHEMA_BODY: String = PROVIDERS_SCHEMA.to_string();
}

/// Returns the JSON Schema for the `providers` configuration object.
#[must_use]
pub fn providers_schema() -> Value {
    json!({
        "$schema": JSON_SCHEMA_DIALECT,
        "$id": PROVIDERS_SCHEMA_ID,
        "title": "Providers",
        "description": "Configure which provider instances are enabled in the UI.",
        "type": "object",
        "properties": {
            "include": pattern_list_schema(
                "Include Providers",
                "List of provider patterns to include.",
            ),
            "exclude": pattern_list_schema(
                "Exclude Providers",
                "List of provider patterns to exclude.",
            ),
            "defaults": defaults_schema(),
        }
    })
}

/// Cached copy of [`providers_schema`], built on first use.
pub fn cached_providers_schema() -> &'static Value {
    &PROVIDERS_SCHEMA
}

/// Compact JSON serialization of the providers schema, as served over HTTP.
pub fn providers_schema_body() -> &'static str {
    PROVIDERS_SCHEMA_BODY.as_str()
}

fn pattern_list_schema(title: &str, lead: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{lead} {PATTERN_SYNTAX}"),
        "type": "array",
        "items": {
            "type": "string"
        }
    })
}

fn defaults_schema() -> Value {
    json!({
        "title": "Provider Defaults",
        "description": "Default UI behavior for provider-aware views.",
        "type": "object",
        "properties": {
            "groupByProvider": {
                "title": "Group By Provider",
                "description": "When true, sections are grouped by provider instance by default.",
                "type": "boolean"
            }
        }
    })
}

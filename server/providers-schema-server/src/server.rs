use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ServerError;

/// Default origins allowed to fetch the schema from a browser
const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:4321",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:4321",
];

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct SchemaServer {
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Service name reported by health endpoints
    #[serde(default = "default_name")]
    pub name: String,

    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// `max-age` advertised on schema responses, in seconds
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age_secs: u64,

    /// Origins allowed by the CORS layer
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_name() -> String {
    "providers-schema-server".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cache_max_age() -> u64 {
    3600
}

fn default_cors_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            host: default_host(),
            port: default_port(),
            cache_max_age_secs: default_cache_max_age(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ServerConfig {
    /// Build configuration from `SCHEMA_SERVER_*` environment variables.
    ///
    /// Unset variables fall back to defaults; a `.env` file should already
    /// have been loaded by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `SCHEMA_SERVER_PORT` or
    /// `SCHEMA_SERVER_CACHE_MAX_AGE` is not a valid number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("SCHEMA_SERVER_NAME") {
            config.name = name;
        }
        if let Some(host) = lookup("SCHEMA_SERVER_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("SCHEMA_SERVER_PORT") {
            config.port = parse_number("SCHEMA_SERVER_PORT", &port)?;
        }
        if let Some(max_age) = lookup("SCHEMA_SERVER_CACHE_MAX_AGE") {
            config.cache_max_age_secs = parse_number("SCHEMA_SERVER_CACHE_MAX_AGE", &max_age)?;
        }
        if let Some(origins) = lookup("SCHEMA_SERVER_CORS_ORIGINS") {
            config.cors_origins = parse_origin_list(&origins);
        }

        Ok(config)
    }

    /// Resolve the socket address to bind. `host` must be an IPv4 or IPv6 literal.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid bind host {:?}: {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_number<T>(key: &str, raw: &str) -> Result<T, ServerError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ServerError::Config(format!("invalid {key} {raw:?}: {e}")))
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl SchemaServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for SchemaServer {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cache_max_age_secs, 3600);
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_host_rejected() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(config.socket_addr(), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_ipv6_hosts_accepted() {
        let config = ServerConfig {
            host: "::1".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:8080");

        let config = ServerConfig {
            host: "::".to_string(),
            port: 9000,
            ..ServerConfig::default()
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::]:9000");
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_empty_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        let defaults = ServerConfig::default();
        assert_eq!(config.name, defaults.name);
        assert_eq!(config.port, defaults.port);
        assert_eq!(config.cors_origins, defaults.cors_origins);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SCHEMA_SERVER_NAME", "docs-schemas"),
            ("SCHEMA_SERVER_HOST", "127.0.0.1"),
            ("SCHEMA_SERVER_PORT", "9090"),
            ("SCHEMA_SERVER_CACHE_MAX_AGE", "60"),
            ("SCHEMA_SERVER_CORS_ORIGINS", "https://docs.example.com, http://localhost:4321"),
        ]))
        .unwrap();

        assert_eq!(config.name, "docs-schemas");
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9090");
        assert_eq!(config.cache_max_age_secs, 60);
        assert_eq!(
            config.cors_origins,
            vec!["https://docs.example.com", "http://localhost:4321"]
        );
    }

    #[test]
    fn test_from_lookup_rejects_bad_numbers() {
        let result = ServerConfig::from_lookup(lookup_from(&[("SCHEMA_SERVER_PORT", "eighty")]));
        assert!(matches!(result, Err(ServerError::Config(msg)) if msg.contains("SCHEMA_SERVER_PORT")));

        let result = ServerConfig::from_lookup(lookup_from(&[("SCHEMA_SERVER_PORT", "70000")]));
        assert!(matches!(result, Err(ServerError::Config(_))));

        let result =
            ServerConfig::from_lookup(lookup_from(&[("SCHEMA_SERVER_CACHE_MAX_AGE", "-1")]));
        assert!(
            matches!(result, Err(ServerError::Config(msg)) if msg.contains("SCHEMA_SERVER_CACHE_MAX_AGE"))
        );
    }

    #[test]
    fn test_parse_origin_list() {
        assert_eq!(
            parse_origin_list(" http://a.test , ,http://b.test"),
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.name, "providers-schema-server");
    }
}

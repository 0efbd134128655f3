use serde::{Deserialize, Serialize};

/// Providers configuration block described by [`super::providers_schema`].
///
/// Patterns are kept verbatim; interpreting them is the job of whatever
/// consumes the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvidersConfig {
    /// Provider patterns to include
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Provider patterns to exclude
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Default UI behavior for provider-aware views
    #[serde(default, skip_serializing_if = "ProviderDefaults::is_empty")]
    pub defaults: ProviderDefaults,
}

/// Defaults applied to provider-aware views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by_provider: Option<bool>,
}

impl ProviderDefaults {
    pub fn is_empty(&self) -> bool {
        self.group_by_provider.is_none()
    }
}

impl ProvidersConfig {
    /// Whether sections should be grouped by provider instance. Unset means no.
    pub fn group_by_provider(&self) -> bool {
        self.defaults.group_by_provider.unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty() && self.defaults.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_serializes_empty() {
        let config = ProvidersConfig::default();
        assert!(config.is_empty());
        assert!(!config.group_by_provider());
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({}));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let config: ProvidersConfig = serde_json::from_value(json!({
            "include": ["gitlab:*", "github"],
            "exclude": ["gitlab:gitlab.example.com"],
            "defaults": { "groupByProvider": true }
        }))
        .unwrap();

        assert_eq!(config.include, vec!["gitlab:*", "github"]);
        assert_eq!(config.exclude, vec!["gitlab:gitlab.example.com"]);
        assert!(config.group_by_provider());
    }

    #[test]
    fn test_pattern_order_preserved() {
        let config: ProvidersConfig = serde_json::from_value(json!({
            "include": ["github", "gitlab:gitlab.com", "gitlab:*"]
        }))
        .unwrap();
        assert_eq!(config.include, vec!["github", "gitlab:gitlab.com", "gitlab:*"]);
        assert!(config.defaults.is_empty());
    }

    #[test]
    fn test_wrong_types_rejected() {
        let result: Result<ProvidersConfig, _> =
            serde_json::from_value(json!({ "include": "gitlab" }));
        assert!(result.is_err());

        let result: Result<ProvidersConfig, _> =
            serde_json::from_value(json!({ "defaults": { "groupByProvider": "yes" } }));
        assert!(result.is_err());
    }
}

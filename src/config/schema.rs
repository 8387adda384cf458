//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for route
//! discovery and matching. All types derive Serde traits for
//! deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::routing::Verb;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Where route files live.
    pub discovery: DiscoveryConfig,

    /// Values applied to route entries that leave a field out.
    pub defaults: RouteDefaults,

    /// Request path handling.
    pub matching: MatchingConfig,

    /// Route file watching.
    pub watch: WatchConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Route discovery configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directory scanned recursively for route files.
    pub routes_dir: PathBuf,

    /// Extension of route files (without the dot).
    pub extension: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            routes_dir: PathBuf::from("routes"),
            extension: "toml".to_string(),
        }
    }
}

/// Defaults for optional route fields.
///
/// `auth` is the deployment-wide fallback for routes that do not say
/// whether they require authentication.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RouteDefaults {
    pub auth: bool,
    pub verb: Verb,
}

/// Request path handling.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MatchingConfig {
    /// Mount prefix removed from request URIs (e.g. "/app"). Empty for none.
    pub subdir: String,
}

/// Route file watching.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct WatchConfig {
    /// Poll interval for backends that poll, in seconds.
    pub poll_interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 2,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: RegistryConfig = toml::from_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.discovery.routes_dir, PathBuf::from("routes"));
        assert_eq!(config.defaults.verb, Verb::Get);
        assert!(!config.defaults.auth);
    }

    #[test]
    fn test_partial_document() {
        let config: RegistryConfig = toml::from_str(
            r#"
            [defaults]
            auth = true
            verb = "POST"

            [matching]
            subdir = "/app"
            "#,
        )
        .unwrap();

        assert!(config.defaults.auth);
        assert_eq!(config.defaults.verb, Verb::Post);
        assert_eq!(config.matching.subdir, "/app");
        assert_eq!(config.discovery.extension, "toml");
        assert_eq!(config.watch.poll_interval_secs, 2);
    }

    #[test]
    fn test_unknown_verb_is_parse_error() {
        let result: Result<RegistryConfig, _> = toml::from_str("[defaults]\nverb = \"fetch\"\n");
        assert!(result.is_err());
    }
}

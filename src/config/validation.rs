//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (poll interval > 0, known log level)
//! - Check the mount subdir has the shape `normalize` expects
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RegistryConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::RegistryConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("discovery.routes_dir must not be empty")]
    EmptyRoutesDir,

    #[error("discovery.extension must not be empty")]
    EmptyExtension,

    #[error("matching.subdir must start with '/' and not end with '/': {0:?}")]
    InvalidSubdir(String),

    #[error("watch.poll_interval_secs must be greater than zero")]
    ZeroPollInterval,

    #[error("unknown observability.log_level: {0:?}")]
    UnknownLogLevel(String),
}

/// Check `config` for semantic errors.
pub fn validate_config(config: &RegistryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.discovery.routes_dir.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyRoutesDir);
    }

    if config.discovery.extension.trim().is_empty() {
        errors.push(ValidationError::EmptyExtension);
    }

    let subdir = &config.matching.subdir;
    if !subdir.is_empty() && (!subdir.starts_with('/') || subdir.ends_with('/')) {
        errors.push(ValidationError::InvalidSubdir(subdir.clone()));
    }

    if config.watch.poll_interval_secs == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&RegistryConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RegistryConfig::default();
        config.discovery.routes_dir = PathBuf::new();
        config.matching.subdir = "app/".to_string();
        config.watch.poll_interval_secs = 0;
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyRoutesDir,
                ValidationError::InvalidSubdir("app/".to_string()),
                ValidationError::ZeroPollInterval,
                ValidationError::UnknownLogLevel("loud".to_string()),
            ]
        );
    }

    #[test]
    fn test_subdir_shapes() {
        let mut config = RegistryConfig::default();

        config.matching.subdir = "/app".to_string();
        assert!(validate_config(&config).is_ok());

        config.matching.subdir = "/".to_string();
        assert!(validate_config(&config).is_err());
    }
}

//! Crate-level error type.

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

use crate::config::ConfigError;
use crate::discovery::DiscoveryError;

/// Failures that stop a command from running to completion.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("logging setup failed: {0}")]
    Logging(#[from] TryInitError),

    #[error("output encoding failed: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::discovery::scan;

    #[test]
    fn test_config_error_converts() {
        fn load() -> Result<()> {
            parse_config("[discovery")?;
            Ok(())
        }

        assert!(matches!(load(), Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn test_discovery_error_converts() {
        fn build(dir: &std::path::Path) -> Result<usize> {
            Ok(scan(dir, "toml", &Default::default())?.files)
        }

        let dir = tempfile::TempDir::new().unwrap();
        let err = build(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::Discovery(DiscoveryError::Io { .. })));
        assert!(err.to_string().starts_with("cannot read routes directory"));
    }
}

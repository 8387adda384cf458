//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RegistryConfig (validated, immutable)
//!
//! On route file change:
//!     watcher.rs detects change
//!     → discovery rescans the routes directory
//!     → new RouteTable compiled
//!     → atomic swap inside SharedRouteTable
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - The auth fallback is a config value, never read from the environment

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    DiscoveryConfig, MatchingConfig, ObservabilityConfig, RegistryConfig, RouteDefaults,
    WatchConfig,
};
pub use validation::{validate_config, ValidationError};
pub use watcher::{rebuild, RouteWatcher};

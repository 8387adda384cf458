//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!         (discovery counts, rejected templates, reloads)
//!
//! Consumers:
//!     → logging.rs (fmt layer on stdout, EnvFilter)
//! ```

pub mod logging;

pub use logging::init_logging;

//! Route discovery subsystem.
//!
//! # Data Flow
//! ```text
//! routes directory
//!     → scanner.rs (recursive walk, sorted)
//!     → route_file.rs (parse [[route]] entries, apply defaults)
//!     → Discovery { routes, skipped }
//!     → RouteTable::new
//! ```
//!
//! Routes can also be registered in code with
//! [`RouteDescriptor::builder`](crate::routing::RouteDescriptor::builder);
//! both paths produce the same descriptors.

pub mod route_file;
pub mod scanner;

pub use route_file::{RawRoute, RouteFile};
pub use scanner::{discover, scan, Discovery, DiscoveryError, SkipReason, Skipped};

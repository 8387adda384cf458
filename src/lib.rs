//! Route discovery and route matching.
//!
//! Route files are discovered from a directory, compiled into an ordered
//! [`RouteTable`], and request paths are matched against it first-match-wins.
//!
//! ```
//! use route_table::routing::{normalize, RouteDescriptor, RouteTable};
//!
//! let table = RouteTable::new([
//!     RouteDescriptor::builder("/users/{id}", "users.show").build().unwrap(),
//! ]);
//!
//! let path = normalize("/app/users/42/", "/app");
//! let matched = table.at(&path).unwrap();
//! assert_eq!(matched.route.name, "users.show");
//! assert_eq!(matched.params.get("id"), Some("42"));
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod observability;
pub mod routing;

pub use config::RegistryConfig;
pub use error::{Error, Result};
pub use routing::{normalize, Match, MatchError, RouteDescriptor, RouteTable, SharedRouteTable};

//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request URI
//!     → normalize.rs (strip mount subdir, trailing slash)
//!     → router.rs (ordered lookup)
//!     → matcher.rs (anchored template match, placeholder capture)
//!     → Return: Match { route, params } or NotFound
//!
//! Route Compilation (at startup / reload):
//!     RouteDescriptor[]
//!     → Compile templates (malformed ones rejected)
//!     → Freeze as immutable RouteTable
//!     → Publish through SharedRouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled ahead of time, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod descriptor;
pub mod matcher;
pub mod normalize;
pub mod params;
pub mod router;
pub mod shared;

pub use descriptor::{DescriptorError, RouteDescriptor, RouteDescriptorBuilder, Verb};
pub use matcher::{Pattern, PatternError};
pub use normalize::normalize;
pub use params::Params;
pub use router::{find, Match, MatchError, Rejected, RouteTable};
pub use shared::SharedRouteTable;

//! Route table and lookup.
//!
//! # Responsibilities
//! - Compile descriptors into an ordered table
//! - Exclude descriptors whose templates are malformed, and report them
//! - Look up the first route matching a normalized request path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) linear scan in declaration order; first match wins
//! - Explicit NotFound rather than a silent default route
//! - Later routes shadowed by an earlier, broader template are never
//!   reached. Declaring specific routes first is the caller's job.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::routing::{Params, Pattern, PatternError, RouteDescriptor};

/// Returned when no route in the table matches a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("no route matches the request path")]
    NotFound,
}

/// A successful lookup: the matched route and its captured placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<'t> {
    pub route: &'t RouteDescriptor,
    pub params: Params,
}

/// A descriptor excluded from the table because its template did not compile.
#[derive(Debug, Clone)]
pub struct Rejected {
    pub descriptor: RouteDescriptor,
    pub error: PatternError,
}

#[derive(Debug, Clone)]
struct CompiledRoute {
    descriptor: RouteDescriptor,
    pattern: Pattern,
}

/// Ordered, compiled routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    rejected: Vec<Rejected>,
}

impl RouteTable {
    /// Compile `descriptors` in order.
    ///
    /// A descriptor with a malformed template is left out of the table and
    /// recorded in [`RouteTable::rejected`]; the rest are still compiled.
    pub fn new(descriptors: impl IntoIterator<Item = RouteDescriptor>) -> Self {
        let mut routes = Vec::new();
        let mut rejected = Vec::new();
        let mut seen = HashSet::new();

        for descriptor in descriptors {
            match Pattern::compile(&descriptor.path) {
                Ok(pattern) => {
                    if !seen.insert(descriptor.name.clone()) {
                        tracing::warn!(
                            name = %descriptor.name,
                            path = %descriptor.path,
                            "Duplicate route name; lookups by name return the first"
                        );
                    }
                    routes.push(CompiledRoute { descriptor, pattern });
                }
                Err(error) => {
                    tracing::warn!(
                        name = %descriptor.name,
                        path = %descriptor.path,
                        error = %error,
                        "Rejecting route with malformed path template"
                    );
                    rejected.push(Rejected { descriptor, error });
                }
            }
        }

        tracing::debug!(
            routes = routes.len(),
            rejected = rejected.len(),
            "Route table compiled"
        );

        Self { routes, rejected }
    }

    /// Find the first route matching `path`.
    ///
    /// `path` should already be normalized (see [`crate::routing::normalize`]).
    pub fn at(&self, path: &str) -> Result<Match<'_>, MatchError> {
        for route in &self.routes {
            if let Some(params) = route.pattern.captures(path) {
                tracing::trace!(path, route = %route.descriptor.name, "Route matched");
                return Ok(Match {
                    route: &route.descriptor,
                    params,
                });
            }
        }

        tracing::trace!(path, "No route matched");
        Err(MatchError::NotFound)
    }

    /// First route registered under `name`.
    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes().find(|descriptor| descriptor.name == name)
    }

    /// Routes in match order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter().map(|r| &r.descriptor)
    }

    /// Descriptors excluded for malformed templates.
    pub fn rejected(&self) -> &[Rejected] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Match `path` against `table`. Same as [`RouteTable::at`].
pub fn find<'t>(table: &'t RouteTable, path: &str) -> Result<Match<'t>, MatchError> {
    table.at(path)
}

//! Route descriptors.
//!
//! # Responsibilities
//! - Define the record every route table is built from
//! - Enforce the mandatory `path`/`name` invariant at construction
//! - Provide a builder for registering routes next to handler code
//!
//! # Design Decisions
//! - Verbs are a closed enum, rendered lower-case
//! - A descriptor that exists is valid; invalid input never reaches the table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing a [`RouteDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// The route has no path template.
    #[error("route is missing a path")]
    MissingPath,

    /// The route has no name.
    #[error("route is missing a name")]
    MissingName,

    /// The verb is not one of the supported HTTP methods.
    #[error("unknown HTTP verb: {0}")]
    UnknownVerb(String),
}

/// HTTP method a route accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Verb {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Verb {
    /// Lower-case name of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Patch => "patch",
            Verb::Delete => "delete",
            Verb::Head => "head",
            Verb::Options => "options",
        }
    }
}

impl FromStr for Verb {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(Verb::Get),
            "post" => Ok(Verb::Post),
            "put" => Ok(Verb::Put),
            "patch" => Ok(Verb::Patch),
            "delete" => Ok(Verb::Delete),
            "head" => Ok(Verb::Head),
            "options" => Ok(Verb::Options),
            _ => Err(DescriptorError::UnknownVerb(s.to_string())),
        }
    }
}

impl TryFrom<String> for Verb {
    type Error = DescriptorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    /// Path template, e.g. `/users/{id}`.
    pub path: String,

    /// Unique logical identifier.
    pub name: String,

    /// Handler identity. Opaque to the matcher.
    pub controller: String,

    /// Operation within the controller, when it groups several routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Accepted HTTP method.
    pub verb: Verb,

    /// Whether the route requires authentication.
    pub auth: bool,

    /// Whether the route requires elevated privilege.
    pub admin: bool,
}

impl RouteDescriptor {
    /// Start building a descriptor from its two mandatory fields.
    pub fn builder(path: impl Into<String>, name: impl Into<String>) -> RouteDescriptorBuilder {
        RouteDescriptorBuilder {
            path: path.into(),
            name: name.into(),
            controller: String::new(),
            method: None,
            verb: Verb::default(),
            auth: false,
            admin: false,
        }
    }
}

/// Builder for code-adjacent route registration.
///
/// ```
/// use route_table::routing::{RouteDescriptor, Verb};
///
/// let route = RouteDescriptor::builder("/users/{id}", "users.update")
///     .controller("UserController")
///     .method("update")
///     .verb(Verb::Put)
///     .auth(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(route.verb.as_str(), "put");
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct RouteDescriptorBuilder {
    path: String,
    name: String,
    controller: String,
    method: Option<String>,
    verb: Verb,
    auth: bool,
    admin: bool,
}

impl RouteDescriptorBuilder {
    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = controller.into();
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn verb(mut self, verb: Verb) -> Self {
        self.verb = verb;
        self
    }

    pub fn auth(mut self, auth: bool) -> Self {
        self.auth = auth;
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Validate and produce the descriptor.
    pub fn build(self) -> Result<RouteDescriptor, DescriptorError> {
        if self.path.trim().is_empty() {
            return Err(DescriptorError::MissingPath);
        }
        if self.name.trim().is_empty() {
            return Err(DescriptorError::MissingName);
        }

        Ok(RouteDescriptor {
            path: self.path,
            name: self.name,
            controller: self.controller,
            method: self.method,
            verb: self.verb,
            auth: self.auth,
            admin: self.admin,
        })
    }
}

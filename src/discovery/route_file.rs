//! Declarative route file format.
//!
//! ```toml
//! controller = "UserController"   # optional file-level default
//!
//! [[route]]
//! path = "/users/{id}"
//! name = "users.show"
//! method = "show"
//! verb = "GET"
//! auth = true
//! ```
//!
//! Every field of a `[[route]]` entry is optional at the syntax level so
//! that one bad entry does not make the whole file unreadable. Missing
//! `path`/`name` is reported per entry when the descriptor is built.

use serde::Deserialize;

use crate::config::RouteDefaults;
use crate::routing::{DescriptorError, RouteDescriptor, Verb};

/// A route file as written on disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteFile {
    /// Controller applied to entries that do not name one.
    #[serde(default)]
    pub controller: Option<String>,

    #[serde(default, rename = "route")]
    pub routes: Vec<RawRoute>,
}

/// One `[[route]]` entry before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRoute {
    pub path: Option<String>,
    pub name: Option<String>,
    pub controller: Option<String>,
    pub method: Option<String>,
    pub verb: Option<String>,
    pub auth: Option<bool>,
    pub admin: Option<bool>,
}

impl RawRoute {
    /// Apply defaults and validate.
    pub fn into_descriptor(
        self,
        file_controller: Option<&str>,
        defaults: &RouteDefaults,
    ) -> Result<RouteDescriptor, DescriptorError> {
        let path = self.path.ok_or(DescriptorError::MissingPath)?;
        let name = self.name.ok_or(DescriptorError::MissingName)?;
        let verb = match self.verb {
            Some(verb) => verb.parse::<Verb>()?,
            None => defaults.verb,
        };
        let controller = self
            .controller
            .or_else(|| file_controller.map(str::to_string))
            .unwrap_or_default();

        let mut builder = RouteDescriptor::builder(path, name)
            .controller(controller)
            .verb(verb)
            .auth(self.auth.unwrap_or(defaults.auth))
            .admin(self.admin.unwrap_or(false));

        if let Some(method) = self.method {
            builder = builder.method(method);
        }

        builder.build()
    }
}

impl RouteFile {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Build every entry, in file order. Each entry succeeds or fails alone.
    pub fn into_descriptors(
        self,
        defaults: &RouteDefaults,
    ) -> Vec<Result<RouteDescriptor, DescriptorError>> {
        let file_controller = self.controller;
        self.routes
            .into_iter()
            .map(|raw| raw.into_descriptor(file_controller.as_deref(), defaults))
            .collect()
    }
}

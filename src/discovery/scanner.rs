//! Recursive route file discovery.
//!
//! # Responsibilities
//! - Walk the routes directory in a deterministic order
//! - Parse every route file and build descriptors
//! - Separate I/O failure, malformed input and "nothing found"
//!
//! # Design Decisions
//! - Files are visited sorted by name at each level, so table order is
//!   stable across runs and platforms
//! - A broken file or entry is skipped and reported; the scan continues
//! - Symlinks are followed; a dangling link or unreadable subdirectory is
//!   skipped like a broken file
//! - The routes directory itself being unreadable is an error

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::config::{RegistryConfig, RouteDefaults};
use crate::discovery::route_file::RouteFile;
use crate::routing::{DescriptorError, RouteDescriptor, RouteTable};

/// Scan failures that prevent discovery altogether.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("cannot read routes directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("routes path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Why a file or an entry was left out.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("parse failed: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid route: {0}")]
    Invalid(#[source] DescriptorError),

    #[error("walk failed: {0}")]
    Walk(#[source] walkdir::Error),
}

/// A file, or one entry of a file, that did not produce a descriptor.
#[derive(Debug)]
pub struct Skipped {
    pub file: PathBuf,
    /// Position of the `[[route]]` entry; `None` when the whole file was skipped.
    pub entry: Option<usize>,
    pub reason: SkipReason,
}

/// Result of a scan.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Valid descriptors in discovery order.
    pub routes: Vec<RouteDescriptor>,
    pub skipped: Vec<Skipped>,
    /// Number of route files read.
    pub files: usize,
}

impl Discovery {
    /// Compile the discovered routes into a table.
    pub fn into_table(self) -> (RouteTable, Vec<Skipped>) {
        (RouteTable::new(self.routes), self.skipped)
    }
}

/// Scan `dir` recursively for files ending in `.{extension}`.
pub fn scan(
    dir: &Path,
    extension: &str,
    defaults: &RouteDefaults,
) -> Result<Discovery, DiscoveryError> {
    let metadata = fs::metadata(dir).map_err(|source| DiscoveryError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(DiscoveryError::NotADirectory(dir.to_path_buf()));
    }

    let mut discovery = Discovery::default();

    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                let file = e.path().unwrap_or(dir).to_path_buf();
                tracing::warn!(file = %file.display(), error = %e, "Skipping unreadable path");
                discovery.skipped.push(Skipped {
                    file,
                    entry: None,
                    reason: SkipReason::Walk(e),
                });
                continue;
            }
        };
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().map_or(true, |ext| ext != extension) {
            continue;
        }

        discovery.files += 1;
        read_route_file(path, defaults, &mut discovery);
    }

    tracing::info!(
        dir = %dir.display(),
        files = discovery.files,
        routes = discovery.routes.len(),
        skipped = discovery.skipped.len(),
        "Route discovery finished"
    );

    Ok(discovery)
}

/// Scan the directory named by `config`.
pub fn discover(config: &RegistryConfig) -> Result<Discovery, DiscoveryError> {
    scan(
        &config.discovery.routes_dir,
        &config.discovery.extension,
        &config.defaults,
    )
}

fn read_route_file(path: &Path, defaults: &RouteDefaults, discovery: &mut Discovery) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "Skipping unreadable route file");
            discovery.skipped.push(Skipped {
                file: path.to_path_buf(),
                entry: None,
                reason: SkipReason::Read(e),
            });
            return;
        }
    };

    let file = match RouteFile::parse(&content) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "Skipping malformed route file");
            discovery.skipped.push(Skipped {
                file: path.to_path_buf(),
                entry: None,
                reason: SkipReason::Parse(e),
            });
            return;
        }
    };

    for (index, built) in file.into_descriptors(defaults).into_iter().enumerate() {
        match built {
            Ok(descriptor) => discovery.routes.push(descriptor),
            Err(e) => {
                tracing::warn!(
                    file = %path.display(),
                    entry = index,
                    error = %e,
                    "Skipping invalid route entry"
                );
                discovery.skipped.push(Skipped {
                    file: path.to_path_buf(),
                    entry: Some(index),
                    reason: SkipReason::Invalid(e),
                });
            }
        }
    }
}

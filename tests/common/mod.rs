//! Shared utilities for integration tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Create an empty routes directory.
pub fn routes_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a route file at `relative` inside `dir`, creating parent directories.
pub fn write_routes(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A single `[[route]]` entry.
#[allow(dead_code)]
pub fn entry(path: &str, name: &str) -> String {
    format!("[[route]]\npath = \"{}\"\nname = \"{}\"\n\n", path, name)
}

//! Route directory watcher for hot reload.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::schema::RegistryConfig;
use crate::discovery::{discover, DiscoveryError};
use crate::routing::{RouteTable, SharedRouteTable};

/// Rescan the routes directory and publish the resulting table.
///
/// On failure the currently published table is left in place.
pub fn rebuild(
    config: &RegistryConfig,
    shared: &SharedRouteTable,
) -> Result<Arc<RouteTable>, DiscoveryError> {
    let (table, skipped) = discover(config)?.into_table();

    if !skipped.is_empty() || !table.rejected().is_empty() {
        tracing::warn!(
            skipped = skipped.len(),
            rejected = table.rejected().len(),
            "Route table built with exclusions"
        );
    }

    let table = Arc::new(table);
    shared.publish(table.clone());
    Ok(table)
}

/// A watcher that monitors the routes directory for changes.
pub struct RouteWatcher {
    config: RegistryConfig,
    shared: Arc<SharedRouteTable>,
    update_tx: mpsc::UnboundedSender<Arc<RouteTable>>,
}

impl RouteWatcher {
    /// Create a new RouteWatcher.
    ///
    /// Returns the watcher and a receiver that gets every table published
    /// after a change.
    pub fn new(
        config: RegistryConfig,
        shared: Arc<SharedRouteTable>,
    ) -> (Self, mpsc::UnboundedReceiver<Arc<RouteTable>>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                config,
                shared,
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self {
            config,
            shared,
            update_tx,
        } = self;
        let dir = config.discovery.routes_dir.clone();
        let poll_interval = Duration::from_secs(config.watch.poll_interval_secs);

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove() {
                        tracing::info!(paths = ?event.paths, "Route files changed, reloading...");
                        match rebuild(&config, &shared) {
                            Ok(table) => {
                                let _ = update_tx.send(table);
                            }
                            Err(e) => {
                                tracing::error!(
                                    "Failed to reload routes: {}. Keeping current table.",
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(poll_interval),
        )?;

        watcher.watch(Path::new(&dir), RecursiveMode::Recursive)?;

        tracing::info!(path = ?dir, "Route watcher started");
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_rebuild_publishes_new_table() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(
            dir.path().join("a.toml"),
            "[[route]]\npath = \"/a\"\nname = \"a\"\n",
        )
        .unwrap();

        let mut config = RegistryConfig::default();
        config.discovery.routes_dir = dir.path().to_path_buf();

        let shared = SharedRouteTable::default();
        let table = rebuild(&config, &shared).unwrap();

        assert_eq!(table.len(), 1);
        assert!(Arc::ptr_eq(&table, &shared.load()));
        assert_eq!(shared.load().at("/a").unwrap().route.name, "a");
    }

    #[test]
    fn test_failed_rebuild_keeps_current_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = RegistryConfig::default();
        config.discovery.routes_dir = dir.path().join("missing");

        let route = crate::routing::RouteDescriptor::builder("/keep", "keep")
            .build()
            .unwrap();
        let shared = SharedRouteTable::new(RouteTable::new([route]));

        assert!(rebuild(&config, &shared).is_err());
        assert_eq!(shared.load().len(), 1);
    }
}

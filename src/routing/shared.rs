//! Reloadable route table handle.
//!
//! Readers take an `Arc` snapshot and match against it; a reload builds a
//! complete new table and swaps it in at once. A match in flight keeps
//! using the snapshot it started with.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::RouteTable;

/// Shared, atomically replaceable [`RouteTable`].
#[derive(Debug)]
pub struct SharedRouteTable {
    current: ArcSwap<RouteTable>,
}

impl SharedRouteTable {
    pub fn new(table: RouteTable) -> Self {
        Self {
            current: ArcSwap::from_pointee(table),
        }
    }

    /// Snapshot of the table currently published.
    pub fn load(&self) -> Arc<RouteTable> {
        self.current.load_full()
    }

    /// Replace the whole table. Returns the previous one.
    pub fn publish(&self, table: impl Into<Arc<RouteTable>>) -> Arc<RouteTable> {
        let table = table.into();
        tracing::info!(routes = table.len(), "Publishing route table");
        self.current.swap(table)
    }
}

impl Default for SharedRouteTable {
    fn default() -> Self {
        Self::new(RouteTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteDescriptor;

    #[test]
    fn test_snapshot_survives_publish() {
        let shared = SharedRouteTable::default();
        let before = shared.load();

        let route = RouteDescriptor::builder("/health", "health").build().unwrap();
        let previous = shared.publish(RouteTable::new([route]));

        assert!(before.at("/health").is_err());
        assert!(previous.is_empty());
        assert_eq!(shared.load().at("/health").unwrap().route.name, "health");
    }

    #[test]
    fn test_publish_shared_arc() {
        let shared = SharedRouteTable::default();
        let table = Arc::new(RouteTable::default());

        shared.publish(table.clone());
        assert!(Arc::ptr_eq(&shared.load(), &table));
    }
}

//! Composition of raw snapshot sources
//!
//! Ordering is the sole precedence mechanism in the whole configuration
//! system: sub-sources are consulted in list order and the first non-null
//! answer wins. Callers control precedence entirely by how they assemble
//! the composite.

use super::{RawSnapshot, RawSnapshotSource};

/// An ordered aggregation of sources; index 0 has the highest priority.
pub struct CompositeRawSnapshotSource {
    sub_sources: Vec<Box<dyn RawSnapshotSource>>,
}

impl CompositeRawSnapshotSource {
    pub fn new(sub_sources: Vec<Box<dyn RawSnapshotSource>>) -> Self {
        Self { sub_sources }
    }
}

impl RawSnapshotSource for CompositeRawSnapshotSource {
    /// Build one sub-snapshot per sub-source eagerly and wrap them, so the
    /// composite snapshot is itself a consistent point-in-time view.
    fn current_snapshot(&self, option_names: &[&str]) -> Box<dyn RawSnapshot> {
        let sub_snapshots = self
            .sub_sources
            .iter()
            .map(|source| source.current_snapshot(option_names))
            .collect();
        Box::new(CompositeRawSnapshot { sub_snapshots })
    }
}

/// Snapshot querying its sub-snapshots in priority order.
pub struct CompositeRawSnapshot {
    sub_snapshots: Vec<Box<dyn RawSnapshot>>,
}

impl CompositeRawSnapshot {
    pub fn new(sub_snapshots: Vec<Box<dyn RawSnapshot>>) -> Self {
        Self { sub_snapshots }
    }
}

impl RawSnapshot for CompositeRawSnapshot {
    fn value_for(&self, option_name: &str) -> Option<&str> {
        self.sub_snapshots
            .iter()
            .find_map(|snapshot| snapshot.value_for(option_name))
    }
}

//! Observers notified after every accepted change

use report_model::{to_snapshot, ReportDocument};
use tracing::{debug, warn};

use crate::store::SnapshotStore;

pub trait SnapshotObserver {
    fn notify(&self, doc: &ReportDocument);
}

/// Writes the full snapshot to a store on every change
///
/// Writes are best-effort: failures are logged and dropped, the in-memory
/// document stays authoritative.
pub struct PersistObserver<S> {
    store: S,
    key: String,
}

impl<S: SnapshotStore> PersistObserver<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: SnapshotStore> SnapshotObserver for PersistObserver<S> {
    fn notify(&self, doc: &ReportDocument) {
        let json = match to_snapshot(doc) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to serialize snapshot");
                return;
            }
        };
        match self.store.save(&self.key, &json) {
            Ok(()) => debug!(key = %self.key, bytes = json.len(), "Snapshot saved"),
            Err(e) => warn!(key = %self.key, error = %e, "Failed to save snapshot"),
        }
    }
}

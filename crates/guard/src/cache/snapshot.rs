//! Snapshot cache for participant data.
//!
//! Holds the participant snapshots taken before an update, keyed by event ID.
//! The cache is shared through `Arc<RwLock<_>>` so that a host can scope one
//! instance per request or share a single instance across requests.
//!
//! Sharing one instance across concurrent requests is allowed but not
//! isolated: a restore clears every entry, including those captured by a
//! request that has not restored yet.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use participant_guard_core::calendar::{EventId, ParticipantSnapshot};

/// In-memory store of participant snapshots.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCache {
    snapshots: Arc<RwLock<HashMap<EventId, ParticipantSnapshot>>>,
}

impl SnapshotCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a snapshot, replacing any earlier one for the same event.
    pub async fn insert(&self, snapshot: ParticipantSnapshot) {
        let mut snapshots = self.snapshots.write().await;
        snapshots.insert(snapshot.event_id, snapshot);
    }

    /// Returns a copy of the snapshot stored for `event_id`.
    pub async fn get(&self, event_id: EventId) -> Option<ParticipantSnapshot> {
        let snapshots = self.snapshots.read().await;
        snapshots.get(&event_id).cloned()
    }

    /// Returns copies of the snapshots stored for the given events, in input order.
    ///
    /// IDs without a snapshot are skipped.
    pub async fn matching(&self, event_ids: &[EventId]) -> Vec<ParticipantSnapshot> {
        let snapshots = self.snapshots.read().await;
        event_ids
            .iter()
            .filter_map(|id| snapshots.get(id).cloned())
            .collect()
    }

    pub async fn is_empty(&self) -> bool {
        self.snapshots.read().await.is_empty()
    }

    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }

    /// Removes every snapshot.
    pub async fn clear(&self) {
        self.snapshots.write().await.clear();
    }
}

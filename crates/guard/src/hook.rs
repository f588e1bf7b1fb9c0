//! Participant preservation hook.
//!
//! Runs when an update action fires on calendar events. For every targeted
//! event it snapshots the participant data, then writes the participant
//! counter back through the host's action executor and empties the cache.
//!
//! Only `participant_count` is written back. The participant list and the
//! responses are kept in the snapshot for inspection but never restored.

use std::sync::Arc;

use async_trait::async_trait;

use participant_guard_core::action::{
    ActionContext, ActionListener, ActionParameters, EventAction, EventUpdateData,
};
use participant_guard_core::calendar::{CalendarEvent, EventId, ParticipantSnapshot};
use participant_guard_core::storage::{EventActionExecutor, EventRepository, Result};

use crate::cache::SnapshotCache;

/// Listener that keeps participant counters intact across event updates.
///
/// # Type Parameters
///
/// * `R` - Event lookup used to load the events being updated
/// * `E` - Action executor used to write the counter back
pub struct ParticipantPreservationHook<R, E>
where
    R: EventRepository,
    E: EventActionExecutor,
{
    repository: Arc<R>,
    executor: Arc<E>,
    cache: SnapshotCache,
}

impl<R, E> Clone for ParticipantPreservationHook<R, E>
where
    R: EventRepository,
    E: EventActionExecutor,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            executor: Arc::clone(&self.executor),
            cache: self.cache.clone(),
        }
    }
}

impl<R, E> ParticipantPreservationHook<R, E>
where
    R: EventRepository,
    E: EventActionExecutor,
{
    /// Creates a hook with its own empty snapshot cache.
    pub fn new(repository: Arc<R>, executor: Arc<E>) -> Self {
        Self::with_cache(repository, executor, SnapshotCache::new())
    }

    /// Creates a hook that stores snapshots in `cache`.
    ///
    /// Hosts that serve concurrent requests should hand each request its own
    /// cache; see [`SnapshotCache`].
    pub fn with_cache(repository: Arc<R>, executor: Arc<E>, cache: SnapshotCache) -> Self {
        Self {
            repository,
            executor,
            cache,
        }
    }

    /// Snapshots the participants of each event.
    ///
    /// Missing events and events without participants are skipped. A failed
    /// lookup is logged and does not stop the batch. Returns the number of
    /// snapshots stored.
    pub async fn capture(&self, event_ids: &[EventId]) -> usize {
        let mut captured = 0;

        for &event_id in event_ids {
            let event = match self.load_event(event_id).await {
                Ok(Some(event)) => event,
                Ok(None) => {
                    tracing::debug!(event_id = %event_id, "Skipping capture of missing event");
                    continue;
                }
                Err(e) => {
                    tracing::error!(
                        event_id = %event_id,
                        error = %e,
                        "Failed to capture participants"
                    );
                    continue;
                }
            };

            if let Some(snapshot) = ParticipantSnapshot::capture(&event) {
                self.cache.insert(snapshot).await;
                captured += 1;
            }
        }

        tracing::debug!(requested = event_ids.len(), captured, "Captured participant snapshots");
        captured
    }

    /// Writes cached participant counters back to the given events.
    ///
    /// Every event in `event_ids` with a snapshot gets one update action.
    /// Afterwards the whole cache is cleared, including snapshots of events
    /// outside this batch. Returns the number of events a write-back was
    /// attempted for.
    pub async fn restore(&self, event_ids: &[EventId]) -> usize {
        if self.cache.is_empty().await {
            return 0;
        }

        let snapshots = self.cache.matching(event_ids).await;
        for snapshot in &snapshots {
            self.apply_participants_to_event(snapshot.event_id, snapshot).await;
        }

        let discarded = self.cache.len().await.saturating_sub(snapshots.len());
        self.cache.clear().await;

        tracing::debug!(restored = snapshots.len(), discarded, "Restored participant snapshots");
        snapshots.len()
    }

    /// Runs an update on `event_id` that sets only the cached participant counter.
    ///
    /// Missing events are skipped; failures are logged and swallowed.
    pub async fn apply_participants_to_event(
        &self,
        event_id: EventId,
        snapshot: &ParticipantSnapshot,
    ) {
        let event = match self.load_event(event_id).await {
            Ok(Some(event)) => event,
            Ok(None) => {
                tracing::debug!(event_id = %event_id, "Skipping restore of missing event");
                return;
            }
            Err(e) => {
                tracing::error!(
                    event_id = %event_id,
                    error = %e,
                    "Failed to load event for restore"
                );
                return;
            }
        };

        let action = EventAction::update(
            vec![event.id],
            EventUpdateData::participant_count(snapshot.restored_count()),
        );

        if let Err(e) = self.executor.execute_action(&action).await {
            tracing::error!(event_id = %event_id, error = %e, "Failed to restore participants");
        }
    }

    /// Returns the snapshot currently cached for `event_id`.
    pub async fn stored_participants(&self, event_id: EventId) -> Option<ParticipantSnapshot> {
        self.cache.get(event_id).await
    }

    /// Empties the snapshot cache.
    pub async fn clear_stored_participants(&self) {
        self.cache.clear().await;
    }

    /// Looks up an event, treating sentinel rows as missing.
    async fn load_event(&self, event_id: EventId) -> Result<Option<CalendarEvent>> {
        let event = self.repository.get_event(event_id).await?;
        Ok(event.filter(|e| e.id.is_valid()))
    }
}

#[async_trait]
impl<R, E> ActionListener for ParticipantPreservationHook<R, E>
where
    R: EventRepository + 'static,
    E: EventActionExecutor + 'static,
{
    async fn execute(&self, context: &ActionContext, _parameters: &mut ActionParameters) {
        if !context.is_calendar_event_update() {
            return;
        }

        self.capture(&context.object_ids).await;
        self.restore(&context.object_ids).await;
    }
}

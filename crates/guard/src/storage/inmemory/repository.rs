//! In-memory event store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use participant_guard_core::action::{ActionName, EventAction, EventUpdateData};
use participant_guard_core::calendar::{CalendarEvent, EventId};
use participant_guard_core::storage::{
    EntityOperationError, EventActionExecutor, EventRepository, Result,
};

/// In-memory storage backend for calendar events.
///
/// Acts as both the event lookup and the action executor. Data is not
/// persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    events: Arc<RwLock<HashMap<EventId, CalendarEvent>>>,
}

impl InMemoryEventStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an event.
    pub async fn insert_event(&self, event: CalendarEvent) {
        let mut events = self.events.write().await;
        events.insert(event.id, event);
    }
}

fn apply_update(event: &mut CalendarEvent, data: &EventUpdateData) {
    if let Some(title) = &data.title {
        event.title = title.clone();
    }
    if let Some(description) = &data.description {
        event.description = Some(description.clone());
    }
    if let Some(count) = data.participant_count {
        event.participant_count = Some(count);
    }
}

#[async_trait]
impl EventRepository for InMemoryEventStore {
    async fn get_event(&self, id: EventId) -> Result<Option<CalendarEvent>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }
}

#[async_trait]
impl EventActionExecutor for InMemoryEventStore {
    async fn execute_action(&self, action: &EventAction) -> Result<()> {
        let mut events = self.events.write().await;

        // Nothing is written unless every target exists.
        if let Some(missing) = action.event_ids.iter().find(|id| !events.contains_key(*id)) {
            return Err(EntityOperationError::NotFound(*missing));
        }

        match &action.name {
            ActionName::Update => {
                for id in &action.event_ids {
                    if let Some(event) = events.get_mut(id) {
                        apply_update(event, &action.data);
                    }
                }
            }
            ActionName::Delete => {
                for id in &action.event_ids {
                    events.remove(id);
                }
            }
            other => return Err(EntityOperationError::UnsupportedAction(other.to_string())),
        }

        tracing::trace!(action = %action.name, events = action.event_ids.len(), "Executed action");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use participant_guard_core::calendar::{Participant, ResponseStatus};

    use super::*;

    fn event(id: u64) -> CalendarEvent {
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 15, 11, 0, 0).unwrap();
        CalendarEvent::new(id, "Standup", start, end)
            .with_participant(Participant::new(1, "ada"), ResponseStatus::Attending)
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryEventStore::new();
        store.insert_event(event(1)).await;

        let retrieved = store.get_event(EventId(1)).await.unwrap();
        assert_eq!(retrieved, Some(event(1)));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let store = InMemoryEventStore::new();
        let result = store.get_event(EventId(2)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_only_touches_set_fields() {
        let store = InMemoryEventStore::new();
        store.insert_event(event(1).with_description("Daily")).await;

        let data = EventUpdateData {
            title: Some("Renamed".to_string()),
            ..EventUpdateData::default()
        };
        store
            .execute_action(&EventAction::update(vec![EventId(1)], data))
            .await
            .unwrap();

        let updated = store.get_event(EventId(1)).await.unwrap().unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, Some("Daily".to_string()));
        assert_eq!(updated.participant_count, Some(1));
    }

    #[tokio::test]
    async fn test_update_participant_count() {
        let store = InMemoryEventStore::new();
        store.insert_event(event(1)).await;

        store
            .execute_action(&EventAction::update(
                vec![EventId(1)],
                EventUpdateData::participant_count(0),
            ))
            .await
            .unwrap();

        let updated = store.get_event(EventId(1)).await.unwrap().unwrap();
        assert_eq!(updated.participant_count, Some(0));
        assert_eq!(updated.participants.len(), 1);
    }

    #[tokio::test]
    async fn test_update_with_missing_target_writes_nothing() {
        let store = InMemoryEventStore::new();
        store.insert_event(event(1)).await;

        let result = store
            .execute_action(&EventAction::update(
                vec![EventId(1), EventId(9)],
                EventUpdateData::participant_count(7),
            ))
            .await;

        assert_eq!(result, Err(EntityOperationError::NotFound(EventId(9))));
        let untouched = store.get_event(EventId(1)).await.unwrap().unwrap();
        assert_eq!(untouched.participant_count, Some(1));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryEventStore::new();
        store.insert_event(event(1)).await;

        let action = EventAction {
            name: ActionName::Delete,
            event_ids: vec![EventId(1)],
            data: EventUpdateData::default(),
        };
        store.execute_action(&action).await.unwrap();

        assert!(store.get_event(EventId(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_is_unsupported() {
        let store = InMemoryEventStore::new();

        let action = EventAction {
            name: ActionName::Create,
            event_ids: Vec::new(),
            data: EventUpdateData::default(),
        };
        let result = store.execute_action(&action).await;

        assert!(matches!(
            result,
            Err(EntityOperationError::UnsupportedAction(name)) if name == "create"
        ));
    }
}

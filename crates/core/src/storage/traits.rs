use async_trait::async_trait;

use crate::action::EventAction;
use crate::calendar::{CalendarEvent, EventId};

use super::Result;

/// Loads calendar events by id.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its ID.
    ///
    /// `Ok(None)` means the event does not exist. Implementations backed by a
    /// host that returns sentinel rows may also return an event whose id is
    /// not valid.
    async fn get_event(&self, id: EventId) -> Result<Option<CalendarEvent>>;
}

/// Runs actions against calendar events.
#[async_trait]
pub trait EventActionExecutor: Send + Sync {
    /// Executes the action on every event it targets.
    async fn execute_action(&self, action: &EventAction) -> Result<()>;
}

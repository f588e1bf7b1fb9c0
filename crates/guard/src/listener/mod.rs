mod dispatcher;
mod registry;

use std::sync::Arc;

use participant_guard_core::action::{ActionName, ActionType, LifecyclePoint};
use participant_guard_core::storage::{EventActionExecutor, EventRepository};

use crate::config::Config;
use crate::hook::ParticipantPreservationHook;

pub use dispatcher::ActionDispatcher;
pub use registry::{ListenerKey, ListenerRegistry};

/// Registers the participant hook for updates on calendar events.
///
/// The hook runs before the update executes, so the participant counter is
/// written back ahead of the update itself. An update whose payload sets
/// `participantCount` therefore overwrites the preserved value.
///
/// Returns false, registering nothing, when the hook is disabled in `config`.
pub fn register_participant_guard<R, E>(
    registry: &mut ListenerRegistry,
    hook: ParticipantPreservationHook<R, E>,
    config: &Config,
) -> bool
where
    R: EventRepository + 'static,
    E: EventActionExecutor + 'static,
{
    if !config.enabled {
        tracing::info!("Participant guard disabled, hook not registered");
        return false;
    }

    let key = ListenerKey::new(
        ActionType::CalendarEvent,
        ActionName::Update,
        LifecyclePoint::BeforeExecute,
    );
    registry.register(key, Arc::new(hook));
    tracing::info!("Registered participant guard for calendar event updates");
    true
}

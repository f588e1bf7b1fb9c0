//! Runs host actions with their registered listeners.

use std::sync::Arc;

use participant_guard_core::action::{
    ActionContext, ActionName, ActionParameters, ActionType, EventAction, EventUpdateData,
    LifecyclePoint,
};
use participant_guard_core::calendar::EventId;
use participant_guard_core::storage::{EntityOperationError, EventActionExecutor, Result};

use super::registry::ListenerRegistry;

/// Executes calendar event actions, firing listeners around the execution.
///
/// Listeners run before and after the executor. The update payload is read
/// from the `data` key of the parameter bag once the `BeforeExecute`
/// listeners have had a chance to modify it.
pub struct ActionDispatcher<E>
where
    E: EventActionExecutor,
{
    registry: Arc<ListenerRegistry>,
    executor: Arc<E>,
}

impl<E> ActionDispatcher<E>
where
    E: EventActionExecutor,
{
    pub fn new(registry: Arc<ListenerRegistry>, executor: Arc<E>) -> Self {
        Self { registry, executor }
    }

    /// Runs `action_name` from the host class `class_name` on `object_ids`.
    ///
    /// Returns the parameter bag as left by the listeners.
    pub async fn run(
        &self,
        class_name: &str,
        action_name: &str,
        object_ids: Vec<EventId>,
        mut parameters: ActionParameters,
    ) -> Result<ActionParameters> {
        let action_type = ActionType::from_class_name(class_name);
        if !action_type.is_calendar_event() {
            return Err(EntityOperationError::UnsupportedAction(format!(
                "{class_name}::{action_name}"
            )));
        }

        let context = ActionContext::new(action_type, ActionName::from(action_name), object_ids);

        self.registry
            .dispatch(LifecyclePoint::BeforeExecute, &context, &mut parameters)
            .await;

        let action = EventAction {
            name: context.action_name.clone(),
            event_ids: context.object_ids.clone(),
            data: EventUpdateData::from_parameters(&parameters)?,
        };
        self.executor.execute_action(&action).await?;

        self.registry
            .dispatch(LifecyclePoint::AfterExecute, &context, &mut parameters)
            .await;

        Ok(parameters)
    }
}

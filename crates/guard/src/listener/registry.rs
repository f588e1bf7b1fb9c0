//! Listener registry keyed by action type, action name and lifecycle point.

use std::collections::HashMap;
use std::sync::Arc;

use participant_guard_core::action::{
    ActionContext, ActionListener, ActionName, ActionParameters, ActionType, LifecyclePoint,
};

/// Identifies when a listener runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListenerKey {
    pub action_type: ActionType,
    pub action_name: ActionName,
    pub point: LifecyclePoint,
}

impl ListenerKey {
    pub fn new(action_type: ActionType, action_name: ActionName, point: LifecyclePoint) -> Self {
        Self {
            action_type,
            action_name,
            point,
        }
    }
}

/// Listeners registered by the host, invoked in registration order.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: HashMap<ListenerKey, Vec<Arc<dyn ActionListener>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener for `key`.
    pub fn register(&mut self, key: ListenerKey, listener: Arc<dyn ActionListener>) {
        self.listeners.entry(key).or_default().push(listener);
    }

    /// Number of listeners registered for `key`.
    pub fn listener_count(&self, key: &ListenerKey) -> usize {
        self.listeners.get(key).map_or(0, Vec::len)
    }

    /// Runs every listener registered for the context's action at `point`.
    ///
    /// Each listener is awaited before the next one starts. Returns the
    /// number of listeners invoked.
    pub async fn dispatch(
        &self,
        point: LifecyclePoint,
        context: &ActionContext,
        parameters: &mut ActionParameters,
    ) -> usize {
        let key = ListenerKey::new(
            context.action_type.clone(),
            context.action_name.clone(),
            point,
        );
        let Some(listeners) = self.listeners.get(&key) else {
            return 0;
        };

        for listener in listeners {
            listener.execute(context, parameters).await;
        }

        tracing::trace!(
            action = %context.action_name,
            ?point,
            listeners = listeners.len(),
            "Dispatched listeners"
        );
        listeners.len()
    }
}

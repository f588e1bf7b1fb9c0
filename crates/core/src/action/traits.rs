use async_trait::async_trait;

use super::types::{ActionContext, ActionParameters};

/// A component run by the host at a lifecycle point of an action.
///
/// Listeners are awaited to completion before the action continues. They do
/// not return errors: whatever fails inside a listener is its own concern.
#[async_trait]
pub trait ActionListener: Send + Sync {
    async fn execute(&self, context: &ActionContext, parameters: &mut ActionParameters);
}

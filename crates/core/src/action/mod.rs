mod traits;
mod types;

pub use traits::ActionListener;
pub use types::{
    ActionContext, ActionName, ActionParameters, ActionType, EventAction, EventUpdateData,
    LifecyclePoint, CALENDAR_EVENT_ACTION_CLASS,
};

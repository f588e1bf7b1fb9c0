use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::calendar::EventId;
use crate::storage::{EntityOperationError, Result};

/// Host class name of the calendar event action.
pub const CALENDAR_EVENT_ACTION_CLASS: &str = "CalendarEventAction";

/// Mutable parameter bag handed to listeners alongside an action.
pub type ActionParameters = Map<String, Value>;

/// The kind of object an action operates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionType {
    CalendarEvent,
    Other(String),
}

impl ActionType {
    /// Resolves a host class name into an action type.
    ///
    /// Namespaced names (`wcf\data\calendar\event\CalendarEventAction`,
    /// `calendar::CalendarEventAction`) are matched on their last segment.
    pub fn from_class_name(class_name: &str) -> Self {
        let short = class_name.rsplit(['\\', ':']).next().unwrap_or(class_name);

        if short == CALENDAR_EVENT_ACTION_CLASS {
            ActionType::CalendarEvent
        } else {
            ActionType::Other(class_name.to_string())
        }
    }

    pub fn is_calendar_event(&self) -> bool {
        matches!(self, ActionType::CalendarEvent)
    }
}

/// The operation an action performs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionName {
    Create,
    Update,
    Delete,
    Other(String),
}

impl ActionName {
    pub fn as_str(&self) -> &str {
        match self {
            ActionName::Create => "create",
            ActionName::Update => "update",
            ActionName::Delete => "delete",
            ActionName::Other(name) => name,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, ActionName::Update)
    }
}

impl From<&str> for ActionName {
    fn from(name: &str) -> Self {
        match name {
            "create" => ActionName::Create,
            "update" => ActionName::Update,
            "delete" => ActionName::Delete,
            other => ActionName::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point in an action's execution at which listeners run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePoint {
    BeforeExecute,
    AfterExecute,
}

/// What a listener is told about the action that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    pub action_type: ActionType,
    pub action_name: ActionName,
    pub object_ids: Vec<EventId>,
}

impl ActionContext {
    pub fn new(action_type: ActionType, action_name: ActionName, object_ids: Vec<EventId>) -> Self {
        Self {
            action_type,
            action_name,
            object_ids,
        }
    }

    /// Returns true for an update on calendar events.
    pub fn is_calendar_event_update(&self) -> bool {
        self.action_type.is_calendar_event() && self.action_name.is_update()
    }
}

/// Fields an update action writes. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdateData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_count: Option<u32>,
}

impl EventUpdateData {
    /// Payload that only sets the participant counter.
    pub fn participant_count(count: u32) -> Self {
        Self {
            participant_count: Some(count),
            ..Self::default()
        }
    }

    /// Reads the payload stored under the `data` key of a parameter bag.
    ///
    /// A bag without `data` yields an empty payload.
    pub fn from_parameters(parameters: &ActionParameters) -> Result<Self> {
        match parameters.get("data") {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| EntityOperationError::InvalidPayload(e.to_string())),
            None => Ok(Self::default()),
        }
    }

    /// Stores this payload under the `data` key of a parameter bag.
    pub fn into_parameters(self) -> Result<ActionParameters> {
        let value = serde_json::to_value(self)
            .map_err(|e| EntityOperationError::InvalidPayload(e.to_string()))?;
        let mut parameters = ActionParameters::new();
        parameters.insert("data".to_string(), value);
        Ok(parameters)
    }
}

/// A command submitted to the host's action executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventAction {
    pub name: ActionName,
    pub event_ids: Vec<EventId>,
    pub data: EventUpdateData,
}

impl EventAction {
    /// An update on the given events.
    pub fn update(event_ids: Vec<EventId>, data: EventUpdateData) -> Self {
        Self {
            name: ActionName::Update,
            event_ids,
            data,
        }
    }
}

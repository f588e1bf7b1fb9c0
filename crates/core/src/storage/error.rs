use thiserror::Error;

use crate::calendar::EventId;

/// Errors raised by the host's entity lookup and action execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityOperationError {
    #[error("CalendarEvent not found: {0}")]
    NotFound(EventId),
    #[error("Lookup of event {id} failed: {reason}")]
    LookupFailed { id: EventId, reason: String },
    #[error("Action '{action}' failed: {reason}")]
    ActionFailed { action: String, reason: String },
    #[error("Unsupported action: {0}")]
    UnsupportedAction(String),
    #[error("Invalid action payload: {0}")]
    InvalidPayload(String),
}

/// Result type for entity operations.
pub type Result<T> = std::result::Result<T, EntityOperationError>;

mod snapshot;
mod types;

pub use snapshot::ParticipantSnapshot;
pub use types::{CalendarEvent, EventId, Participant, ResponseStatus};

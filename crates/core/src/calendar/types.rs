use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a calendar event.
///
/// The host uses `0` as the "no such row" sentinel, so a lookup can hand back
/// an event whose id is zero instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl EventId {
    /// The sentinel id carried by an empty lookup result.
    pub const NONE: EventId = EventId(0);

    /// Returns true unless this is the sentinel id.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user taking part in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: u64,
    pub name: String,
}

impl Participant {
    pub fn new(user_id: u64, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
        }
    }
}

/// A participant's answer to an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    #[default]
    Pending,
    Attending,
    Maybe,
    Declined,
}

/// A calendar event as loaded from the host's storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    /// Denormalized counter column. Nullable in the host schema.
    pub participant_count: Option<u32>,
    pub participants: Vec<Participant>,
    /// Responses keyed by participant user id.
    pub responses: BTreeMap<u64, ResponseStatus>,
}

impl CalendarEvent {
    /// Creates an event without participants.
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            starts_at,
            ends_at,
            participant_count: None,
            participants: Vec::new(),
            responses: BTreeMap::new(),
        }
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a participant with the given response and bumps the counter.
    pub fn with_participant(mut self, participant: Participant, status: ResponseStatus) -> Self {
        self.responses.insert(participant.user_id, status);
        self.participants.push(participant);
        self.participant_count = Some(counter_value(self.participants.len()));
        self
    }

    /// Overrides the stored participant counter.
    pub fn with_participant_count(mut self, count: Option<u32>) -> Self {
        self.participant_count = count;
        self
    }

    /// Returns true if the event has at least one participant.
    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }
}

/// Converts a participant list length into the counter column, saturating at `u32::MAX`.
fn counter_value(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

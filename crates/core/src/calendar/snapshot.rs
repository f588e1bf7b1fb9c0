use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{CalendarEvent, EventId, Participant, ResponseStatus};

/// Participant state of one event, captured before an update runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSnapshot {
    pub event_id: EventId,
    pub participant_count: Option<u32>,
    pub participants: Vec<Participant>,
    pub responses: BTreeMap<u64, ResponseStatus>,
}

impl ParticipantSnapshot {
    /// Captures the participant fields of `event`.
    ///
    /// Returns `None` when the event has no participants: there is nothing to
    /// preserve for it.
    pub fn capture(event: &CalendarEvent) -> Option<Self> {
        if !event.has_participants() {
            return None;
        }

        Some(Self {
            event_id: event.id,
            participant_count: event.participant_count,
            participants: event.participants.clone(),
            responses: event.responses.clone(),
        })
    }

    /// The counter value written back on restore. A missing counter restores as zero.
    pub fn restored_count(&self) -> u32 {
        self.participant_count.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn event(id: u64) -> CalendarEvent {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap();
        CalendarEvent::new(id, "Board games", start, end)
    }

    #[test]
    fn test_capture_copies_participant_fields() {
        let source = event(5)
            .with_participant(Participant::new(1, "p1"), ResponseStatus::Attending)
            .with_participant(Participant::new(2, "p2"), ResponseStatus::Declined)
            .with_participant(Participant::new(3, "p3"), ResponseStatus::Pending);

        let snapshot = ParticipantSnapshot::capture(&source).unwrap();

        assert_eq!(snapshot.event_id, EventId(5));
        assert_eq!(snapshot.participant_count, Some(3));
        assert_eq!(snapshot.participants, source.participants);
        assert_eq!(snapshot.responses, source.responses);
    }

    #[test]
    fn test_capture_skips_events_without_participants() {
        assert!(ParticipantSnapshot::capture(&event(6)).is_none());
    }

    #[test]
    fn test_restored_count_defaults_to_zero() {
        let source = event(8)
            .with_participant(Participant::new(1, "p1"), ResponseStatus::Maybe)
            .with_participant_count(None);

        let snapshot = ParticipantSnapshot::capture(&source).unwrap();

        assert_eq!(snapshot.participant_count, None);
        assert_eq!(snapshot.restored_count(), 0);
    }
}

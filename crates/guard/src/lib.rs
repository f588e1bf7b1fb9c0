//! Participant preservation for calendar event updates.
//!
//! The [`ParticipantPreservationHook`] listens for update actions on calendar
//! events, snapshots each event's participants, and writes the participant
//! counter back through the host's action executor.

pub mod cache;
pub mod config;
pub mod hook;
pub mod listener;
pub mod storage;
pub mod telemetry;

pub use cache::SnapshotCache;
pub use config::Config;
pub use hook::ParticipantPreservationHook;
pub use listener::{register_participant_guard, ActionDispatcher, ListenerKey, ListenerRegistry};
pub use storage::InMemoryEventStore;

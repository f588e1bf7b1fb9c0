//! Pure domain types for participant_guard.
//!
//! Holds the calendar event model, participant snapshots, action descriptors
//! and the collaborator traits the hook talks to. Nothing here performs I/O.

pub mod action;
pub mod calendar;
pub mod storage;

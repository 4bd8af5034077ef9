//! This module aggregates the voice-time tracking utilities.

/// Time source used by the tracker and the stats command.
pub mod clock;
/// SQLite persistence for voice activity.
pub mod database;
/// Join/leave detection and session accounting.
pub mod voice_tracker;

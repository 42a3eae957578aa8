//! Observable events in rosterdb
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,
    /// Sample records inserted
    StoreSeeded,

    // Store mutations
    /// Record inserted
    RecordAdded,
    /// Insert refused, id already present
    RecordRejected,
    /// Record removed
    RecordRemoved,
    /// Record swapped for a new version under the same id
    RecordReplaced,
    /// Single field changed
    FieldUpdated,
    /// Field update refused, nothing changed
    UpdateRejected,
    /// Salary raise applied
    RaiseApplied,
    /// All records removed
    StoreCleared,

    // Commands
    /// Command received
    CommandBegin,
    /// Command finished
    CommandComplete,
    /// Command failed
    CommandFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",

            Event::RecordAdded => "RECORD_ADDED",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::RecordRemoved => "RECORD_REMOVED",
            Event::RecordReplaced => "RECORD_REPLACED",
            Event::FieldUpdated => "FIELD_UPDATED",
            Event::UpdateRejected => "UPDATE_REJECTED",
            Event::RaiseApplied => "RAISE_APPLIED",
            Event::StoreCleared => "STORE_CLEARED",

            Event::CommandBegin => "COMMAND_BEGIN",
            Event::CommandComplete => "COMMAND_COMPLETE",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Severity an event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RecordAdded | Event::RecordRemoved | Event::FieldUpdated => Severity::Trace,
            Event::RecordRejected | Event::UpdateRejected => Severity::Warn,
            Event::CommandFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Observability subsystem for rosterdb
//!
//! This module provides:
//! - Structured logging (JSON lines on stderr)
//! - Typed store and command events
//! - Command scopes with elapsed time
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on store behaviour
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use rosterdb::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Info);
//! log_event_with_fields(Event::RaiseApplied, &[("affected", "2")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::CommandScope;

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event at its own severity, with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

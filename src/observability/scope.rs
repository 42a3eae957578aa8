//! Scope logging for a single command
//!
//! - Logs COMMAND_BEGIN on creation
//! - Logs COMMAND_COMPLETE with elapsed time on `complete()`
//! - Logs COMMAND_FAILED on `fail()`
//! - Logs COMMAND_INCOMPLETE on drop if neither was called

use std::cell::Cell;
use std::time::Instant;

use super::events::Event;
use super::logger::Logger;
use super::log_event_with_fields;

/// Logs the lifecycle of one command
pub struct CommandScope<'a> {
    command: &'a str,
    started: Instant,
    finished: Cell<bool>,
}

impl<'a> CommandScope<'a> {
    /// Opens a scope, logging COMMAND_BEGIN
    pub fn new(command: &'a str) -> Self {
        log_event_with_fields(Event::CommandBegin, &[("command", command)]);
        Self {
            command,
            started: Instant::now(),
            finished: Cell::new(false),
        }
    }

    /// Milliseconds since the scope opened
    pub fn elapsed_ms(&self) -> String {
        self.started.elapsed().as_millis().to_string()
    }

    /// Closes the scope successfully
    pub fn complete(self) {
        self.finished.set(true);
        let elapsed = self.elapsed_ms();
        log_event_with_fields(
            Event::CommandComplete,
            &[("command", self.command), ("elapsed_ms", &elapsed)],
        );
    }

    /// Closes the scope with a failure reason
    pub fn fail(self, reason: &str) {
        self.finished.set(true);
        log_event_with_fields(
            Event::CommandFailed,
            &[("command", self.command), ("reason", reason)],
        );
    }

    /// Returns true once `complete` or `fail` ran
    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }
}

impl Drop for CommandScope<'_> {
    fn drop(&mut self) {
        if !self.finished.get() {
            Logger::warn(
                "COMMAND_INCOMPLETE",
                &[("command", self.command), ("reason", "scope dropped without completion")],
            );
        }
    }
}

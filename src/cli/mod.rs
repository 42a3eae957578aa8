//! CLI module for rosterdb
//!
//! Provides command-line access to an in-process store:
//! - list, get, top-paid, top-performers: read-only listings
//! - raise: bulk salary update, then the full listing
//! - report, departments: department aggregates
//! - session: JSON requests on stdin, one response per line

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod session;

pub use args::{Cli, Command};
pub use commands::{execute, open_store, run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_response, ok_response, read_lines, write_error, write_response, write_value};
pub use session::{build_view, RecordInput, Session, SessionRequest};

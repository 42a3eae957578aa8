//! CLI command implementations
//!
//! Every command follows the same sequence:
//! 1. Load configuration (defaults when no file is given)
//! 2. Apply the configured log level
//! 3. Build the store, seeding sample data if configured
//! 4. Execute the command and print one JSON response
//!
//! The store lives for one process; nothing is persisted.

use serde_json::{json, Value};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_lines, write_error, write_response, write_value};
use super::session::{build_view, Session};
use crate::observability::{log_event_with_fields, CommandScope, Event, Logger};
use crate::seed::seed_store;
use crate::store::EmployeeStore;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Run the command described by parsed arguments
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            Logger::set_min_severity(config.log_severity()?);
            log_event_with_fields(Event::ConfigLoaded, &[("path", &path.display().to_string())]);
            config
        }
        None => {
            let config = Config::default();
            Logger::set_min_severity(config.log_severity()?);
            config
        }
    };

    let mut store = open_store(&config);

    let scope = CommandScope::new(cli.command.name());
    let result = match cli.command {
        Command::Session => session(&mut store, &config),
        command => execute(command, &config, &mut store).and_then(write_response),
    };

    match &result {
        Ok(()) => scope.complete(),
        Err(e) => scope.fail(e.message()),
    }
    result
}

/// Builds the process store
pub fn open_store(config: &Config) -> EmployeeStore<u64> {
    let mut store = EmployeeStore::new();
    if config.seed_sample_data {
        seed_store(&mut store);
    }
    store
}

/// Executes a one-shot command and returns its response data
pub fn execute(command: Command, config: &Config, store: &mut EmployeeStore<u64>) -> CliResult<Value> {
    match command {
        Command::List {
            filter,
            search,
            sort,
            limit,
        } => {
            let query = build_view(config, Some(&filter), search, sort, limit)?;
            let records = store.view(&query);
            Ok(json!({ "count": records.len(), "employees": records }))
        }
        Command::Get { id } => Ok(serde_json::to_value(store.get(&id))?),
        Command::TopPaid { n } => {
            let n = n.unwrap_or(config.top_paid_count);
            Ok(json!({ "employees": store.top_n_by_salary(n) }))
        }
        Command::TopPerformers => {
            let records = store.list_by_min_rating(config.top_performer_rating);
            Ok(json!({
                "min_rating": config.top_performer_rating,
                "employees": records,
            }))
        }
        Command::Raise { min_rating, percent } => {
            let min_rating = min_rating.unwrap_or(config.raise_min_rating);
            let percent = percent.unwrap_or(config.raise_percentage);
            let affected = store.give_raise(min_rating, percent);
            Ok(json!({
                "affected": affected,
                "employees": store.list_all(),
            }))
        }
        Command::Report => Ok(serde_json::to_value(store.department_report())?),
        Command::Departments => Ok(serde_json::to_value(store.department_counts())?),
        Command::Session => Err(CliError::invalid_argument(
            "session reads requests from stdin and has no one-shot form",
        )),
    }
}

/// Serve JSON requests from stdin until EOF
fn session(store: &mut EmployeeStore<u64>, config: &Config) -> CliResult<()> {
    let mut session = Session::new(store, config);

    for line in read_lines() {
        match line {
            Ok(line) => write_value(&session.handle_line(&line))?,
            Err(e) => {
                // Reading stdin failed; nothing further can be served
                write_error(e.code_str(), e.message())?;
                return Err(e);
            }
        }
    }

    Ok(())
}

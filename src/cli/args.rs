//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterdb list [--filter F] [--search S] [--sort P] [--limit N]
//! - rosterdb get --id N
//! - rosterdb top-paid [--n N]
//! - rosterdb top-performers
//! - rosterdb raise [--min-rating R] [--percent P]
//! - rosterdb report
//! - rosterdb departments
//! - rosterdb session

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::ordering::OrderingPolicy;

/// rosterdb - A deterministic in-memory personnel record store
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List employees through a filter, a name search and a sort
    List {
        /// all, active, high-performers, min-rating:<r> or dept:<name>
        #[arg(long, default_value = "all")]
        filter: String,

        /// Case-insensitive name substring
        #[arg(long)]
        search: Option<String>,

        /// name, department, salary, performance or experience
        #[arg(long)]
        sort: Option<OrderingPolicy>,

        /// Maximum number of employees shown
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one employee
    Get {
        #[arg(long)]
        id: u64,
    },

    /// Highest paid employees
    TopPaid {
        /// How many to show (config `top_paid_count` when omitted)
        #[arg(long)]
        n: Option<usize>,
    },

    /// Employees rated at or above the top performer threshold
    TopPerformers,

    /// Give a raise to employees rated at or above a threshold
    Raise {
        #[arg(long)]
        min_rating: Option<f64>,

        #[arg(long)]
        percent: Option<f64>,
    },

    /// Employee count and average salary per department
    Report,

    /// Employee count per department
    Departments,

    /// Read JSON requests from stdin, one per line, until EOF
    Session,
}

impl Command {
    /// Command name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::List { .. } => "list",
            Command::Get { .. } => "get",
            Command::TopPaid { .. } => "top-paid",
            Command::TopPerformers => "top-performers",
            Command::Raise { .. } => "raise",
            Command::Report => "report",
            Command::Departments => "departments",
            Command::Session => "session",
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

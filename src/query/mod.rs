//! Query subsystem for rosterdb
//!
//! Builds listing views the way a form-based front end asks for them:
//! a filter preset, then a name search, then a sort, then a limit.
//! Views run over a borrowed traversal of the store and return owned
//! snapshots.

mod filters;
mod view;

pub use filters::{FilterPreset, ParseFilterError, HIGH_PERFORMER_RATING};
pub use view::ViewQuery;

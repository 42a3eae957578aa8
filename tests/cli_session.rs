//! CLI Session and Configuration Tests
//!
//! - Config files load, default and validate
//! - A session answers every request with one envelope
//! - Store outcomes surface as `ok` with a flag, malformed input as `error`

use std::fs;

use rosterdb::cli::{open_store, Config, Session};
use serde_json::Value;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("rosterdb.json");
    fs::write(&path, content).unwrap();
    path
}

fn run_lines(config: &Config, lines: &[&str]) -> Vec<Value> {
    let mut store = open_store(config);
    let mut session = Session::new(&mut store, config);
    lines.iter().map(|line| session.handle_line(line)).collect()
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_file_overrides() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, r#"{"seed_sample_data": false, "top_paid_count": 2}"#);

    let config = Config::load(&path).unwrap();
    assert!(!config.seed_sample_data);
    assert_eq!(config.top_paid_count, 2);
    assert_eq!(config.raise_percentage, 10.0);
    assert!(open_store(&config).is_empty());
}

#[test]
fn test_config_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = Config::load(&tmp.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code_str(), "ROSTER_CLI_CONFIG_ERROR");
}

#[test]
fn test_config_invalid_json() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "{ not json");
    assert!(Config::load(&path).is_err());
}

// =============================================================================
// Session
// =============================================================================

/// The form "save" flow: add without id, then edit by replace.
#[test]
fn test_add_then_replace() {
    let responses = run_lines(
        &Config::default(),
        &[
            r#"{"op":"add","record":{"name":"Nia Cole","department":"Ops","salary":52000,"performance_rating":3.9,"years_of_experience":1}}"#,
            r#"{"op":"replace","record":{"id":11,"name":"Nia Cole","department":"Ops","salary":56000,"performance_rating":4.0,"years_of_experience":2,"active":false}}"#,
            r#"{"op":"get","id":11}"#,
            r#"{"op":"next_id"}"#,
        ],
    );

    assert_eq!(responses[0]["data"]["id"], 11);
    assert_eq!(responses[1]["data"]["replaced"], true);
    assert_eq!(responses[2]["data"]["salary"], 56000.0);
    assert_eq!(responses[2]["data"]["active"], false);
    assert_eq!(responses[3]["data"]["next_id"], 12);
}

/// Duplicate and absent ids are `ok` responses with a false flag.
#[test]
fn test_no_effect_outcomes() {
    let responses = run_lines(
        &Config::default(),
        &[
            r#"{"op":"add","record":{"id":1,"name":"Dup","department":"Ops","salary":1,"performance_rating":1,"years_of_experience":1}}"#,
            r#"{"op":"remove","id":999}"#,
            r#"{"op":"get","id":999}"#,
            r#"{"op":"replace","record":{"id":999,"name":"X","department":"Ops","salary":1,"performance_rating":1,"years_of_experience":1}}"#,
        ],
    );

    for response in &responses {
        assert_eq!(response["status"], "ok");
    }
    assert_eq!(responses[0]["data"]["added"], false);
    assert_eq!(responses[1]["data"]["removed"], false);
    assert!(responses[2]["data"].is_null());
    assert_eq!(responses[3]["data"]["replaced"], false);
}

/// Listings, raises and reports through the session.
#[test]
fn test_queries_and_aggregates() {
    let responses = run_lines(
        &Config::default(),
        &[
            r#"{"op":"list","filter":"high-performers","sort":"salary","limit":2}"#,
            r#"{"op":"top_paid","n":1}"#,
            r#"{"op":"raise"}"#,
            r#"{"op":"average_salary","department":"nonexistent"}"#,
            r#"{"op":"report"}"#,
            r#"{"op":"count"}"#,
            r#"{"op":"clear"}"#,
            r#"{"op":"count"}"#,
        ],
    );

    let listed = responses[0]["data"].as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["name"], "Robert Martinez");
    assert_eq!(responses[1]["data"][0]["id"], 7);
    assert_eq!(responses[2]["data"]["affected"], 3);
    assert_eq!(responses[3]["data"]["average_salary"], 0.0);
    assert_eq!(responses[4]["data"]["departments"].as_array().map(Vec::len), Some(4));
    assert_eq!(responses[5]["data"]["count"], 10);
    assert_eq!(responses[7]["data"]["count"], 0);
}

/// Malformed requests get error envelopes; the session keeps going.
#[test]
fn test_malformed_requests() {
    let responses = run_lines(
        &Config::default(),
        &[
            r#"{"op":"remove"}"#,
            r#"{"op":"update","id":1,"field":"salary","value":[1,2]}"#,
            r#"{"op":"replace","record":{"name":"No Id","department":"Ops","salary":1,"performance_rating":1,"years_of_experience":1}}"#,
            r#"{"op":"count"}"#,
        ],
    );

    for response in &responses[..3] {
        assert_eq!(response["status"], "error");
        assert_eq!(response["code"], "ROSTER_CLI_INVALID_REQUEST");
    }
    assert_eq!(responses[3]["data"]["count"], 10);
}

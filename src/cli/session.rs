//! Line-oriented JSON session over one store
//!
//! Each request is a JSON object with an `op` tag. Each answer is one
//! JSON envelope. A malformed request is answered with an error envelope;
//! a request that changes nothing (unknown id, duplicate id, rejected
//! update) is answered with `ok` and a `false` flag, as the store reports it.

use serde::Deserialize;
use serde_json::{json, Value};

use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{error_response, ok_response};
use crate::ordering::OrderingPolicy;
use crate::query::{FilterPreset, ViewQuery};
use crate::record::Employee;
use crate::seed::next_id;
use crate::store::{EmployeeStore, Field, FieldValue};

/// Record fields as sent by a client; a missing id means "allocate one"
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordInput {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub department: String,
    pub salary: f64,
    pub performance_rating: f64,
    pub years_of_experience: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl RecordInput {
    fn into_employee(self, id: u64) -> Employee<u64> {
        Employee::new(
            id,
            self.name,
            self.department,
            self.salary,
            self.performance_rating,
            self.years_of_experience,
            self.active,
        )
    }
}

/// Session requests
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionRequest {
    Add {
        record: RecordInput,
    },
    Replace {
        record: RecordInput,
    },
    Remove {
        id: u64,
    },
    Update {
        id: u64,
        field: String,
        value: Value,
    },
    Get {
        id: u64,
    },
    List {
        #[serde(default)]
        filter: Option<String>,
        #[serde(default)]
        search: Option<String>,
        #[serde(default)]
        sort: Option<String>,
        #[serde(default)]
        limit: Option<usize>,
    },
    TopPaid {
        #[serde(default)]
        n: Option<usize>,
    },
    Raise {
        #[serde(default)]
        min_rating: Option<f64>,
        #[serde(default)]
        percent: Option<f64>,
    },
    AverageSalary {
        department: String,
    },
    Report,
    Count,
    Clear,
    NextId,
}

/// A session bound to one store
pub struct Session<'a> {
    store: &'a mut EmployeeStore<u64>,
    config: &'a Config,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a mut EmployeeStore<u64>, config: &'a Config) -> Self {
        Self { store, config }
    }

    /// Handles one raw request line and returns the response envelope
    pub fn handle_line(&mut self, line: &str) -> Value {
        let result = serde_json::from_str::<SessionRequest>(line)
            .map_err(|e| CliError::invalid_request(format!("Invalid request: {}", e)))
            .and_then(|request| self.handle(request));

        match result {
            Ok(data) => ok_response(data),
            Err(e) => error_response(e.code_str(), e.message()),
        }
    }

    /// Handles one parsed request
    pub fn handle(&mut self, request: SessionRequest) -> CliResult<Value> {
        match request {
            SessionRequest::Add { record } => {
                let id = match record.id {
                    Some(id) => id,
                    None => allocate_id(self.store)?,
                };
                let added = self.store.add(record.into_employee(id));
                Ok(json!({ "added": added, "id": id }))
            }
            SessionRequest::Replace { record } => {
                let id = record
                    .id
                    .ok_or_else(|| CliError::invalid_request("replace requires record.id"))?;
                let replaced = self.store.replace(record.into_employee(id));
                Ok(json!({ "replaced": replaced, "id": id }))
            }
            SessionRequest::Remove { id } => Ok(json!({ "removed": self.store.remove(&id) })),
            SessionRequest::Update { id, field, value } => {
                let value = field_value_from_json(&field, &value)?;
                match self.store.try_update(&id, &field, value) {
                    Ok(()) => Ok(json!({ "updated": true })),
                    Err(e) => Ok(json!({
                        "updated": false,
                        "reason": e.reason(),
                        "message": e.to_string(),
                    })),
                }
            }
            SessionRequest::Get { id } => Ok(serde_json::to_value(self.store.get(&id))?),
            SessionRequest::List {
                filter,
                search,
                sort,
                limit,
            } => {
                let sort = sort
                    .as_deref()
                    .map(str::parse::<OrderingPolicy>)
                    .transpose()
                    .map_err(|e| CliError::invalid_request(e.to_string()))?;
                let query = build_view(self.config, filter.as_deref(), search, sort, limit)?;
                Ok(serde_json::to_value(self.store.view(&query))?)
            }
            SessionRequest::TopPaid { n } => {
                let n = n.unwrap_or(self.config.top_paid_count);
                Ok(serde_json::to_value(self.store.top_n_by_salary(n))?)
            }
            SessionRequest::Raise { min_rating, percent } => {
                let affected = self.store.give_raise(
                    min_rating.unwrap_or(self.config.raise_min_rating),
                    percent.unwrap_or(self.config.raise_percentage),
                );
                Ok(json!({ "affected": affected }))
            }
            SessionRequest::AverageSalary { department } => {
                Ok(json!({ "average_salary": self.store.average_salary(&department) }))
            }
            SessionRequest::Report => Ok(serde_json::to_value(self.store.department_report())?),
            SessionRequest::Count => Ok(json!({ "count": self.store.count() })),
            SessionRequest::Clear => {
                self.store.clear();
                Ok(json!({ "count": 0 }))
            }
            SessionRequest::NextId => Ok(json!({ "next_id": allocate_id(self.store)? })),
        }
    }
}

fn allocate_id(store: &EmployeeStore<u64>) -> CliResult<u64> {
    next_id(store).ok_or_else(|| CliError::invalid_request("No ids left to allocate; pass record.id"))
}

/// Builds a listing view from textual options
pub fn build_view(
    config: &Config,
    filter: Option<&str>,
    search: Option<String>,
    sort: Option<OrderingPolicy>,
    limit: Option<usize>,
) -> CliResult<ViewQuery> {
    let filter = match filter {
        Some(text) => FilterPreset::parse_with(text, config.high_performer_rating)
            .map_err(|e| CliError::invalid_argument(e.to_string()))?,
        None => FilterPreset::All,
    };
    Ok(ViewQuery {
        filter,
        search,
        sort,
        limit,
    })
}

/// Converts a JSON value into the variant the named field stores.
///
/// Numbers become floats for salary and rating and integers otherwise;
/// the store decides whether the variant fits the field.
fn field_value_from_json(field: &str, value: &Value) -> CliResult<FieldValue> {
    let wants_float = matches!(
        field.parse::<Field>(),
        Ok(Field::Salary) | Ok(Field::PerformanceRating)
    );

    match value {
        Value::String(s) => Ok(FieldValue::Text(s.clone())),
        Value::Bool(b) => Ok(FieldValue::Bool(*b)),
        Value::Number(n) if wants_float => n
            .as_f64()
            .map(FieldValue::Float)
            .ok_or_else(|| CliError::invalid_request(format!("Unrepresentable number: {}", n))),
        Value::Number(n) => match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
            Some(i) => Ok(FieldValue::Integer(i)),
            None => n
                .as_f64()
                .map(FieldValue::Float)
                .ok_or_else(|| CliError::invalid_request(format!("Unrepresentable number: {}", n))),
        },
        other => Err(CliError::invalid_request(format!(
            "Update value must be a string, number or boolean, got {}",
            other
        ))),
    }
}

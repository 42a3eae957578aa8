//! Employee store
//!
//! Owns every record, keyed by identity. Iteration follows insertion
//! order, so listings are reproducible.
//!
//! # Snapshot contract
//!
//! Listing, filtering and sorting operations return `Vec<Employee<K>>`
//! built from clones. A returned listing is independent of the store:
//! neither later membership changes nor later field updates are visible
//! through it. `get` and `iter` hand out borrows instead, which the
//! borrow checker keeps from outliving any mutation.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::IndexMap;

use super::errors::{UpdateError, UpdateResult};
use super::report::{DepartmentReport, DepartmentSummary};
use super::update::{Field, FieldValue};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::ordering::{contains_ignore_case, eq_ignore_case, OrderingPolicy};
use crate::query::ViewQuery;
use crate::record::Employee;

/// In-memory personnel record store
#[derive(Debug, Clone)]
pub struct EmployeeStore<K> {
    records: IndexMap<K, Employee<K>>,
}

impl<K> Default for EmployeeStore<K> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<K> EmployeeStore<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Inserts a record. Returns false, changing nothing, if the id is taken.
    pub fn add(&mut self, record: Employee<K>) -> bool {
        match self.records.entry(record.id().clone()) {
            Entry::Occupied(_) => {
                log_record_event(Event::RecordRejected, record.id(), &[("reason", "duplicate_id")]);
                false
            }
            Entry::Vacant(slot) => {
                log_record_event(Event::RecordAdded, record.id(), &[]);
                slot.insert(record);
                true
            }
        }
    }

    /// Removes a record. Returns false if the id is absent.
    pub fn remove(&mut self, id: &K) -> bool {
        match self.records.shift_remove(id) {
            Some(_) => {
                log_record_event(Event::RecordRemoved, id, &[]);
                true
            }
            None => false,
        }
    }

    /// Swaps in a new version of an existing record.
    ///
    /// Equivalent to `remove` followed by `add`: the record moves to the
    /// end of iteration order. Returns false if the id is absent.
    pub fn replace(&mut self, record: Employee<K>) -> bool {
        if self.records.shift_remove(record.id()).is_none() {
            return false;
        }
        log_record_event(Event::RecordReplaced, record.id(), &[]);
        self.records.insert(record.id().clone(), record);
        true
    }

    /// Looks up a record by id
    pub fn get(&self, id: &K) -> Option<&Employee<K>> {
        self.records.get(id)
    }

    /// Returns true if a record has this id
    pub fn contains(&self, id: &K) -> bool {
        self.records.contains_key(id)
    }

    /// Updates one field by name.
    ///
    /// Returns false, changing nothing, for an unknown id, an unknown field
    /// or a value the field cannot hold.
    pub fn update(&mut self, id: &K, field: &str, value: impl Into<FieldValue>) -> bool {
        self.try_update(id, field, value).is_ok()
    }

    /// Like [`update`](Self::update), reporting why nothing changed
    pub fn try_update(
        &mut self,
        id: &K,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> UpdateResult<()> {
        let result = field
            .parse::<Field>()
            .map_err(UpdateError::from)
            .and_then(|field| self.apply_update(id, field, value.into()));

        if let Err(ref err) = result {
            log_record_event(Event::UpdateRejected, id, &[("field", field), ("reason", err.reason())]);
        }
        result
    }

    /// Typed entry point for a single-field update
    pub fn update_field(&mut self, id: &K, field: Field, value: impl Into<FieldValue>) -> UpdateResult<()> {
        let result = self.apply_update(id, field, value.into());
        if let Err(ref err) = result {
            log_record_event(
                Event::UpdateRejected,
                id,
                &[("field", field.as_str()), ("reason", err.reason())],
            );
        }
        result
    }

    fn apply_update(&mut self, id: &K, field: Field, value: FieldValue) -> UpdateResult<()> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| UpdateError::NotFound(format!("{:?}", id)))?;

        // Resolve before touching the record so a bad value changes nothing
        let change = field.resolve(value)?;
        change.apply(record);

        log_record_event(Event::FieldUpdated, id, &[("field", field.as_str())]);
        Ok(())
    }

    // =========================================================================
    // Listings
    // =========================================================================

    /// Every record, in insertion order
    pub fn list_all(&self) -> Vec<Employee<K>> {
        self.records.values().cloned().collect()
    }

    /// Records whose department matches, ignoring case
    pub fn list_by_department(&self, department: &str) -> Vec<Employee<K>> {
        self.filter(|e| eq_ignore_case(e.department(), department))
    }

    /// Records whose name contains `term`, ignoring case
    pub fn search_by_name(&self, term: &str) -> Vec<Employee<K>> {
        self.filter(|e| contains_ignore_case(e.name(), term))
    }

    /// Records rated at or above `threshold`
    pub fn list_by_min_rating(&self, threshold: f64) -> Vec<Employee<K>> {
        self.filter(|e| e.performance_rating() >= threshold)
    }

    /// Records with `min <= salary <= max`
    pub fn list_by_salary_range(&self, min: f64, max: f64) -> Vec<Employee<K>> {
        self.filter(|e| e.salary() >= min && e.salary() <= max)
    }

    /// Records matching a caller-supplied predicate
    pub fn filter<P>(&self, predicate: P) -> Vec<Employee<K>>
    where
        P: Fn(&Employee<K>) -> bool,
    {
        self.records
            .values()
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }

    /// Filtered, searched and sorted listing, as driven by a presentation layer
    pub fn view(&self, query: &ViewQuery) -> Vec<Employee<K>> {
        query.run(self.iter())
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Every record sorted by a policy. Stored order is untouched.
    pub fn sorted_by(&self, policy: OrderingPolicy) -> Vec<Employee<K>> {
        let mut snapshot = self.list_all();
        policy.sort(&mut snapshot);
        snapshot
    }

    /// Most experienced first
    pub fn sorted_by_experience(&self) -> Vec<Employee<K>> {
        self.sorted_by(OrderingPolicy::Experience)
    }

    /// Highest salary first
    pub fn sorted_by_salary(&self) -> Vec<Employee<K>> {
        self.sorted_by(OrderingPolicy::Salary)
    }

    /// Highest rating first
    pub fn sorted_by_performance(&self) -> Vec<Employee<K>> {
        self.sorted_by(OrderingPolicy::Performance)
    }

    /// Name A to Z
    pub fn sorted_by_name(&self) -> Vec<Employee<K>> {
        self.sorted_by(OrderingPolicy::Name)
    }

    /// Department A to Z
    pub fn sorted_by_department(&self) -> Vec<Employee<K>> {
        self.sorted_by(OrderingPolicy::Department)
    }

    /// The `n` best paid records, highest first. Returns all if `n` exceeds the store.
    pub fn top_n_by_salary(&self, n: usize) -> Vec<Employee<K>> {
        if n == 0 {
            return Vec::new();
        }
        let mut sorted = self.sorted_by_salary();
        sorted.truncate(n);
        sorted
    }

    // =========================================================================
    // Bulk mutation and aggregates
    // =========================================================================

    /// Multiplies salary by `1 + percentage / 100` for every record rated at
    /// or above `min_rating`. Returns how many records changed.
    ///
    /// Repeated calls compound.
    pub fn give_raise(&mut self, min_rating: f64, percentage: f64) -> usize {
        let factor = 1.0 + percentage / 100.0;
        let mut affected = 0;
        for record in self.records.values_mut() {
            if record.performance_rating() >= min_rating {
                record.set_salary(record.salary() * factor);
                affected += 1;
            }
        }

        if Logger::enabled(Event::RaiseApplied.severity()) {
            log_event_with_fields(
                Event::RaiseApplied,
                &[
                    ("affected", &affected.to_string()),
                    ("min_rating", &min_rating.to_string()),
                    ("percentage", &percentage.to_string()),
                ],
            );
        }
        affected
    }

    /// Mean salary of a department, ignoring case. Zero when nobody matches.
    pub fn average_salary(&self, department: &str) -> f64 {
        let (total, count) = self
            .records
            .values()
            .filter(|e| eq_ignore_case(e.department(), department))
            .fold((0.0, 0usize), |(total, count), e| (total + e.salary(), count + 1));

        if count == 0 {
            return 0.0;
        }
        total / count as f64
    }

    /// Number of records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records per department, keyed by the department name as stored
    pub fn department_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in self.records.values() {
            *counts.entry(record.department().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Count and average salary for every stored department name
    pub fn department_report(&self) -> DepartmentReport {
        let departments = self
            .department_counts()
            .into_iter()
            .map(|(department, count)| {
                let average_salary = self.average_salary(&department);
                DepartmentSummary {
                    department,
                    count,
                    average_salary,
                }
            })
            .collect();
        DepartmentReport::new(departments)
    }

    /// Removes every record
    pub fn clear(&mut self) {
        let removed = self.records.len().to_string();
        self.records.clear();
        log_event_with_fields(Event::StoreCleared, &[("removed", &removed)]);
    }

    /// Borrowing, one-shot traversal in insertion order.
    ///
    /// The store cannot be mutated while the iterator is alive.
    pub fn iter(&self) -> impl Iterator<Item = &Employee<K>> + '_ {
        self.records.values()
    }
}

impl<'a, K> IntoIterator for &'a EmployeeStore<K> {
    type Item = &'a Employee<K>;
    type IntoIter = indexmap::map::Values<'a, K, Employee<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

fn log_record_event<K: Debug>(event: Event, id: &K, fields: &[(&str, &str)]) {
    if !Logger::enabled(event.severity()) {
        return;
    }
    let id = format!("{:?}", id);
    let mut all_fields = Vec::with_capacity(fields.len() + 1);
    all_fields.push(("id", id.as_str()));
    all_fields.extend_from_slice(fields);
    log_event_with_fields(event, &all_fields);
}

//! Store contract and in-memory table
//!
//! Every table is a `BTreeMap` keyed by id plus a secondary index for the
//! entity's unique keys. One `RwLock` guards both, so a uniqueness check and
//! the insert it protects always happen under the same write guard.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use estate_core::RecordId;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::error::{DbError, DbResult};

/// A record that can live in a [`MemoryTable`]
pub trait Entity: Clone + Send + Sync + 'static {
    /// Table name, used in errors and logs
    const TABLE: &'static str;

    /// Store-assigned id; `0` until first save
    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Stamp `updated_at`
    fn touch(&mut self, at: DateTime<Utc>);

    /// `(field, value)` pairs that must be unique across the table
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Record filter passed to [`Store::find_where`]
pub type Predicate<'p, E> = &'p (dyn for<'a> Fn(&'a E) -> bool + Send + Sync);

/// In-place mutation passed to [`Store::update`]
pub type Change<E> = Box<dyn for<'a> FnOnce(&'a mut E) + Send>;

/// Narrow persistence contract used by the services
#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    /// Insert (id `0`) or replace (existing id) a record, returning the stored copy
    async fn save(&self, record: E) -> DbResult<E>;

    async fn find_by_id(&self, id: RecordId) -> DbResult<Option<E>>;

    /// All records matching `pred`, in id order
    async fn find_where(&self, pred: Predicate<'_, E>) -> DbResult<Vec<E>>;

    /// Apply `change` to the stored record under the table's write guard;
    /// `None` when the id is unknown
    async fn update(&self, id: RecordId, change: Change<E>) -> DbResult<Option<E>>;

    /// Whether any record holds `value` in the unique key `field`
    async fn exists_by(&self, field: &str, value: &str) -> DbResult<bool>;

    /// Remove a record; `false` when the id is unknown
    async fn delete_by_id(&self, id: RecordId) -> DbResult<bool>;

    async fn find_all(&self) -> DbResult<Vec<E>> {
        self.find_where(&|_: &E| true).await
    }

    async fn count(&self) -> DbResult<usize> {
        Ok(self.find_all().await?.len())
    }
}

#[derive(Debug)]
struct TableState<E> {
    rows: BTreeMap<RecordId, E>,
    unique: HashMap<&'static str, HashMap<String, RecordId>>,
    next_id: RecordId,
}

fn release_keys<E: Entity>(
    unique: &mut HashMap<&'static str, HashMap<String, RecordId>>,
    record: &E,
) {
    for (field, value) in record.unique_keys() {
        if let Some(index) = unique.get_mut(field) {
            index.remove(&value);
        }
    }
}

/// Insert or replace `record`; the caller holds the write guard
fn write_row<E: Entity>(state: &mut TableState<E>, mut record: E) -> DbResult<E> {
    let TableState {
        rows,
        unique,
        next_id,
    } = state;

    let is_new = record.id() == 0;
    let id = if is_new { *next_id } else { record.id() };

    let previous = if is_new {
        None
    } else {
        Some(
            rows.get(&id)
                .ok_or_else(|| DbError::NotFound(format!("{} {}", E::TABLE, id)))?,
        )
    };

    let keys = record.unique_keys();
    for (field, value) in &keys {
        let owner = unique.get(field).and_then(|index| index.get(value));
        if matches!(owner, Some(owner) if *owner != id) {
            return Err(DbError::UniqueViolation {
                table: E::TABLE,
                field: *field,
                value: value.clone(),
            });
        }
    }

    if let Some(previous) = previous {
        release_keys(unique, previous);
    }

    if is_new {
        record.set_id(id);
        *next_id += 1;
    }
    record.touch(Utc::now());

    for (field, value) in keys {
        unique.entry(field).or_default().insert(value, id);
    }
    rows.insert(id, record.clone());

    Ok(record)
}

/// Thread-safe in-memory table
#[derive(Debug)]
pub struct MemoryTable<E> {
    state: RwLock<TableState<E>>,
}

impl<E: Entity> Default for MemoryTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> MemoryTable<E> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(TableState {
                rows: BTreeMap::new(),
                unique: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl<E: Entity> Store<E> for MemoryTable<E> {
    async fn save(&self, record: E) -> DbResult<E> {
        let mut guard = self.state.write().await;
        write_row(&mut guard, record)
    }

    async fn find_by_id(&self, id: RecordId) -> DbResult<Option<E>> {
        let state = self.state.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn find_where(&self, pred: Predicate<'_, E>) -> DbResult<Vec<E>> {
        let state = self.state.read().await;
        Ok(state.rows.values().filter(|r| pred(r)).cloned().collect())
    }

    async fn update(&self, id: RecordId, change: Change<E>) -> DbResult<Option<E>> {
        let mut guard = self.state.write().await;
        let Some(mut record) = guard.rows.get(&id).cloned() else {
            return Ok(None);
        };
        change(&mut record);
        record.set_id(id);
        write_row(&mut guard, record).map(Some)
    }

    async fn exists_by(&self, field: &str, value: &str) -> DbResult<bool> {
        let state = self.state.read().await;
        Ok(state
            .unique
            .get(field)
            .is_some_and(|index| index.contains_key(value)))
    }

    async fn delete_by_id(&self, id: RecordId) -> DbResult<bool> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        match state.rows.remove(&id) {
            Some(record) => {
                release_keys(&mut state.unique, &record);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> DbResult<usize> {
        Ok(self.state.read().await.rows.len())
    }
}

//! In-memory [`EntityStore`] with failure injection, for service tests.

use std::{
  collections::HashSet,
  sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
  },
};

use serde_json::Value;
use uuid::Uuid;

use crate::{OwnerId, Record, Table, store::EntityStore};

#[derive(Debug, thiserror::Error)]
#[error("memory store: {0}")]
pub struct MemoryError(String);

struct Row {
  table: Table,
  owner: OwnerId,
  id:    Uuid,
  data:  Value,
}

#[derive(Default)]
pub struct MemoryStore {
  rows:         Mutex<Vec<Row>>,
  fail_writes:  AtomicBool,
  fail_deletes: Mutex<HashSet<Uuid>>,
}

impl MemoryStore {
  /// Make every insert and update fail until reset.
  pub fn fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }

  /// Make deleting `id` fail.
  pub fn fail_delete_of(&self, id: Uuid) {
    self.fail_deletes.lock().unwrap().insert(id);
  }

  pub fn count(&self, table: Table) -> usize {
    self.rows.lock().unwrap().iter().filter(|r| r.table == table).count()
  }

  fn check_writable(&self) -> Result<(), MemoryError> {
    if self.fail_writes.load(Ordering::SeqCst) {
      Err(MemoryError("write rejected".into()))
    } else {
      Ok(())
    }
  }
}

fn encode<R: Record>(record: &R) -> Result<Value, MemoryError> {
  serde_json::to_value(record).map_err(|e| MemoryError(e.to_string()))
}

fn decode<R: Record>(data: &Value) -> Result<R, MemoryError> {
  serde_json::from_value(data.clone()).map_err(|e| MemoryError(e.to_string()))
}

impl EntityStore for MemoryStore {
  type Error = MemoryError;

  async fn insert<R: Record>(&self, owner: OwnerId, mut record: R) -> Result<R, MemoryError> {
    self.check_writable()?;
    if record.id().is_nil() {
      record.set_id(Uuid::new_v4());
    }
    let mut rows = self.rows.lock().unwrap();
    if rows
      .iter()
      .any(|r| r.table == R::TABLE && r.owner == owner && r.id == record.id())
    {
      return Err(MemoryError(format!("duplicate id {}", record.id())));
    }
    rows.push(Row {
      table: R::TABLE,
      owner,
      id: record.id(),
      data: encode(&record)?,
    });
    Ok(record)
  }

  async fn update<R: Record>(&self, owner: OwnerId, record: R) -> Result<Option<R>, MemoryError> {
    self.check_writable()?;
    let mut rows = self.rows.lock().unwrap();
    let Some(row) = rows
      .iter_mut()
      .find(|r| r.table == R::TABLE && r.owner == owner && r.id == record.id())
    else {
      return Ok(None);
    };
    row.data = encode(&record)?;
    Ok(Some(record))
  }

  async fn delete<R: Record>(&self, owner: OwnerId, id: Uuid) -> Result<bool, MemoryError> {
    if self.fail_deletes.lock().unwrap().contains(&id) {
      return Err(MemoryError(format!("delete of {id} rejected")));
    }
    let mut rows = self.rows.lock().unwrap();
    let before = rows.len();
    rows.retain(|r| !(r.table == R::TABLE && r.owner == owner && r.id == id));
    Ok(rows.len() < before)
  }

  async fn get<R: Record>(&self, owner: OwnerId, id: Uuid) -> Result<Option<R>, MemoryError> {
    let rows = self.rows.lock().unwrap();
    rows
      .iter()
      .find(|r| r.table == R::TABLE && r.owner == owner && r.id == id)
      .map(|r| decode(&r.data))
      .transpose()
  }

  async fn list<R: Record>(&self, owner: OwnerId) -> Result<Vec<R>, MemoryError> {
    let rows = self.rows.lock().unwrap();
    rows
      .iter()
      .filter(|r| r.table == R::TABLE && r.owner == owner)
      .map(|r| decode(&r.data))
      .collect()
  }
}

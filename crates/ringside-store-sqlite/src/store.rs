//! The SQLite implementation of [`EntityStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use ringside_core::{OwnerId, Record, store::EntityStore};

use crate::{
  Error, Result,
  encode::{RawRow, encode_dt, encode_record, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Ringside record store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mostly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── EntityStore impl ────────────────────────────────────────────────────────

impl EntityStore for SqliteStore {
  type Error = Error;

  async fn insert<R: Record>(&self, owner: OwnerId, mut record: R) -> Result<R> {
    if record.id().is_nil() {
      record.set_id(Uuid::new_v4());
    }

    let sql = format!(
      "INSERT INTO {} (id, owner_id, data, created_at, updated_at)
       VALUES (?1, ?2, ?3, ?4, ?4)",
      R::TABLE.name()
    );
    let id_str    = encode_uuid(record.id());
    let owner_str = owner.to_string();
    let data      = encode_record(&record)?;
    let now_str   = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          &sql,
          rusqlite::params![id_str, owner_str, data, now_str],
        )?;
        Ok(())
      })
      .await?;

    tracing::trace!(table = R::TABLE.name(), id = %record.id(), "row inserted");
    Ok(record)
  }

  async fn update<R: Record>(&self, owner: OwnerId, record: R) -> Result<Option<R>> {
    let sql = format!(
      "UPDATE {} SET data = ?1, updated_at = ?2 WHERE id = ?3 AND owner_id = ?4",
      R::TABLE.name()
    );
    let data      = encode_record(&record)?;
    let now_str   = encode_dt(Utc::now());
    let id_str    = encode_uuid(record.id());
    let owner_str = owner.to_string();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          &sql,
          rusqlite::params![data, now_str, id_str, owner_str],
        )?)
      })
      .await?;

    Ok((changed > 0).then_some(record))
  }

  async fn delete<R: Record>(&self, owner: OwnerId, id: Uuid) -> Result<bool> {
    let sql = format!(
      "DELETE FROM {} WHERE id = ?1 AND owner_id = ?2",
      R::TABLE.name()
    );
    let id_str    = encode_uuid(id);
    let owner_str = owner.to_string();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(&sql, rusqlite::params![id_str, owner_str])?)
      })
      .await?;

    Ok(changed > 0)
  }

  async fn get<R: Record>(&self, owner: OwnerId, id: Uuid) -> Result<Option<R>> {
    let sql = format!(
      "SELECT id, data FROM {} WHERE id = ?1 AND owner_id = ?2",
      R::TABLE.name()
    );
    let id_str    = encode_uuid(id);
    let owner_str = owner.to_string();

    let raw: Option<RawRow> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str, owner_str], |row| {
              Ok(RawRow { id: row.get(0)?, data: row.get(1)? })
            })
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRow::into_record).transpose()
  }

  async fn list<R: Record>(&self, owner: OwnerId) -> Result<Vec<R>> {
    // rowid order is insertion order; updates do not move a row.
    let sql = format!(
      "SELECT id, data FROM {} WHERE owner_id = ?1 ORDER BY rowid",
      R::TABLE.name()
    );
    let owner_str = owner.to_string();

    let raws: Vec<RawRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![owner_str], |row| {
            Ok(RawRow { id: row.get(0)?, data: row.get(1)? })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRow::into_record).collect()
  }
}

//! Encoding and decoding helpers between records and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, UUIDs as hyphenated lowercase
//! strings, and records as compact JSON.

use chrono::{DateTime, Utc};
use ringside_core::Record;
use uuid::Uuid;

use crate::{Error, Result};

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn encode_record<R: Record>(record: &R) -> Result<String> {
  Ok(serde_json::to_string(record)?)
}

/// Decode a `data` column, checking the payload id against the row key.
pub fn decode_record<R: Record>(id: &str, data: &str) -> Result<R> {
  let record: R = serde_json::from_str(data)?;
  if encode_uuid(record.id()) != id {
    return Err(Error::Corrupt {
      table:  R::TABLE.name(),
      detail: format!("row {id} holds record {}", record.id()),
    });
  }
  Ok(record)
}

/// Raw strings read directly from an entity row.
pub struct RawRow {
  pub id:   String,
  pub data: String,
}

impl RawRow {
  pub fn into_record<R: Record>(self) -> Result<R> {
    decode_record(&self.id, &self.data)
  }
}

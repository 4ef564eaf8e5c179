//! Error types for `ringside-core`.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::record::Table;

#[derive(Debug, Error)]
pub enum Error {
  /// A required field is missing or malformed. Never persisted.
  #[error("validation failed: {0}")]
  Validation(String),

  /// The backing store rejected a read or write.
  #[error("persistence error: {0}")]
  Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// A reign would end before it started.
  #[error("date {end} precedes reign start {start}")]
  InvalidDateRange { start: NaiveDate, end: NaiveDate },

  #[error("{table} record not found: {id}")]
  NotFound { table: Table, id: Uuid },

  #[error("show {show_id} has no match {match_id}")]
  MatchNotFound { show_id: Uuid, match_id: Uuid },

  #[error("history index {index} out of range (length {len})")]
  HistoryIndexOutOfRange { index: usize, len: usize },

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl Error {
  /// Wrap a backend error as [`Error::Persistence`].
  pub fn persistence<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Persistence(Box::new(e))
  }

  pub(crate) fn validation(msg: impl Into<String>) -> Self {
    Self::Validation(msg.into())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Error type for `ringside-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// A stored payload's id disagrees with its row key.
  #[error("corrupt row in {table}: {detail}")]
  Corrupt { table: &'static str, detail: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Store-backed operations.
//!
//! Each function loads what it needs through an [`EntityStore`], applies a
//! pure transform from the domain modules, and writes the result back. The
//! updated record is only returned once the write succeeded; a failed write
//! surfaces as [`Error::Persistence`] and nothing is patched locally.
//!
//! Multi-record operations (cascade delete, import) are sequences of
//! independent writes and report per-item outcomes in a [`BulkReport`].

pub mod championships;
pub mod chronicle;
pub mod dataset;
pub mod records;
pub mod roster;
pub mod shows;

use serde::Serialize;

use crate::{Error, Result};

/// Success/failure tally for a multi-record operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkReport {
  pub succeeded: usize,
  pub failed:    usize,
  /// One message per failed item.
  pub errors:    Vec<String>,
}

impl BulkReport {
  pub fn record<T>(&mut self, outcome: Result<T>) {
    match outcome {
      Ok(_) => self.succeeded += 1,
      Err(e) => {
        self.failed += 1;
        self.errors.push(e.to_string());
      }
    }
  }

  pub fn is_clean(&self) -> bool { self.failed == 0 }
}

fn store_err<E>(e: E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  Error::persistence(e)
}

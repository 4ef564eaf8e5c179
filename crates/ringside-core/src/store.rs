//! The `EntityStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `ringside-store-sqlite`). Higher layers (`ringside-api`, the services in
//! [`crate::service`]) depend on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use uuid::Uuid;

use crate::{owner::OwnerId, record::Record};

/// Abstraction over a per-owner record store.
///
/// Every operation is scoped by `owner`; a record written under one owner is
/// invisible to every other. Writes are last-write-wins per record and nothing
/// is retried.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait EntityStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record. A nil id is replaced with a fresh v4 UUID; the
  /// stored record is returned.
  fn insert<R: Record>(
    &self,
    owner: OwnerId,
    record: R,
  ) -> impl Future<Output = Result<R, Self::Error>> + Send + '_;

  /// Overwrite an existing record by id. Returns `None` if no such record
  /// exists for `owner`.
  fn update<R: Record>(
    &self,
    owner: OwnerId,
    record: R,
  ) -> impl Future<Output = Result<Option<R>, Self::Error>> + Send + '_;

  /// Delete a record by id. Returns `false` if nothing was deleted.
  fn delete<R: Record>(
    &self,
    owner: OwnerId,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get<R: Record>(
    &self,
    owner: OwnerId,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<R>, Self::Error>> + Send + '_;

  /// All records of type `R` for `owner`, in insertion order.
  fn list<R: Record>(
    &self,
    owner: OwnerId,
  ) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send + '_;
}

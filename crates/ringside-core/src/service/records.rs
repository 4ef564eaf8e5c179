//! Generic validated CRUD over any [`Record`].

use uuid::Uuid;

use super::store_err;
use crate::{Error, OwnerId, Record, Result, store::EntityStore};

/// Validate and insert.
pub async fn create<S, R>(store: &S, owner: &OwnerId, record: R) -> Result<R>
where
  S: EntityStore,
  R: Record,
{
  record.validate()?;
  let stored = store.insert(owner.clone(), record).await.map_err(store_err)?;
  tracing::debug!(table = %R::TABLE, id = %stored.id(), "created record");
  Ok(stored)
}

/// Validate and overwrite an existing record.
pub async fn update<S, R>(store: &S, owner: &OwnerId, record: R) -> Result<R>
where
  S: EntityStore,
  R: Record,
{
  record.validate()?;
  let id = record.id();
  store
    .update(owner.clone(), record)
    .await
    .map_err(store_err)?
    .ok_or(Error::NotFound { table: R::TABLE, id })
}

/// Update if a record with this id exists for `owner`, insert otherwise.
pub async fn save<S, R>(store: &S, owner: &OwnerId, record: R) -> Result<R>
where
  S: EntityStore,
  R: Record,
{
  if !record.id().is_nil() && find::<S, R>(store, owner, record.id()).await?.is_some() {
    update(store, owner, record).await
  } else {
    create(store, owner, record).await
  }
}

pub async fn find<S, R>(store: &S, owner: &OwnerId, id: Uuid) -> Result<Option<R>>
where
  S: EntityStore,
  R: Record,
{
  store.get(owner.clone(), id).await.map_err(store_err)
}

/// Like [`find`], but a missing record is [`Error::NotFound`].
pub async fn fetch<S, R>(store: &S, owner: &OwnerId, id: Uuid) -> Result<R>
where
  S: EntityStore,
  R: Record,
{
  find(store, owner, id)
    .await?
    .ok_or(Error::NotFound { table: R::TABLE, id })
}

pub async fn list<S, R>(store: &S, owner: &OwnerId) -> Result<Vec<R>>
where
  S: EntityStore,
  R: Record,
{
  store.list(owner.clone()).await.map_err(store_err)
}

pub async fn remove<S, R>(store: &S, owner: &OwnerId, id: Uuid) -> Result<()>
where
  S: EntityStore,
  R: Record,
{
  if store.delete::<R>(owner.clone(), id).await.map_err(store_err)? {
    tracing::debug!(table = %R::TABLE, %id, "deleted record");
    Ok(())
  } else {
    Err(Error::NotFound { table: R::TABLE, id })
  }
}

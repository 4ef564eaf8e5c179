use uuid::Uuid;

use super::records;
use crate::{
  OwnerId, Result,
  championship::Championship,
  store::EntityStore,
  wrestler::{RosterFilter, Wrestler},
};

pub async fn list_roster<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  filter: &RosterFilter,
) -> Result<Vec<Wrestler>> {
  let roster: Vec<Wrestler> = records::list(store, owner).await?;
  Ok(filter.apply(roster))
}

/// Move a wrestler into the free-agent pool.
pub async fn release<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  id: Uuid,
) -> Result<Wrestler> {
  let mut wrestler: Wrestler = records::fetch(store, owner, id).await?;
  wrestler.release();
  records::update(store, owner, wrestler).await
}

pub async fn sign<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  id: Uuid,
  brand: &str,
) -> Result<Wrestler> {
  let mut wrestler: Wrestler = records::fetch(store, owner, id).await?;
  wrestler.sign(brand)?;
  records::update(store, owner, wrestler).await
}

/// Championships currently held by wrestler `id`.
pub async fn titles_held<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  id: Uuid,
) -> Result<Vec<Championship>> {
  let wrestler: Wrestler = records::fetch(store, owner, id).await?;
  let titles: Vec<Championship> = records::list(store, owner).await?;
  Ok(wrestler.titles_held(&titles).into_iter().cloned().collect())
}

//! Whole-dataset export and import.
//!
//! The exchange format is a single JSON object with one array per table:
//! `wrestlers`, `championships`, `shows`, `rivalries`, `storylines`. There is
//! no schema version. Import replays every record through
//! [`records::save`] and tallies outcomes per table instead of aborting on
//! the first bad record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{BulkReport, records};
use crate::{
  Error, OwnerId, Record, Result,
  championship::Championship,
  rivalry::Rivalry,
  show::Show,
  store::EntityStore,
  storyline::Storyline,
  wrestler::Wrestler,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
  #[serde(default)]
  pub wrestlers:     Vec<Wrestler>,
  #[serde(default)]
  pub championships: Vec<Championship>,
  #[serde(default)]
  pub shows:         Vec<Show>,
  #[serde(default)]
  pub rivalries:     Vec<Rivalry>,
  #[serde(default)]
  pub storylines:    Vec<Storyline>,
}

/// Per-table outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
  pub wrestlers:     BulkReport,
  pub championships: BulkReport,
  pub shows:         BulkReport,
  pub rivalries:     BulkReport,
  pub storylines:    BulkReport,
}

impl ImportReport {
  pub fn succeeded(&self) -> usize { self.tables().map(|r| r.succeeded).sum() }

  pub fn failed(&self) -> usize { self.tables().map(|r| r.failed).sum() }

  fn tables(&self) -> impl Iterator<Item = &BulkReport> {
    [
      &self.wrestlers,
      &self.championships,
      &self.shows,
      &self.rivalries,
      &self.storylines,
    ]
    .into_iter()
  }
}

pub async fn export<S: EntityStore>(store: &S, owner: &OwnerId) -> Result<Dataset> {
  Ok(Dataset {
    wrestlers:     records::list(store, owner).await?,
    championships: records::list(store, owner).await?,
    shows:         records::list(store, owner).await?,
    rivalries:     records::list(store, owner).await?,
    storylines:    records::list(store, owner).await?,
  })
}

/// Import a dataset document. Only a non-object document is rejected
/// outright; every other problem is counted against its record.
pub async fn import<S: EntityStore>(
  store: &S,
  owner: &OwnerId,
  document: &Value,
) -> Result<ImportReport> {
  if !document.is_object() {
    return Err(Error::validation("dataset must be a JSON object"));
  }

  let report = ImportReport {
    wrestlers:     import_table::<S, Wrestler>(store, owner, document).await,
    championships: import_table::<S, Championship>(store, owner, document).await,
    shows:         import_table::<S, Show>(store, owner, document).await,
    rivalries:     import_table::<S, Rivalry>(store, owner, document).await,
    storylines:    import_table::<S, Storyline>(store, owner, document).await,
  };

  tracing::info!(
    %owner,
    succeeded = report.succeeded(),
    failed = report.failed(),
    "dataset import finished"
  );
  Ok(report)
}

async fn import_table<S, R>(store: &S, owner: &OwnerId, document: &Value) -> BulkReport
where
  S: EntityStore,
  R: Record,
{
  let mut report = BulkReport::default();
  let items = match document.get(R::TABLE.name()) {
    Some(Value::Array(items)) => items.as_slice(),
    Some(Value::Null) | None => &[],
    Some(_) => {
      report.record::<()>(Err(Error::Validation(format!(
        "{} must be an array",
        R::TABLE
      ))));
      return report;
    }
  };

  for item in items {
    let outcome = match serde_json::from_value::<R>(item.clone()) {
      Ok(record) => records::save(store, owner, record).await,
      Err(e) => Err(Error::from(e)),
    };
    report.record(outcome);
  }
  report
}

//! The [`Record`] trait shared by every persisted entity.

use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::Result;

/// The five entity tables. The serialised name doubles as the table name in
/// storage backends and as the top-level key in dataset exports.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
  Wrestlers,
  Championships,
  Shows,
  Rivalries,
  Storylines,
}

impl Table {
  pub fn name(self) -> &'static str { self.into() }
}

/// An id-keyed entity owned by a single user.
///
/// A nil id means "not yet assigned"; stores replace it on insert.
pub trait Record:
  Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
  const TABLE: Table;

  fn id(&self) -> Uuid;

  fn set_id(&mut self, id: Uuid);

  /// Check required fields. Called before every write.
  fn validate(&self) -> Result<()>;
}

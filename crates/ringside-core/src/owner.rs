//! Owner identity: the tenant key every record is scoped by.

use std::{fmt, sync::Arc};

/// The authenticated user a record belongs to.
///
/// Cheap to clone; the inner string is reference-counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(Arc<str>);

impl OwnerId {
  pub fn new(id: impl AsRef<str>) -> Self { Self(Arc::from(id.as_ref())) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for OwnerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for OwnerId {
  fn from(s: &str) -> Self { Self::new(s) }
}

impl From<String> for OwnerId {
  fn from(s: String) -> Self { Self(Arc::from(s)) }
}

//! Roster members and the free-agent pool.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  championship::Championship,
  record::{Record, Table},
};

/// Brand assigned to wrestlers in the free-agent pool.
pub const FREE_AGENT_BRAND: &str = "Free Agent";

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Alignment {
  #[default]
  Face,
  Heel,
  Tweener,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
  #[default]
  Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wrestler {
  #[serde(default)]
  pub id:         Uuid,
  pub name:       String,
  #[serde(default)]
  pub brand:      String,
  #[serde(default)]
  pub alignment:  Alignment,
  #[serde(default)]
  pub gender:     Gender,
  #[serde(default)]
  pub manager:    Option<String>,
  #[serde(default)]
  pub faction:    Option<String>,
  #[serde(default)]
  pub injured:    bool,
  #[serde(default)]
  pub on_break:   bool,
  #[serde(default)]
  pub free_agent: bool,
  #[serde(default)]
  pub notes:      Option<String>,
}

impl Wrestler {
  pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
    Self {
      id: Uuid::nil(),
      name: name.into(),
      brand: brand.into(),
      alignment: Alignment::default(),
      gender: Gender::default(),
      manager: None,
      faction: None,
      injured: false,
      on_break: false,
      free_agent: false,
      notes: None,
    }
  }

  /// Bookable: neither injured nor on a break.
  pub fn is_available(&self) -> bool { !self.injured && !self.on_break }

  /// Move to the free-agent pool.
  pub fn release(&mut self) {
    self.brand = FREE_AGENT_BRAND.to_owned();
    self.free_agent = true;
  }

  /// Sign to `brand`, leaving the free-agent pool.
  pub fn sign(&mut self, brand: &str) -> Result<()> {
    let brand = brand.trim();
    if brand.is_empty() || brand == FREE_AGENT_BRAND {
      return Err(Error::Validation(format!("cannot sign to brand {brand:?}")));
    }
    self.brand = brand.to_owned();
    self.free_agent = false;
    Ok(())
  }

  /// Championships this wrestler currently holds.
  pub fn titles_held<'a>(
    &self,
    championships: &'a [Championship],
  ) -> Vec<&'a Championship> {
    championships
      .iter()
      .filter(|c| c.current_champion.as_deref() == Some(self.name.as_str()))
      .collect()
  }
}

impl Record for Wrestler {
  const TABLE: Table = Table::Wrestlers;

  fn id(&self) -> Uuid { self.id }

  fn set_id(&mut self, id: Uuid) { self.id = id; }

  fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(Error::validation("wrestler name is required"));
    }
    Ok(())
  }
}

// ─── Filtering ───────────────────────────────────────────────────────────────

/// Roster filter; every set field must match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterFilter {
  pub brand:      Option<String>,
  pub alignment:  Option<Alignment>,
  pub gender:     Option<Gender>,
  pub free_agent: Option<bool>,
  pub injured:    Option<bool>,
  /// `true` keeps only wrestlers who are neither injured nor on break.
  pub available:  Option<bool>,
}

impl RosterFilter {
  pub fn matches(&self, w: &Wrestler) -> bool {
    self.brand.as_deref().is_none_or(|b| w.brand.eq_ignore_ascii_case(b))
      && self.alignment.is_none_or(|a| w.alignment == a)
      && self.gender.is_none_or(|g| w.gender == g)
      && self.free_agent.is_none_or(|f| w.free_agent == f)
      && self.injured.is_none_or(|i| w.injured == i)
      && self.available.is_none_or(|a| w.is_available() == a)
  }

  pub fn apply(&self, roster: Vec<Wrestler>) -> Vec<Wrestler> {
    roster.into_iter().filter(|w| self.matches(w)).collect()
  }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  record::{Record, Table},
  timeline::{Chronicle, TimelineEvent, validate_participants},
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StorylineStatus {
  #[default]
  Planned,
  Active,
  Concluded,
}

/// A booked narrative arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storyline {
  #[serde(default)]
  pub id:           Uuid,
  pub title:        String,
  #[serde(default)]
  pub participants: Vec<String>,
  #[serde(default)]
  pub status:       StorylineStatus,
  #[serde(default)]
  pub description:  Option<String>,
  #[serde(default)]
  pub start_date:   Option<NaiveDate>,
  #[serde(default)]
  pub end_date:     Option<NaiveDate>,
  #[serde(default)]
  pub timeline:     Vec<TimelineEvent>,
}

impl Storyline {
  pub fn new(title: impl Into<String>, participants: Vec<String>) -> Self {
    Self {
      id: Uuid::nil(),
      title: title.into(),
      participants,
      status: StorylineStatus::Planned,
      description: None,
      start_date: None,
      end_date: None,
      timeline: Vec::new(),
    }
  }

  /// Move to `status` on `date`. Starting a planned storyline stamps its
  /// start date; reopening a concluded one clears its end date.
  pub fn transition(&mut self, status: StorylineStatus, date: NaiveDate) {
    match status {
      StorylineStatus::Concluded => self.conclude(date),
      StorylineStatus::Active => {
        self.start_date.get_or_insert(date);
        self.end_date = None;
        self.status = status;
      }
      StorylineStatus::Planned => {
        self.end_date = None;
        self.status = status;
      }
    }
  }
}

impl Record for Storyline {
  const TABLE: Table = Table::Storylines;

  fn id(&self) -> Uuid { self.id }

  fn set_id(&mut self, id: Uuid) { self.id = id; }

  fn validate(&self) -> Result<()> {
    if self.title.trim().is_empty() {
      return Err(Error::validation("storyline title is required"));
    }
    validate_participants(&self.participants, 1)
  }
}

impl Chronicle for Storyline {
  fn timeline_mut(&mut self) -> &mut Vec<TimelineEvent> { &mut self.timeline }

  fn is_concluded(&self) -> bool { self.status == StorylineStatus::Concluded }

  fn conclude(&mut self, date: NaiveDate) {
    self.status = StorylineStatus::Concluded;
    self.end_date = Some(date);
  }
}

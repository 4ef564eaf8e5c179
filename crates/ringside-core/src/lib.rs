//! Core types and trait definitions for the Ringside promotion tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! derived views (calendar occurrences, current champion) are computed here
//! from raw records; persistence sits behind [`store::EntityStore`].

pub mod championship;
pub mod error;
pub mod occurrence;
pub mod owner;
pub mod record;
pub mod rivalry;
pub mod service;
pub mod show;
pub mod store;
pub mod storyline;
pub mod timeline;
pub mod wrestler;

pub use error::{Error, Result};
pub use owner::OwnerId;
pub use record::{Record, Table};

#[cfg(test)]
mod testing;

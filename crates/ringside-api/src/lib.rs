//! JSON REST API for Ringside.
//!
//! Exposes an axum [`Router`] backed by any [`ringside_core::store::EntityStore`].
//! Every handler is scoped by the [`OwnerId`](ringside_core::OwnerId) found in
//! the request extensions; authenticating the request and inserting that
//! extension is the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", ringside_api::api_router(store.clone()))
//! ```

pub mod calendar;
pub mod championships;
pub mod chronicles;
pub mod dataset;
pub mod error;
pub mod owner;
pub mod records;
pub mod shows;
pub mod wrestlers;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post},
};
use ringside_core::{
  championship::Championship, rivalry::Rivalry, show::Show,
  store::EntityStore, storyline::Storyline, wrestler::Wrestler,
};

pub use error::ApiError;
pub use owner::Owner;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: EntityStore + 'static,
{
  Router::new()
    // Wrestlers
    .route(
      "/wrestlers",
      get(wrestlers::list::<S>).post(records::create::<S, Wrestler>),
    )
    .route(
      "/wrestlers/{id}",
      get(records::get_one::<S, Wrestler>)
        .put(records::update::<S, Wrestler>)
        .delete(records::delete::<S, Wrestler>),
    )
    .route("/wrestlers/{id}/release", post(wrestlers::release::<S>))
    .route("/wrestlers/{id}/sign", post(wrestlers::sign::<S>))
    .route("/wrestlers/{id}/titles", get(wrestlers::titles::<S>))
    // Championships
    .route(
      "/championships",
      get(championships::list::<S>).post(records::create::<S, Championship>),
    )
    .route(
      "/championships/{id}",
      get(records::get_one::<S, Championship>)
        .put(records::update::<S, Championship>)
        .delete(records::delete::<S, Championship>),
    )
    .route("/championships/{id}/status", get(championships::status::<S>))
    .route("/championships/{id}/assign", post(championships::assign::<S>))
    .route("/championships/{id}/vacate", post(championships::vacate::<S>))
    .route(
      "/championships/{id}/history/{index}",
      delete(championships::delete_reign::<S>),
    )
    // Shows
    .route("/shows", get(shows::list::<S>).post(records::create::<S, Show>))
    .route(
      "/shows/{id}",
      get(records::get_one::<S, Show>)
        .put(records::update::<S, Show>)
        .delete(shows::delete::<S>),
    )
    .route("/shows/{id}/instances", post(shows::materialize::<S>))
    .route("/shows/{id}/matches", post(shows::book::<S>))
    .route(
      "/shows/{id}/matches/{match_id}",
      delete(shows::remove_match::<S>),
    )
    // Calendar
    .route("/calendar", get(calendar::day::<S>))
    .route("/calendar/month", get(calendar::month::<S>))
    // Rivalries
    .route(
      "/rivalries",
      get(chronicles::list_rivalries::<S>).post(records::create::<S, Rivalry>),
    )
    .route(
      "/rivalries/{id}",
      get(records::get_one::<S, Rivalry>)
        .put(records::update::<S, Rivalry>)
        .delete(records::delete::<S, Rivalry>),
    )
    .route("/rivalries/{id}/timeline", post(chronicles::append::<S, Rivalry>))
    .route(
      "/rivalries/{id}/conclude",
      post(chronicles::conclude_rivalry::<S>),
    )
    // Storylines
    .route(
      "/storylines",
      get(chronicles::list_storylines::<S>)
        .post(records::create::<S, Storyline>),
    )
    .route(
      "/storylines/{id}",
      get(records::get_one::<S, Storyline>)
        .put(records::update::<S, Storyline>)
        .delete(records::delete::<S, Storyline>),
    )
    .route(
      "/storylines/{id}/timeline",
      post(chronicles::append::<S, Storyline>),
    )
    .route(
      "/storylines/{id}/status",
      post(chronicles::set_storyline_status::<S>),
    )
    // Export / import
    .route("/export", get(dataset::export::<S>))
    .route("/import", post(dataset::import::<S>))
    .with_state(store)
}

//! Router tests against an in-memory SQLite store.

use std::sync::Arc;

use axum::{
  Extension, Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use ringside_core::OwnerId;
use ringside_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn store() -> Arc<SqliteStore> {
  Arc::new(SqliteStore::open_in_memory().await.unwrap())
}

fn app_for(store: Arc<SqliteStore>, owner: &str) -> Router {
  api_router(store).layer(Extension(OwnerId::from(owner)))
}

async fn app() -> Router { app_for(store().await, "alice") }

async fn send(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  let resp = app
    .clone()
    .oneshot(builder.body(body).unwrap())
    .await
    .unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
    .await
    .unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, value)
}

// ─── Owner scoping ───────────────────────────────────────────────────────────

#[tokio::test]
async fn request_without_owner_is_unauthorized() {
  let app = api_router(store().await);
  let (status, body) = send(&app, "GET", "/wrestlers", None).await;
  assert_eq!(status, StatusCode::UNAUTHORIZED);
  assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn owners_do_not_see_each_other() {
  let store = store().await;
  let alice = app_for(store.clone(), "alice");
  let bob = app_for(store, "bob");

  let (_, w) = send(&alice, "POST", "/wrestlers", Some(json!({"name": "Alice"}))).await;
  let uri = format!("/wrestlers/{}", w["id"].as_str().unwrap());

  let (status, _) = send(&bob, "GET", &uri, None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  let (_, list) = send(&bob, "GET", "/wrestlers", None).await;
  assert_eq!(list, json!([]));
}

// ─── Wrestlers ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn wrestler_crud_and_filters() {
  let app = app().await;
  let (status, created) = send(
    &app,
    "POST",
    "/wrestlers",
    Some(json!({"name": "Alice", "brand": "Red", "alignment": "heel"})),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  let id = created["id"].as_str().unwrap().to_owned();
  send(&app, "POST", "/wrestlers", Some(json!({"name": "Bob", "brand": "Blue"}))).await;

  let (_, heels) = send(&app, "GET", "/wrestlers?alignment=heel", None).await;
  assert_eq!(heels.as_array().unwrap().len(), 1);
  assert_eq!(heels[0]["name"], "Alice");

  let (_, red) = send(&app, "GET", "/wrestlers?brand=red", None).await;
  assert_eq!(red.as_array().unwrap().len(), 1);

  let mut edited = created.clone();
  edited["injured"] = json!(true);
  let (status, updated) =
    send(&app, "PUT", &format!("/wrestlers/{id}"), Some(edited)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["injured"], true);

  let (_, available) = send(&app, "GET", "/wrestlers?available=true", None).await;
  assert_eq!(available.as_array().unwrap().len(), 1);
  assert_eq!(available[0]["name"], "Bob");

  let (status, _) = send(&app, "DELETE", &format!("/wrestlers/{id}"), None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);
  let (status, _) = send(&app, "DELETE", &format!("/wrestlers/{id}"), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_wrestler_is_rejected() {
  let app = app().await;
  let (status, body) =
    send(&app, "POST", "/wrestlers", Some(json!({"name": "  "}))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn wrestler_gender_accepts_other() {
  let app = app().await;
  let (status, w) = send(
    &app,
    "POST",
    "/wrestlers",
    Some(json!({"name": "Alex", "gender": "other"})),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(w["gender"], "other");

  let (_, others) = send(&app, "GET", "/wrestlers?gender=other", None).await;
  assert_eq!(others.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn release_sign_and_titles() {
  let app = app().await;
  let (_, w) = send(&app, "POST", "/wrestlers", Some(json!({"name": "Alice", "brand": "Red"}))).await;
  let id = w["id"].as_str().unwrap().to_owned();

  let (_, released) =
    send(&app, "POST", &format!("/wrestlers/{id}/release"), None).await;
  assert_eq!(released["free_agent"], true);

  let (_, signed) = send(
    &app,
    "POST",
    &format!("/wrestlers/{id}/sign"),
    Some(json!({"brand": "Blue"})),
  )
  .await;
  assert_eq!(signed["free_agent"], false);
  assert_eq!(signed["brand"], "Blue");

  let (_, title) =
    send(&app, "POST", "/championships", Some(json!({"name": "World"}))).await;
  let title_id = title["id"].as_str().unwrap();
  send(
    &app,
    "POST",
    &format!("/championships/{title_id}/assign"),
    Some(json!({"champion": "Alice", "event": "Mania", "date": "2024-01-01"})),
  )
  .await;

  let (status, titles) =
    send(&app, "GET", &format!("/wrestlers/{id}/titles"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(titles[0]["name"], "World");
}

// ─── Championships ───────────────────────────────────────────────────────────

#[tokio::test]
async fn reign_ledger_over_http() {
  let app = app().await;
  let (_, title) = send(
    &app,
    "POST",
    "/championships",
    Some(json!({"name": "World Title", "brand": "Red"})),
  )
  .await;
  let base = format!("/championships/{}", title["id"].as_str().unwrap());

  send(
    &app,
    "POST",
    &format!("{base}/assign"),
    Some(json!({"champion": "Alice", "event": "Event1", "date": "2024-01-01"})),
  )
  .await;
  let (status, title) = send(
    &app,
    "POST",
    &format!("{base}/assign"),
    Some(json!({"champion": "Bob", "event": "Event2", "date": "2024-01-11"})),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(title["current_champion"], "Bob");
  assert_eq!(title["history"][0]["days"], 10);
  assert_eq!(title["history"][0]["end"], "2024-01-11");

  let (status, body) = send(
    &app,
    "POST",
    &format!("{base}/vacate"),
    Some(json!({"date": "2024-01-05"})),
  )
  .await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  assert!(body["error"].is_string());

  let (_, vacated) = send(
    &app,
    "POST",
    &format!("{base}/vacate"),
    Some(json!({"date": "2024-02-01"})),
  )
  .await;
  assert_eq!(vacated["current_champion"], Value::Null);

  let (status, _) =
    send(&app, "DELETE", &format!("{base}/history/7"), None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, removed) =
    send(&app, "DELETE", &format!("{base}/history/1"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(removed["removed"]["champion"], "Bob");
  assert_eq!(removed["championship"]["history"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn inconsistent_championships_are_rejected() {
  let app = app().await;
  let (status, _) = send(
    &app,
    "POST",
    "/championships",
    Some(json!({"name": "World", "current_champion": "Alice", "reign_start": "2024-01-01"})),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = send(
    &app,
    "POST",
    "/championships",
    Some(json!({
      "name": "Tag",
      "history": [{"champion": "Bob", "start": "2024-01-01", "days": 0, "event": "e"}]
    })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (_, title) =
    send(&app, "POST", "/championships", Some(json!({"name": "IC"}))).await;
  let mut edited = title.clone();
  edited["current_champion"] = json!("Alice");
  edited["reign_start"] = json!("2024-01-01");
  let (status, _) = send(
    &app,
    "PUT",
    &format!("/championships/{}", title["id"].as_str().unwrap()),
    Some(edited),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (_, all) = send(&app, "GET", "/championships", None).await;
  assert_eq!(all.as_array().unwrap().len(), 1);
  assert_eq!(all[0]["current_champion"], Value::Null);
}

#[tokio::test]
async fn championship_status_view() {
  let app = app().await;
  let (_, title) =
    send(&app, "POST", "/championships", Some(json!({"name": "World"}))).await;
  let base = format!("/championships/{}", title["id"].as_str().unwrap());

  let (status, vacant) =
    send(&app, "GET", &format!("{base}/status?as_of=2024-01-01"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(vacant["status"]["state"], "vacant");
  assert_eq!(vacant["reign_days"], Value::Null);

  send(
    &app,
    "POST",
    &format!("{base}/assign"),
    Some(json!({"champion": "Alice", "event": "Mania", "date": "2024-01-01"})),
  )
  .await;
  let (_, held) =
    send(&app, "GET", &format!("{base}/status?as_of=2024-03-01"), None).await;
  assert_eq!(held["status"]["state"], "held");
  assert_eq!(held["status"]["champion"], "Alice");
  assert_eq!(held["status"]["since"], "2024-01-01");
  assert_eq!(held["reign_days"], 60);
  assert_eq!(held["as_of"], "2024-03-01");
}

#[tokio::test]
async fn championships_filter_by_brand() {
  let app = app().await;
  send(&app, "POST", "/championships", Some(json!({"name": "World", "brand": "Red"}))).await;
  send(&app, "POST", "/championships", Some(json!({"name": "Tag", "brand": "Blue"}))).await;

  let (_, blue) = send(&app, "GET", "/championships?brand=blue", None).await;
  assert_eq!(blue.as_array().unwrap().len(), 1);
  assert_eq!(blue[0]["name"], "Tag");
}

// ─── Shows and calendar ──────────────────────────────────────────────────────

#[tokio::test]
async fn booking_against_template_materialises_instance() {
  let app = app().await;
  let (status, tpl) = send(
    &app,
    "POST",
    "/shows",
    Some(json!({
      "name": "Saturday Slam",
      "brand": "Blue",
      "frequency": "weekly",
      "date": "2024-06-01"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(tpl["is_template"], true);
  let tpl_id = tpl["id"].as_str().unwrap().to_owned();

  let (status, inst) = send(
    &app,
    "POST",
    &format!("/shows/{tpl_id}/matches"),
    Some(json!({
      "date": "2024-06-08",
      "match": {"participants": ["Alice", "Bob"], "type": "ladder"}
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(inst["is_template"], false);
  assert_eq!(inst["base_show_id"], tpl["id"]);
  assert_eq!(inst["matches"][0]["type"], "ladder");

  // Materialising the same date again returns the existing instance.
  let (_, again) = send(
    &app,
    "POST",
    &format!("/shows/{tpl_id}/instances"),
    Some(json!({"date": "2024-06-08"})),
  )
  .await;
  assert_eq!(again["id"], inst["id"]);

  let (_, day) = send(&app, "GET", "/calendar?date=2024-06-08", None).await;
  assert_eq!(day.as_array().unwrap().len(), 1);
  assert_eq!(day[0]["id"], inst["id"]);

  let (_, month) =
    send(&app, "GET", "/calendar/month?year=2024&month=6", None).await;
  assert_eq!(month.as_array().unwrap().len(), 30);

  let (_, templates) = send(&app, "GET", "/shows?templates=true", None).await;
  assert_eq!(templates.as_array().unwrap().len(), 1);

  let match_id = inst["matches"][0]["id"].as_str().unwrap();
  let (status, emptied) = send(
    &app,
    "DELETE",
    &format!("/shows/{}/matches/{match_id}", inst["id"].as_str().unwrap()),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(emptied["matches"], json!([]));
  let (status, body) = send(
    &app,
    "DELETE",
    &format!("/shows/{}/matches/{match_id}", inst["id"].as_str().unwrap()),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains(match_id));

  let (status, report) =
    send(&app, "DELETE", &format!("/shows/{tpl_id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(report["succeeded"], 2);
  let (_, left) = send(&app, "GET", "/shows", None).await;
  assert_eq!(left, json!([]));
}

#[tokio::test]
async fn booking_needs_two_participants_and_a_date() {
  let app = app().await;
  let (_, tpl) = send(
    &app,
    "POST",
    "/shows",
    Some(json!({"name": "Slam", "frequency": "weekly", "date": "2024-06-01"})),
  )
  .await;
  let uri = format!("/shows/{}/matches", tpl["id"].as_str().unwrap());

  let (status, _) = send(
    &app,
    "POST",
    &uri,
    Some(json!({"date": "2024-06-08", "match": {"participants": ["Alice"]}})),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = send(
    &app,
    "POST",
    &uri,
    Some(json!({"match": {"participants": ["Alice", "Bob"]}})),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn month_view_rejects_bad_month() {
  let app = app().await;
  let (status, _) =
    send(&app, "GET", "/calendar/month?year=2024&month=13", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ─── Rivalries and storylines ────────────────────────────────────────────────

#[tokio::test]
async fn concluded_rivalry_rejects_timeline_events() {
  let app = app().await;
  let (status, rivalry) = send(
    &app,
    "POST",
    "/rivalries",
    Some(json!({"title": "Red vs Blue", "participants": ["Alice", "Bob"]})),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  let base = format!("/rivalries/{}", rivalry["id"].as_str().unwrap());

  let (status, r) = send(
    &app,
    "POST",
    &format!("{base}/timeline"),
    Some(json!({"date": "2024-03-01", "type": "promo", "description": "Callout"})),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(r["timeline"].as_array().unwrap().len(), 1);

  let (_, concluded) = send(
    &app,
    "POST",
    &format!("{base}/conclude"),
    Some(json!({"date": "2024-04-01"})),
  )
  .await;
  assert_eq!(concluded["status"], "concluded");
  assert_eq!(concluded["end_date"], "2024-04-01");

  let (status, _) = send(
    &app,
    "POST",
    &format!("{base}/timeline"),
    Some(json!({"date": "2024-04-02", "description": "Rematch"})),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (_, active) = send(&app, "GET", "/rivalries?status=active", None).await;
  assert_eq!(active, json!([]));
}

#[tokio::test]
async fn storyline_status_transitions() {
  let app = app().await;
  let (_, s) = send(
    &app,
    "POST",
    "/storylines",
    Some(json!({"title": "The Heist", "participants": ["Alice"]})),
  )
  .await;
  assert_eq!(s["status"], "planned");
  let uri = format!("/storylines/{}/status", s["id"].as_str().unwrap());

  let (_, active) = send(
    &app,
    "POST",
    &uri,
    Some(json!({"status": "active", "date": "2024-05-01"})),
  )
  .await;
  assert_eq!(active["status"], "active");
  assert_eq!(active["start_date"], "2024-05-01");

  let (_, planned) = send(&app, "GET", "/storylines?status=planned", None).await;
  assert_eq!(planned, json!([]));
}

// ─── Export / import ─────────────────────────────────────────────────────────

#[tokio::test]
async fn export_then_import_into_another_owner() {
  let store = store().await;
  let alice = app_for(store.clone(), "alice");
  let bob = app_for(store, "bob");

  send(&alice, "POST", "/wrestlers", Some(json!({"name": "Alice"}))).await;
  send(&alice, "POST", "/championships", Some(json!({"name": "World"}))).await;
  let (status, doc) = send(&alice, "GET", "/export", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(doc["wrestlers"].as_array().unwrap().len(), 1);

  let mut doc = doc;
  doc["shows"] = json!([{"name": "no date"}]);
  let (status, report) = send(&bob, "POST", "/import", Some(doc)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(report["wrestlers"]["succeeded"], 1);
  assert_eq!(report["championships"]["succeeded"], 1);
  assert_eq!(report["shows"]["failed"], 1);

  let (status, _) = send(&bob, "POST", "/import", Some(json!([1, 2]))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

//! HTTP Basic-auth middleware and standalone verifier.
//!
//! A successful check inserts the authenticated username into the request
//! extensions as an [`OwnerId`]; every API call is scoped by it.

use std::sync::Arc;

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use axum::{
  extract::{Request, State},
  http::HeaderMap,
  middleware::Next,
  response::Response,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use rand_core::OsRng;
use ringside_core::OwnerId;

use crate::error::Error;

/// Credentials accepted as valid for this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

/// Produce the argon2 PHC string for `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
  let salt = SaltString::generate(&mut OsRng);
  Ok(
    Argon2::default()
      .hash_password(password.as_bytes(), &salt)?
      .to_string(),
  )
}

/// Verify credentials directly from headers, returning the owner they map to.
pub fn verify_auth(headers: &HeaderMap, config: &AuthConfig) -> Result<OwnerId, Error> {
  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or(Error::Unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| Error::Unauthorized)?;
  let creds   = std::str::from_utf8(&decoded).map_err(|_| Error::Unauthorized)?;

  let (username, password) = creds.split_once(':').ok_or(Error::Unauthorized)?;

  if username != config.username {
    return Err(Error::Unauthorized);
  }

  let parsed_hash = PasswordHash::new(&config.password_hash)
    .map_err(|_| Error::Unauthorized)?;

  Argon2::default()
    .verify_password(password.as_bytes(), &parsed_hash)
    .map_err(|_| Error::Unauthorized)?;

  Ok(OwnerId::from(username))
}

/// Middleware: reject unauthenticated requests, tag the rest with their owner.
pub async fn require_auth(
  State(auth): State<Arc<AuthConfig>>,
  mut req: Request,
  next: Next,
) -> Result<Response, Error> {
  let owner = verify_auth(req.headers(), &auth).inspect_err(|_| {
    tracing::debug!(uri = %req.uri(), "rejected unauthenticated request");
  })?;
  req.extensions_mut().insert(owner);
  Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::http::{HeaderValue, header};

  fn config(password: &str) -> AuthConfig {
    AuthConfig {
      username:      "user".to_string(),
      password_hash: hash_password(password).unwrap(),
    }
  }

  fn headers(value: &str) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    map
  }

  fn basic(user: &str, pass: &str) -> String {
    let encoded = B64.encode(format!("{user}:{pass}"));
    format!("Basic {encoded}")
  }

  #[test]
  fn correct_credentials_yield_owner() {
    let cfg = config("secret");
    let owner = verify_auth(&headers(&basic("user", "secret")), &cfg).unwrap();
    assert_eq!(owner.as_str(), "user");
  }

  #[test]
  fn wrong_password() {
    let cfg = config("secret");
    let result = verify_auth(&headers(&basic("user", "wrong")), &cfg);
    assert!(matches!(result, Err(Error::Unauthorized)));
  }

  #[test]
  fn wrong_username() {
    let cfg = config("secret");
    let result = verify_auth(&headers(&basic("mallory", "secret")), &cfg);
    assert!(matches!(result, Err(Error::Unauthorized)));
  }

  #[test]
  fn missing_header() {
    let cfg = config("secret");
    let result = verify_auth(&HeaderMap::new(), &cfg);
    assert!(matches!(result, Err(Error::Unauthorized)));
  }

  #[test]
  fn invalid_base64() {
    let cfg = config("secret");
    let result = verify_auth(&headers("Basic !!!not-base64!!!"), &cfg);
    assert!(matches!(result, Err(Error::Unauthorized)));
  }

  #[test]
  fn malformed_hash_never_authenticates() {
    let cfg = AuthConfig {
      username:      "user".to_string(),
      password_hash: "not-a-phc-string".to_string(),
    };
    let result = verify_auth(&headers(&basic("user", "secret")), &cfg);
    assert!(matches!(result, Err(Error::Unauthorized)));
  }
}

// storefront_core/src/auth.rs

//! Bearer-token claims and the request guards shared by all services.
//!
//! Tokens are HS256 JWTs signed with a per-deployment secret. Every
//! verification failure (missing header, malformed token, expired token,
//! wrong secret) collapses into the same 403 response; the services do
//! not distinguish authentication from authorization failures.

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest, HttpResponse, ResponseError};
use chrono::{Duration, Utc};
use futures_util::future::{ready, Ready};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Role recorded in a customer's claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Customer,
  Admin,
}

impl Role {
  /// Lenient parse for values read from storage; anything unrecognized is
  /// a plain customer.
  pub fn parse(value: &str) -> Role {
    match value {
      "admin" => Role::Admin,
      _ => Role::Customer,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Role::Customer => "customer",
      Role::Admin => "admin",
    }
  }
}

/// Claims carried by a signed token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
  /// Customer id.
  pub sub: Uuid,
  pub email: String,
  pub role: Role,
  pub iat: i64,
  pub exp: i64,
}

/// App-data wrapper for the verification secret. Each service registers
/// one at server construction so the extractors below can reach it.
#[derive(Clone)]
pub struct TokenSecret(pub String);

#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Not Authorized")]
  NotAuthorized,

  #[error("Admins only")]
  AdminsOnly,

  #[error("Failed to sign token: {0}")]
  Signing(#[from] jsonwebtoken::errors::Error),
}

impl ResponseError for AuthError {
  fn error_response(&self) -> HttpResponse {
    match self {
      AuthError::NotAuthorized => {
        HttpResponse::Forbidden().json(json!({"message": "Not Authorized"}))
      }
      AuthError::AdminsOnly => HttpResponse::Forbidden().json(json!({"message": "Admins only"})),
      AuthError::Signing(_) => {
        HttpResponse::InternalServerError().json(json!({"message": "Token signing failed"}))
      }
    }
  }
}

/// Sign claims for a customer. `ttl` is added to the current time to form
/// the expiry.
pub fn generate_signature(
  customer_id: Uuid,
  email: &str,
  role: Role,
  secret: &str,
  ttl: Duration,
) -> Result<String, AuthError> {
  let now = Utc::now();
  let claims = Claims {
    sub: customer_id,
    email: email.to_string(),
    role,
    iat: now.timestamp(),
    exp: (now + ttl).timestamp(),
  };
  let token = encode(
    &Header::default(),
    &claims,
    &EncodingKey::from_secret(secret.as_bytes()),
  )?;
  Ok(token)
}

/// Verify a token and return its claims unchanged. The error is opaque on
/// purpose: callers answer 403 regardless of why verification failed.
pub fn validate_signature(token: &str, secret: &str) -> Result<Claims, AuthError> {
  decode::<Claims>(
    token,
    &DecodingKey::from_secret(secret.as_bytes()),
    &Validation::default(),
  )
  .map(|data| data.claims)
  .map_err(|_| AuthError::NotAuthorized)
}

fn claims_from_request(req: &HttpRequest) -> Result<Claims, AuthError> {
  let secret = req
    .app_data::<web::Data<TokenSecret>>()
    .ok_or(AuthError::NotAuthorized)?;
  let header_value = req
    .headers()
    .get(header::AUTHORIZATION)
    .and_then(|value| value.to_str().ok())
    .ok_or(AuthError::NotAuthorized)?;
  let token = header_value
    .strip_prefix("Bearer ")
    .ok_or(AuthError::NotAuthorized)?;
  validate_signature(token, &secret.0)
}

/// Extractor for routes that require a signed-in customer.
///
/// On success the decoded claims are attached to the handler unchanged.
#[derive(Debug)]
pub struct AuthenticatedUser {
  pub claims: Claims,
}

impl AuthenticatedUser {
  pub fn customer_id(&self) -> Uuid {
    self.claims.sub
  }
}

impl FromRequest for AuthenticatedUser {
  type Error = AuthError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(claims_from_request(req).map(|claims| AuthenticatedUser { claims }))
  }
}

/// Extractor for admin-gated routes: same verification as
/// [`AuthenticatedUser`] plus a role check. Any failure answers
/// "Admins only".
#[derive(Debug)]
pub struct AdminUser {
  pub claims: Claims,
}

impl FromRequest for AdminUser {
  type Error = AuthError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let result = claims_from_request(req)
      .map_err(|_| AuthError::AdminsOnly)
      .and_then(|claims| {
        if claims.role == Role::Admin {
          Ok(AdminUser { claims })
        } else {
          Err(AuthError::AdminsOnly)
        }
      });
    ready(result)
  }
}

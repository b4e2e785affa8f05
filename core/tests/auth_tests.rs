// tests/auth_tests.rs
mod common;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{test::TestRequest, web, FromRequest};
use chrono::Duration;
use common::setup_tracing;
use storefront_core::{
  generate_signature, validate_signature, AdminUser, AuthenticatedUser, Role, TokenSecret,
};
use uuid::Uuid;

const SECRET: &str = "test-secret";

fn signed_token(role: Role, ttl_seconds: i64) -> (Uuid, String) {
  let customer_id = Uuid::new_v4();
  let token = generate_signature(
    customer_id,
    "customer@example.com",
    role,
    SECRET,
    Duration::seconds(ttl_seconds),
  )
  .expect("signing should succeed");
  (customer_id, token)
}

#[test]
fn test_valid_token_roundtrips_claims() {
  setup_tracing();
  let (customer_id, token) = signed_token(Role::Customer, 3600);

  let claims = validate_signature(&token, SECRET).expect("a fresh token should validate");
  assert_eq!(claims.sub, customer_id);
  assert_eq!(claims.email, "customer@example.com");
  assert_eq!(claims.role, Role::Customer);
  assert!(claims.exp > claims.iat);
}

#[test]
fn test_expired_token_is_rejected() {
  // Expired an hour ago, well past the default leeway.
  let (_, token) = signed_token(Role::Customer, -3600);
  assert!(validate_signature(&token, SECRET).is_err());
}

#[test]
fn test_tampered_token_is_rejected() {
  let (_, token) = signed_token(Role::Customer, 3600);
  // Flip a character in the payload segment.
  let mut tampered = token.into_bytes();
  let mid = tampered.len() / 2;
  tampered[mid] = if tampered[mid] == b'A' { b'B' } else { b'A' };
  let tampered = String::from_utf8(tampered).expect("still utf-8");

  assert!(validate_signature(&tampered, SECRET).is_err());
}

#[test]
fn test_wrong_secret_is_rejected() {
  let (_, token) = signed_token(Role::Customer, 3600);
  assert!(validate_signature(&token, "a-different-secret").is_err());
}

#[tokio::test]
async fn test_authenticated_user_extractor_attaches_claims() {
  setup_tracing();
  let (customer_id, token) = signed_token(Role::Customer, 3600);

  let req = TestRequest::default()
    .app_data(web::Data::new(TokenSecret(SECRET.to_string())))
    .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
    .to_http_request();

  let user = AuthenticatedUser::from_request(&req, &mut Payload::None)
    .await
    .expect("a valid bearer token should pass the guard");
  assert_eq!(user.customer_id(), customer_id);
}

#[tokio::test]
async fn test_missing_header_fails_the_guard() {
  let req = TestRequest::default()
    .app_data(web::Data::new(TokenSecret(SECRET.to_string())))
    .to_http_request();

  assert!(AuthenticatedUser::from_request(&req, &mut Payload::None)
    .await
    .is_err());
}

#[tokio::test]
async fn test_non_bearer_scheme_fails_the_guard() {
  let (_, token) = signed_token(Role::Customer, 3600);
  let req = TestRequest::default()
    .app_data(web::Data::new(TokenSecret(SECRET.to_string())))
    .insert_header((header::AUTHORIZATION, format!("Basic {}", token)))
    .to_http_request();

  assert!(AuthenticatedUser::from_request(&req, &mut Payload::None)
    .await
    .is_err());
}

#[tokio::test]
async fn test_customer_token_fails_the_admin_guard() {
  let (_, token) = signed_token(Role::Customer, 3600);
  let req = TestRequest::default()
    .app_data(web::Data::new(TokenSecret(SECRET.to_string())))
    .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
    .to_http_request();

  assert!(
    AuthenticatedUser::from_request(&req, &mut Payload::None)
      .await
      .is_ok(),
    "a customer token passes the plain guard"
  );
  assert!(
    AdminUser::from_request(&req, &mut Payload::None).await.is_err(),
    "but not the admin guard"
  );
}

#[tokio::test]
async fn test_admin_token_passes_the_admin_guard() {
  let (customer_id, token) = signed_token(Role::Admin, 3600);
  let req = TestRequest::default()
    .app_data(web::Data::new(TokenSecret(SECRET.to_string())))
    .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
    .to_http_request();

  let admin = AdminUser::from_request(&req, &mut Payload::None)
    .await
    .expect("an admin token should pass the admin guard");
  assert_eq!(admin.claims.sub, customer_id);
}

// customer/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::customer_service;
use crate::state::AppState;
use storefront_core::{generate_signature, Role};

#[derive(Deserialize, Debug)]
pub struct SignupPayload {
  pub email: String,
  pub password: String,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default)]
  pub role: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct SigninPayload {
  pub email: String,
  pub password: String,
}

#[instrument(name = "handler::signup", skip(app_state, payload), fields(email = %payload.email))]
pub async fn signup_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<SignupPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  let role = payload.role.as_deref().unwrap_or("customer");

  let customer = customer_service::sign_up(
    &app_state.db_pool,
    &payload.email,
    &payload.password,
    payload.phone.as_deref(),
    role,
  )
  .await?;
  info!(customer_id = %customer.id, "Customer registered.");

  let token = generate_signature(
    customer.id,
    &customer.email,
    Role::parse(&customer.role),
    &app_state.config.app_secret,
    app_state.config.token_ttl(),
  )?;

  Ok(HttpResponse::Created().json(json!({
    "id": customer.id,
    "email": customer.email,
    "token": token
  })))
}

#[instrument(name = "handler::signin", skip(app_state, payload), fields(email = %payload.email))]
pub async fn signin_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<SigninPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();

  let customer =
    customer_service::sign_in(&app_state.db_pool, &payload.email, &payload.password).await?;

  let token = generate_signature(
    customer.id,
    &customer.email,
    Role::parse(&customer.role),
    &app_state.config.app_secret,
    app_state.config.token_ttl(),
  )?;

  Ok(HttpResponse::Ok().json(json!({
    "id": customer.id,
    "email": customer.email,
    "token": token
  })))
}

// shopping/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::shopping_service;
use crate::state::AppState;
use crate::web::handlers::publish_or_log;
use storefront_core::{AuthenticatedUser, EventMessage, ProductRef};

#[derive(Deserialize, Debug)]
pub struct ManageCartPayload {
  pub product: ProductRef,
  #[serde(default = "default_qty")]
  pub qty: i32,
}

fn default_qty() -> i32 {
  1
}

#[instrument(
  name = "handler::add_to_cart",
  skip(app_state, payload, auth_user),
  fields(customer_id = %auth_user.customer_id(), product_id = %payload.product.id, qty = payload.qty)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ManageCartPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let customer_id = auth_user.customer_id();
  let payload = payload.into_inner();

  let cart = shopping_service::manage_cart(
    &app_state.db_pool,
    customer_id,
    &payload.product,
    payload.qty,
    false,
  )
  .await?;

  publish_or_log(
    &app_state,
    EventMessage::add_to_cart(customer_id, payload.product, payload.qty),
  )
  .await;

  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(
  name = "handler::remove_from_cart",
  skip(app_state, auth_user),
  fields(customer_id = %auth_user.customer_id(), product_id = %path)
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let customer_id = auth_user.customer_id();
  let product_id = path.into_inner();

  // Look the line up first: the removal event carries the snapshot that
  // was in the cart, and removing a line that isn't there publishes
  // nothing.
  let cart = shopping_service::get_cart(&app_state.db_pool, customer_id).await?;
  let Some(line) = cart.iter().find(|line| line.product_id == product_id).cloned() else {
    return Ok(HttpResponse::Ok().json(cart));
  };

  let product = line.product_ref();
  let cart =
    shopping_service::manage_cart(&app_state.db_pool, customer_id, &product, line.quantity, true)
      .await?;

  publish_or_log(
    &app_state,
    EventMessage::remove_from_cart(customer_id, product, line.quantity),
  )
  .await;

  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(
  name = "handler::get_cart",
  skip(app_state, auth_user),
  fields(customer_id = %auth_user.customer_id())
)]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let cart = shopping_service::get_cart(&app_state.db_pool, auth_user.customer_id()).await?;
  Ok(HttpResponse::Ok().json(cart))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_cart_payload_quantity_defaults_to_one() {
    let raw = r#"{"product": {"id": "7f8d8f7e-4c5a-4d7b-9b1a-2f3e4d5c6b7a", "name": "apples", "priceCents": 300}}"#;
    let payload: ManageCartPayload = serde_json::from_str(raw).expect("payload should deserialize");
    assert_eq!(payload.qty, 1);
    assert_eq!(payload.product.name, "apples");
    assert!(payload.product.banner.is_none());
  }
}

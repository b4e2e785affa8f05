// shopping/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::shopping_service;
use crate::state::AppState;
use crate::web::handlers::publish_or_log;
use storefront_core::{AuthenticatedUser, EventMessage};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderPayload {
  pub txn_number: String,
}

#[instrument(
  name = "handler::place_order",
  skip(app_state, payload, auth_user),
  fields(customer_id = %auth_user.customer_id())
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<PlaceOrderPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let customer_id = auth_user.customer_id();

  let details =
    shopping_service::place_order(&app_state.db_pool, customer_id, &payload.txn_number).await?;
  info!(order_id = %details.order.id, lines = details.items.len(), "Order placed.");

  // The order already exists at this point; a failed publish is logged and
  // nothing compensates for it.
  let snapshot = shopping_service::order_snapshot(&details);
  publish_or_log(&app_state, EventMessage::create_order(customer_id, snapshot)).await;

  Ok(HttpResponse::Ok().json(details))
}

#[instrument(
  name = "handler::get_orders",
  skip(app_state, auth_user),
  fields(customer_id = %auth_user.customer_id())
)]
pub async fn get_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let orders = shopping_service::get_orders(&app_state.db_pool, auth_user.customer_id()).await?;
  Ok(HttpResponse::Ok().json(orders))
}

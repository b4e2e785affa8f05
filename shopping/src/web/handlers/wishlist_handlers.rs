// shopping/src/web/handlers/wishlist_handlers.rs

//! Wishlist writes hold no local state: the only stored wishlist lives in
//! the customer service's mirror, so these handlers publish and answer.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::publish_or_log;
use storefront_core::{AuthenticatedUser, EventMessage, ProductRef};

#[derive(Deserialize, Debug)]
pub struct WishlistPayload {
  pub product: ProductRef,
}

#[instrument(
  name = "handler::add_to_wishlist",
  skip(app_state, payload, auth_user),
  fields(customer_id = %auth_user.customer_id(), product_id = %payload.product.id)
)]
pub async fn add_to_wishlist_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<WishlistPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let customer_id = auth_user.customer_id();
  let product = payload.into_inner().product;

  publish_or_log(
    &app_state,
    EventMessage::add_to_wishlist(customer_id, product.clone()),
  )
  .await;

  Ok(HttpResponse::Ok().json(product))
}

#[instrument(
  name = "handler::remove_from_wishlist",
  skip(app_state, auth_user),
  fields(customer_id = %auth_user.customer_id(), product_id = %path)
)]
pub async fn remove_from_wishlist_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let customer_id = auth_user.customer_id();
  let product_id = path.into_inner();

  // Only the id is known on removal; the mirror keys wishlist entries by
  // product id.
  let product = ProductRef {
    id: product_id,
    name: String::new(),
    price_cents: 0,
    banner: None,
  };
  publish_or_log(
    &app_state,
    EventMessage::remove_from_wishlist(customer_id, product),
  )
  .await;

  Ok(HttpResponse::Ok().json(json!({ "productId": product_id })))
}

// customer/src/web/handlers/profile_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::errors::AppError;
use crate::services::customer_service;
use crate::state::AppState;
use storefront_core::AuthenticatedUser;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewAddressPayload {
  pub street: String,
  pub postal_code: String,
  pub city: String,
  pub country: String,
}

#[instrument(
  name = "handler::add_address",
  skip(app_state, payload, auth_user),
  fields(customer_id = %auth_user.customer_id())
)]
pub async fn add_address_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewAddressPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  let address = customer_service::add_address(
    &app_state.db_pool,
    auth_user.customer_id(),
    &payload.street,
    &payload.postal_code,
    &payload.city,
    &payload.country,
  )
  .await?;
  Ok(HttpResponse::Ok().json(address))
}

#[instrument(
  name = "handler::get_profile",
  skip(app_state, auth_user),
  fields(customer_id = %auth_user.customer_id())
)]
pub async fn get_profile_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let profile =
    customer_service::get_profile(&app_state.db_pool, auth_user.customer_id()).await?;
  // A vanished customer serializes as `null` rather than a 404.
  Ok(HttpResponse::Ok().json(profile))
}

#[instrument(
  name = "handler::get_wishlist",
  skip(app_state, auth_user),
  fields(customer_id = %auth_user.customer_id())
)]
pub async fn get_wishlist_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let items =
    customer_service::get_wishlist(&app_state.db_pool, auth_user.customer_id()).await?;
  Ok(HttpResponse::Ok().json(items))
}

#[instrument(
  name = "handler::get_shopping_details",
  skip(app_state, auth_user),
  fields(customer_id = %auth_user.customer_id())
)]
pub async fn get_shopping_details_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let details =
    customer_service::get_shopping_details(&app_state.db_pool, auth_user.customer_id()).await?;
  Ok(HttpResponse::Ok().json(details))
}

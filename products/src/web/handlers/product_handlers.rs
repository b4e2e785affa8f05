// products/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::product::NewProduct;
use crate::services::product_service;
use crate::state::AppState;
use storefront_core::AdminUser;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
  let products = product_service::get_products(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state), fields(product_id = %path))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product = product_service::get_product_by_id(&app_state.db_pool, path.into_inner()).await?;
  // A missing product serializes as `null`; lookups answer empty payloads
  // rather than 404s.
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::products_by_category", skip(app_state), fields(category = %path))]
pub async fn category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let products =
    product_service::get_products_by_category(&app_state.db_pool, &path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[derive(Deserialize, Debug)]
pub struct SelectedProductsPayload {
  pub ids: Vec<Uuid>,
}

#[instrument(name = "handler::selected_products", skip(app_state, payload), fields(count = payload.ids.len()))]
pub async fn selected_products_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<SelectedProductsPayload>,
) -> Result<HttpResponse, AppError> {
  let products =
    product_service::get_selected_products(&app_state.db_pool, &payload.ids).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(
  name = "handler::create_product",
  skip(app_state, payload, admin),
  fields(admin_id = %admin.claims.sub, name = %payload.name)
)]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewProduct>,
  admin: AdminUser,
) -> Result<HttpResponse, AppError> {
  let product = product_service::create_product(&app_state.db_pool, payload.into_inner()).await?;
  info!(product_id = %product.id, "Catalog entry created.");
  Ok(HttpResponse::Created().json(product))
}

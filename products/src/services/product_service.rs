// products/src/services/product_service.rs

//! Catalog queries and the startup seed.

use crate::errors::Result;
use crate::models::product::{NewProduct, Product};
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

const SEED_DATA: &str = include_str!("../../sampledata.json");

#[instrument(name = "product_service::get_products", skip(pool))]
pub async fn get_products(pool: &PgPool) -> Result<Vec<Product>> {
  let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at DESC")
    .fetch_all(pool)
    .await?;
  Ok(products)
}

/// A missing id yields `None`; callers answer an empty payload, not a 404.
#[instrument(name = "product_service::get_product_by_id", skip(pool))]
pub async fn get_product_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Product>> {
  let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
    .bind(id)
    .fetch_optional(pool)
    .await?;
  Ok(product)
}

#[instrument(name = "product_service::get_products_by_category", skip(pool))]
pub async fn get_products_by_category(pool: &PgPool, category: &str) -> Result<Vec<Product>> {
  let products = sqlx::query_as::<_, Product>(
    "SELECT * FROM products WHERE product_type = $1 ORDER BY created_at DESC",
  )
  .bind(category)
  .fetch_all(pool)
  .await?;
  Ok(products)
}

/// Batch lookup used by clients that resolve id lists (wishlists, carts).
#[instrument(name = "product_service::get_selected_products", skip(pool, ids), fields(count = ids.len()))]
pub async fn get_selected_products(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Product>> {
  let products = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ANY($1)")
    .bind(ids)
    .fetch_all(pool)
    .await?;
  Ok(products)
}

#[instrument(name = "product_service::create_product", skip(pool, new_product), fields(name = %new_product.name))]
pub async fn create_product(pool: &PgPool, new_product: NewProduct) -> Result<Product> {
  let product = sqlx::query_as::<_, Product>(
    r#"
    INSERT INTO products
      (id, name, description, banner, product_type, unit, price_cents, available, supplier, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now(), now())
    RETURNING *
    "#,
  )
  .bind(Uuid::new_v4())
  .bind(&new_product.name)
  .bind(&new_product.description)
  .bind(&new_product.banner)
  .bind(&new_product.product_type)
  .bind(new_product.unit)
  .bind(new_product.price_cents)
  .bind(new_product.available)
  .bind(&new_product.supplier)
  .fetch_one(pool)
  .await?;
  Ok(product)
}

/// Insert the bundled sample catalog when the table is empty.
#[instrument(name = "product_service::seed_catalog", skip(pool))]
pub async fn seed_catalog(pool: &PgPool) -> Result<()> {
  let count: i64 = sqlx::query_scalar("SELECT count(*) FROM products")
    .fetch_one(pool)
    .await?;
  if count > 0 {
    info!(existing = count, "Products already exist, skipping seeding.");
    return Ok(());
  }

  let entries = parse_seed_data(SEED_DATA)
    .map_err(|e| crate::errors::AppError::Internal(format!("Invalid seed data: {}", e)))?;
  let inserted = entries.len();
  for entry in entries {
    create_product(pool, entry).await?;
  }
  info!(inserted, "Sample catalog inserted successfully.");
  Ok(())
}

fn parse_seed_data(raw: &str) -> std::result::Result<Vec<NewProduct>, serde_json::Error> {
  serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bundled_seed_data_parses() {
    let entries = parse_seed_data(SEED_DATA).expect("sampledata.json should parse");
    assert!(!entries.is_empty(), "seed catalog should not be empty");
    for entry in &entries {
      assert!(!entry.name.is_empty());
      assert!(!entry.product_type.is_empty());
      assert!(entry.price_cents > 0, "seed prices are positive cents");
    }
  }

  #[test]
  fn test_new_product_defaults() {
    let entry: NewProduct =
      serde_json::from_str(r#"{"name": "kiwi", "type": "fruits", "price_cents": 300}"#)
        .expect("minimal payload should deserialize");
    assert_eq!(entry.unit, 1);
    assert!(entry.available);
    assert!(entry.description.is_none());
    assert!(entry.supplier.is_none());
  }
}

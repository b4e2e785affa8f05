// customer/src/services/customer_service.rs

//! Customer identity and profile operations, plus the mirror mutations the
//! event subscriber applies.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::PgPool;
use storefront_core::{OrderSnapshot, ProductRef};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::address::Address;
use crate::models::customer::Customer;
use crate::models::mirror::{CartMirrorItem, MirroredOrder, WishlistItem};
use crate::services::auth_service;

/// A customer with their addresses, as shown on the profile page.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
  #[serde(flatten)]
  pub customer: Customer,
  pub addresses: Vec<Address>,
}

/// The mirrored cart and order copies, for profile display.
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingDetails {
  pub cart: Vec<CartMirrorItem>,
  pub orders: Vec<MirroredOrder>,
}

pub async fn find_customer_by_email(pool: &PgPool, email: &str) -> Result<Option<Customer>> {
  let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE email = $1")
    .bind(email)
    .fetch_optional(pool)
    .await?;
  Ok(customer)
}

#[instrument(name = "customer_service::sign_up", skip(pool, password), fields(email = %email))]
pub async fn sign_up(
  pool: &PgPool,
  email: &str,
  password: &str,
  phone: Option<&str>,
  role: &str,
) -> Result<Customer> {
  if find_customer_by_email(pool, email).await?.is_some() {
    return Err(AppError::Validation("Email is already registered.".to_string()));
  }

  let password_hash = auth_service::hash_password(password)?;
  let customer = sqlx::query_as::<_, Customer>(
    r#"
    INSERT INTO customers (id, email, password_hash, phone, role, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5, now(), now())
    RETURNING *
    "#,
  )
  .bind(Uuid::new_v4())
  .bind(email)
  .bind(&password_hash)
  .bind(phone)
  .bind(role)
  .fetch_one(pool)
  .await?;
  Ok(customer)
}

/// An unknown email and a wrong password answer the same generic 401.
#[instrument(name = "customer_service::sign_in", skip(pool, password), fields(email = %email))]
pub async fn sign_in(pool: &PgPool, email: &str, password: &str) -> Result<Customer> {
  let Some(customer) = find_customer_by_email(pool, email).await? else {
    return Err(AppError::Auth("Invalid email or password".to_string()));
  };

  if !auth_service::verify_password(&customer.password_hash, password)? {
    return Err(AppError::Auth("Invalid email or password".to_string()));
  }
  Ok(customer)
}

#[instrument(name = "customer_service::add_address", skip(pool, street, postal_code, city, country))]
pub async fn add_address(
  pool: &PgPool,
  customer_id: Uuid,
  street: &str,
  postal_code: &str,
  city: &str,
  country: &str,
) -> Result<Address> {
  let address = sqlx::query_as::<_, Address>(
    r#"
    INSERT INTO addresses (id, customer_id, street, postal_code, city, country)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING *
    "#,
  )
  .bind(Uuid::new_v4())
  .bind(customer_id)
  .bind(street)
  .bind(postal_code)
  .bind(city)
  .bind(country)
  .fetch_one(pool)
  .await?;
  Ok(address)
}

/// A missing customer yields `None`; callers answer an empty payload.
#[instrument(name = "customer_service::get_profile", skip(pool))]
pub async fn get_profile(pool: &PgPool, customer_id: Uuid) -> Result<Option<Profile>> {
  let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
    .bind(customer_id)
    .fetch_optional(pool)
    .await?;
  let Some(customer) = customer else {
    return Ok(None);
  };

  let addresses =
    sqlx::query_as::<_, Address>("SELECT * FROM addresses WHERE customer_id = $1")
      .bind(customer_id)
      .fetch_all(pool)
      .await?;
  Ok(Some(Profile { customer, addresses }))
}

#[instrument(name = "customer_service::get_wishlist", skip(pool))]
pub async fn get_wishlist(pool: &PgPool, customer_id: Uuid) -> Result<Vec<WishlistItem>> {
  let items = sqlx::query_as::<_, WishlistItem>(
    "SELECT * FROM wishlist_items WHERE customer_id = $1 ORDER BY added_at DESC",
  )
  .bind(customer_id)
  .fetch_all(pool)
  .await?;
  Ok(items)
}

#[instrument(name = "customer_service::get_shopping_details", skip(pool))]
pub async fn get_shopping_details(pool: &PgPool, customer_id: Uuid) -> Result<ShoppingDetails> {
  let cart = sqlx::query_as::<_, CartMirrorItem>(
    "SELECT * FROM cart_mirror_items WHERE customer_id = $1 ORDER BY added_at",
  )
  .bind(customer_id)
  .fetch_all(pool)
  .await?;
  let orders = sqlx::query_as::<_, MirroredOrder>(
    "SELECT * FROM order_mirror WHERE customer_id = $1 ORDER BY placed_at DESC",
  )
  .bind(customer_id)
  .fetch_all(pool)
  .await?;
  Ok(ShoppingDetails { cart, orders })
}

// --- Mirror mutations, applied by the event subscriber ---

/// Toggle a wishlist entry: delete it if present, insert it otherwise.
/// Both wishlist event names map here.
#[instrument(name = "customer_service::toggle_wishlist_item", skip(pool, product), fields(product_id = %product.id))]
pub async fn toggle_wishlist_item(
  pool: &PgPool,
  customer_id: Uuid,
  product: &ProductRef,
) -> Result<()> {
  let deleted =
    sqlx::query("DELETE FROM wishlist_items WHERE customer_id = $1 AND product_id = $2")
      .bind(customer_id)
      .bind(product.id)
      .execute(pool)
      .await?;
  if deleted.rows_affected() > 0 {
    debug!("Wishlist entry removed.");
    return Ok(());
  }

  sqlx::query(
    r#"
    INSERT INTO wishlist_items (id, customer_id, product_id, name, price_cents, banner, added_at)
    VALUES ($1, $2, $3, $4, $5, $6, now())
    ON CONFLICT (customer_id, product_id) DO NOTHING
    "#,
  )
  .bind(Uuid::new_v4())
  .bind(customer_id)
  .bind(product.id)
  .bind(&product.name)
  .bind(product.price_cents)
  .bind(&product.banner)
  .execute(pool)
  .await?;
  debug!("Wishlist entry added.");
  Ok(())
}

/// Upsert or delete one mirrored cart line.
#[instrument(name = "customer_service::manage_cart", skip(pool, product), fields(product_id = %product.id))]
pub async fn manage_cart(
  pool: &PgPool,
  customer_id: Uuid,
  product: &ProductRef,
  qty: i32,
  is_remove: bool,
) -> Result<()> {
  if is_remove {
    sqlx::query("DELETE FROM cart_mirror_items WHERE customer_id = $1 AND product_id = $2")
      .bind(customer_id)
      .bind(product.id)
      .execute(pool)
      .await?;
    return Ok(());
  }

  sqlx::query(
    r#"
    INSERT INTO cart_mirror_items
      (id, customer_id, product_id, name, price_cents, banner, quantity, added_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, now())
    ON CONFLICT (customer_id, product_id) DO UPDATE
    SET quantity = EXCLUDED.quantity,
        name = EXCLUDED.name,
        price_cents = EXCLUDED.price_cents,
        banner = EXCLUDED.banner,
        added_at = now()
    "#,
  )
  .bind(Uuid::new_v4())
  .bind(customer_id)
  .bind(product.id)
  .bind(&product.name)
  .bind(product.price_cents)
  .bind(&product.banner)
  .bind(qty)
  .execute(pool)
  .await?;
  Ok(())
}

/// Record an order in the mirror. Upserting on the order id keeps a
/// manually replayed `CREATE_ORDER` from violating the primary key.
#[instrument(name = "customer_service::record_order", skip(pool, order), fields(order_id = %order.id))]
pub async fn record_order(pool: &PgPool, customer_id: Uuid, order: &OrderSnapshot) -> Result<()> {
  sqlx::query(
    r#"
    INSERT INTO order_mirror
      (id, customer_id, status, total_amount_cents, items, placed_at, recorded_at)
    VALUES ($1, $2, $3, $4, $5, $6, now())
    ON CONFLICT (id) DO UPDATE
    SET status = EXCLUDED.status,
        total_amount_cents = EXCLUDED.total_amount_cents,
        items = EXCLUDED.items,
        recorded_at = now()
    "#,
  )
  .bind(order.id)
  .bind(customer_id)
  .bind(&order.status)
  .bind(order.total_amount_cents)
  .bind(Json(&order.items))
  .bind(order.placed_at)
  .execute(pool)
  .await?;
  Ok(())
}

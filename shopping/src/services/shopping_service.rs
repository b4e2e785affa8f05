// shopping/src/services/shopping_service.rs

//! Authoritative cart and order operations.
//!
//! None of these functions take a lock or a transaction spanning more than
//! one statement: two concurrent `place_order` calls for the same customer
//! read the same cart and produce two orders, and two concurrent
//! `manage_cart` calls race on the same line.

use sqlx::PgPool;
use storefront_core::{OrderLineItem, OrderSnapshot, ProductRef};
use tracing::instrument;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::cart_item::CartItem;
use crate::models::order::{Order, OrderDetails, OrderStatus};
use crate::models::order_item::OrderItem;

#[instrument(name = "shopping_service::get_cart", skip(pool))]
pub async fn get_cart(pool: &PgPool, customer_id: Uuid) -> Result<Vec<CartItem>> {
  let cart = sqlx::query_as::<_, CartItem>(
    "SELECT * FROM cart_items WHERE customer_id = $1 ORDER BY added_at",
  )
  .bind(customer_id)
  .fetch_all(pool)
  .await?;
  Ok(cart)
}

/// Upsert or delete one cart line, then return the whole cart.
///
/// An upsert replaces the line's quantity and snapshot; a delete removes
/// the line if present. There is no stock check, no quantity validation,
/// and no idempotency key.
#[instrument(
  name = "shopping_service::manage_cart",
  skip(pool, product),
  fields(product_id = %product.id)
)]
pub async fn manage_cart(
  pool: &PgPool,
  customer_id: Uuid,
  product: &ProductRef,
  qty: i32,
  is_remove: bool,
) -> Result<Vec<CartItem>> {
  if is_remove {
    sqlx::query("DELETE FROM cart_items WHERE customer_id = $1 AND product_id = $2")
      .bind(customer_id)
      .bind(product.id)
      .execute(pool)
      .await?;
  } else {
    sqlx::query(
      r#"
      INSERT INTO cart_items
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
  }

  get_cart(pool, customer_id).await
}

/// Copy the current cart into a new order and return it.
///
/// The cart is read and the order written without a surrounding
/// transaction. The cart is not checked for emptiness (an empty cart
/// yields an order with zero line items), `txn_number` is stored without
/// verification, no inventory is decremented, and the cart is not cleared
/// here; that is left to the event path.
#[instrument(name = "shopping_service::place_order", skip(pool, txn_number))]
pub async fn place_order(
  pool: &PgPool,
  customer_id: Uuid,
  txn_number: &str,
) -> Result<OrderDetails> {
  let cart = get_cart(pool, customer_id).await?;
  let total = order_total_cents(&cart);

  let order = sqlx::query_as::<_, Order>(
    r#"
    INSERT INTO orders (id, customer_id, status, total_amount_cents, txn_number, placed_at)
    VALUES ($1, $2, $3, $4, $5, now())
    RETURNING *
    "#,
  )
  .bind(Uuid::new_v4())
  .bind(customer_id)
  .bind(OrderStatus::Received)
  .bind(total)
  .bind(txn_number)
  .fetch_one(pool)
  .await?;

  let mut items = Vec::with_capacity(cart.len());
  for line in &cart {
    let item = sqlx::query_as::<_, OrderItem>(
      r#"
      INSERT INTO order_items (id, order_id, product_id, name, price_cents, banner, quantity)
      VALUES ($1, $2, $3, $4, $5, $6, $7)
      RETURNING *
      "#,
    )
    .bind(Uuid::new_v4())
    .bind(order.id)
    .bind(line.product_id)
    .bind(&line.name)
    .bind(line.price_cents)
    .bind(&line.banner)
    .bind(line.quantity)
    .fetch_one(pool)
    .await?;
    items.push(item);
  }

  Ok(OrderDetails { order, items })
}

#[instrument(name = "shopping_service::get_orders", skip(pool))]
pub async fn get_orders(pool: &PgPool, customer_id: Uuid) -> Result<Vec<OrderDetails>> {
  let orders = sqlx::query_as::<_, Order>(
    "SELECT * FROM orders WHERE customer_id = $1 ORDER BY placed_at DESC",
  )
  .bind(customer_id)
  .fetch_all(pool)
  .await?;

  let mut details = Vec::with_capacity(orders.len());
  for order in orders {
    let items =
      sqlx::query_as::<_, OrderItem>("SELECT * FROM order_items WHERE order_id = $1")
        .bind(order.id)
        .fetch_all(pool)
        .await?;
    details.push(OrderDetails { order, items });
  }
  Ok(details)
}

/// The snapshot published on `CREATE_ORDER`.
pub fn order_snapshot(details: &OrderDetails) -> OrderSnapshot {
  OrderSnapshot {
    id: details.order.id,
    status: details.order.status.as_str().to_string(),
    total_amount_cents: details.order.total_amount_cents,
    items: details
      .items
      .iter()
      .map(|item| OrderLineItem {
        product: item.product_ref(),
        quantity: item.quantity,
      })
      .collect(),
    placed_at: details.order.placed_at,
  }
}

pub(crate) fn order_total_cents(cart: &[CartItem]) -> i64 {
  cart
    .iter()
    .map(|line| i64::from(line.price_cents) * i64::from(line.quantity))
    .sum()
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  fn cart_line(price_cents: i32, quantity: i32) -> CartItem {
    CartItem {
      id: Uuid::new_v4(),
      customer_id: Uuid::new_v4(),
      product_id: Uuid::new_v4(),
      name: "apples".to_string(),
      price_cents,
      banner: None,
      quantity,
      added_at: Utc::now(),
    }
  }

  #[test]
  fn test_order_total_sums_price_times_quantity() {
    let cart = vec![cart_line(300, 2), cart_line(450, 1)];
    assert_eq!(order_total_cents(&cart), 1050);
  }

  #[test]
  fn test_order_total_of_an_empty_cart_is_zero() {
    assert_eq!(order_total_cents(&[]), 0);
  }

  async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL")
      .expect("DATABASE_URL must be set to run the ignored database tests");
    PgPool::connect(&url).await.expect("database should be reachable")
  }

  #[tokio::test]
  #[ignore = "requires a running Postgres prepared with schema.sql"]
  async fn test_cart_add_then_remove_restores_prior_state() {
    let pool = test_pool().await;
    let customer_id = Uuid::new_v4();
    let product = ProductRef {
      id: Uuid::new_v4(),
      name: "apples".to_string(),
      price_cents: 300,
      banner: None,
    };

    let before = get_cart(&pool, customer_id).await.expect("read cart").len();
    let after_add = manage_cart(&pool, customer_id, &product, 1, false)
      .await
      .expect("add line");
    assert_eq!(after_add.len(), before + 1);

    let after_remove = manage_cart(&pool, customer_id, &product, 1, true)
      .await
      .expect("remove line");
    assert_eq!(after_remove.len(), before);
  }

  #[tokio::test]
  #[ignore = "requires a running Postgres prepared with schema.sql"]
  async fn test_place_order_on_an_empty_cart_yields_zero_lines() {
    let pool = test_pool().await;
    // A fresh customer id has an empty cart; the order still goes through.
    let customer_id = Uuid::new_v4();

    let details = place_order(&pool, customer_id, "txn-empty")
      .await
      .expect("place order");
    assert!(details.items.is_empty());
    assert_eq!(details.order.total_amount_cents, 0);
    assert_eq!(details.order.status, OrderStatus::Received);
  }

  #[test]
  fn test_order_snapshot_carries_every_line() {
    let order = Order {
      id: Uuid::new_v4(),
      customer_id: Uuid::new_v4(),
      status: OrderStatus::Received,
      total_amount_cents: 600,
      txn_number: Some("txn-123".to_string()),
      placed_at: Utc::now(),
    };
    let items = vec![OrderItem {
      id: Uuid::new_v4(),
      order_id: order.id,
      product_id: Uuid::new_v4(),
      name: "broccoli".to_string(),
      price_cents: 200,
      banner: None,
      quantity: 3,
    }];
    let details = OrderDetails {
      order: order.clone(),
      items,
    };

    let snapshot = order_snapshot(&details);
    assert_eq!(snapshot.id, order.id);
    assert_eq!(snapshot.status, "received");
    assert_eq!(snapshot.total_amount_cents, 600);
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].quantity, 3);
    assert_eq!(snapshot.items[0].product.name, "broccoli");
  }
}

// shopping/src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "OK" }))
}

async fn whoami_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "msg": "/shopping : I am Shopping Service" }))
}

// Called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .route("/whoami", web::get().to(whoami_handler))
    .route(
      "/order",
      web::post().to(crate::web::handlers::order_handlers::place_order_handler),
    )
    .route(
      "/orders",
      web::get().to(crate::web::handlers::order_handlers::get_orders_handler),
    )
    .service(
      web::resource("/cart")
        .route(web::put().to(crate::web::handlers::cart_handlers::add_to_cart_handler))
        .route(web::get().to(crate::web::handlers::cart_handlers::get_cart_handler)),
    )
    .route(
      "/cart/{id}",
      web::delete().to(crate::web::handlers::cart_handlers::remove_from_cart_handler),
    )
    .route(
      "/wishlist",
      web::put().to(crate::web::handlers::wishlist_handlers::add_to_wishlist_handler),
    )
    .route(
      "/wishlist/{id}",
      web::delete().to(crate::web::handlers::wishlist_handlers::remove_from_wishlist_handler),
    );
}

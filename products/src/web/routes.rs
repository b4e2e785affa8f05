// products/src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "OK" }))
}

async fn whoami_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "msg": "/products : I am Products Service" }))
}

// Called in `main.rs` to configure services for the Actix App.
// `/{id}` is registered last so the fixed paths match first.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .route("/whoami", web::get().to(whoami_handler))
    .route(
      "/category/{type}",
      web::get().to(crate::web::handlers::product_handlers::category_handler),
    )
    .route(
      "/ids",
      web::post().to(crate::web::handlers::product_handlers::selected_products_handler),
    )
    .service(
      web::resource("/")
        .route(web::get().to(crate::web::handlers::product_handlers::list_products_handler))
        .route(web::post().to(crate::web::handlers::product_handlers::create_product_handler)),
    )
    .route(
      "/{id}",
      web::get().to(crate::web::handlers::product_handlers::get_product_handler),
    );
}

// customer/src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "OK" }))
}

async fn whoami_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "msg": "/customer : I am Customer Service" }))
}

// Called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .route("/whoami", web::get().to(whoami_handler))
    .route(
      "/signup",
      web::post().to(crate::web::handlers::auth_handlers::signup_handler),
    )
    .route(
      "/login",
      web::post().to(crate::web::handlers::auth_handlers::signin_handler),
    )
    .route(
      "/address",
      web::post().to(crate::web::handlers::profile_handlers::add_address_handler),
    )
    .route(
      "/profile",
      web::get().to(crate::web::handlers::profile_handlers::get_profile_handler),
    )
    .route(
      "/wishlist",
      web::get().to(crate::web::handlers::profile_handlers::get_wishlist_handler),
    )
    .route(
      "/shopping-details",
      web::get().to(crate::web::handlers::profile_handlers::get_shopping_details_handler),
    );
}

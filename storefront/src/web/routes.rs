// storefront/src/web/routes.rs

use actix_web::web;

// Simple liveness probe; the in-memory store has no connectivity to check.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  use crate::web::handlers::{auth_handlers, cart_handlers, dish_handlers};

  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Authentication Routes
      .service(
        web::scope("/auth")
          .route("/signup", web::post().to(auth_handlers::signup_handler))
          .route("/signin", web::post().to(auth_handlers::signin_handler))
          .route("/signout", web::post().to(auth_handlers::signout_handler))
          .route("/me", web::get().to(auth_handlers::me_handler)),
      )
      // Cart Routes
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::view_cart_handler))
          .route("/add", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/badge", web::get().to(cart_handlers::badge_handler))
          .route("/{line_id}/increment", web::post().to(cart_handlers::increment_handler))
          .route("/{line_id}/decrement", web::post().to(cart_handlers::decrement_handler))
          .route("/{line_id}", web::delete().to(cart_handlers::remove_handler)),
      )
      // Dish catalog: browsing for shoppers, CRUD for admins
      .service(
        web::scope("/dishes")
          .route("", web::get().to(dish_handlers::list_dishes_handler))
          .route("", web::post().to(dish_handlers::create_dish_handler))
          .route("/{dish_id}", web::get().to(dish_handlers::get_dish_handler))
          .route("/{dish_id}", web::put().to(dish_handlers::update_dish_handler))
          .route("/{dish_id}", web::delete().to(dish_handlers::delete_dish_handler)),
      ),
  );
}

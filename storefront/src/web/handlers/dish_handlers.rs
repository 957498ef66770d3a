// storefront/src/web/handlers/dish_handlers.rs

//! Catalog browsing for signed-in shoppers, dish CRUD for admins. All the
//! real rules (form validation, the authorization predicate) live in
//! `CatalogService`; these handlers are wiring.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::catalog_service::DishForm;
use crate::state::AppState;
use crate::web::handlers::auth_handlers::AuthenticatedUser;
use mealcart::DishId;

#[instrument(name = "handler::list_dishes", skip(app_state, auth_user), fields(user_id = %auth_user.user.id))]
pub async fn list_dishes_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(app_state.catalog.list()))
}

#[instrument(name = "handler::get_dish", skip(app_state, auth_user), fields(user_id = %auth_user.user.id, dish_id = %dish_id))]
pub async fn get_dish_handler(
  app_state: web::Data<AppState>,
  dish_id: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let dish = app_state.catalog.get(&DishId::from(dish_id.into_inner()))?;
  Ok(HttpResponse::Ok().json(dish))
}

#[instrument(name = "handler::create_dish", skip(app_state, form, auth_user), fields(user_id = %auth_user.user.id))]
pub async fn create_dish_handler(
  app_state: web::Data<AppState>,
  form: web::Json<DishForm>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let dish = app_state.catalog.create(&auth_user.user.identity(), form.into_inner())?;
  Ok(HttpResponse::Created().json(json!({
      "message": "Dish added successfully!",
      "dish": dish
  })))
}

#[instrument(name = "handler::update_dish", skip(app_state, form, auth_user), fields(user_id = %auth_user.user.id, dish_id = %dish_id))]
pub async fn update_dish_handler(
  app_state: web::Data<AppState>,
  dish_id: web::Path<Uuid>,
  form: web::Json<DishForm>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let dish = app_state.catalog.update(
    &auth_user.user.identity(),
    &DishId::from(dish_id.into_inner()),
    form.into_inner(),
  )?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Dish updated successfully!",
      "dish": dish
  })))
}

#[instrument(name = "handler::delete_dish", skip(app_state, auth_user), fields(user_id = %auth_user.user.id, dish_id = %dish_id))]
pub async fn delete_dish_handler(
  app_state: web::Data<AppState>,
  dish_id: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  app_state
    .catalog
    .delete(&auth_user.user.identity(), &DishId::from(dish_id.into_inner()))?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Dish deleted successfully!" })))
}

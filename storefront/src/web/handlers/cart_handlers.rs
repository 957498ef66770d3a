// storefront/src/web/handlers/cart_handlers.rs

//! Cart endpoints. Each request builds a short-lived engine bound to the
//! authenticated user and a capturing view, so the response body carries
//! exactly what the engine's post-mutation full reload rendered.

use actix_web::{web, HttpResponse};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::auth_handlers::AuthenticatedUser;
use mealcart::{
  AddOutcome, BackendClient, CartEngine, CartLine, CartResult, CartSnapshot, CartView, Dish, DishId, LineId,
  LineUpdate, MemoryBackend, UserId,
};

// --- Per-request backend binding ---

/// `BackendClient` facade that pins the identity to the request's session
/// user instead of the store's ambient sign-in (which only exists for
/// single-user embedding). Storage calls delegate to the shared store.
pub struct RequestBackend {
  store: Arc<MemoryBackend>,
  user: UserId,
}

impl RequestBackend {
  pub fn new(store: Arc<MemoryBackend>, user: UserId) -> Self {
    Self { store, user }
  }
}

#[async_trait]
impl BackendClient for RequestBackend {
  async fn current_user(&self) -> CartResult<Option<UserId>> {
    Ok(Some(self.user))
  }

  async fn get_line(&self, user: &UserId, line: &LineId) -> CartResult<Option<CartLine>> {
    self.store.get_line(user, line).await
  }

  async fn find_line_by_dish(&self, user: &UserId, dish: &DishId) -> CartResult<Option<CartLine>> {
    self.store.find_line_by_dish(user, dish).await
  }

  async fn create_line(
    &self,
    user: &UserId,
    dish: &DishId,
    quantity: u32,
    added_at: DateTime<Utc>,
  ) -> CartResult<LineId> {
    self.store.create_line(user, dish, quantity, added_at).await
  }

  async fn update_line(&self, user: &UserId, line: &LineId, fields: LineUpdate) -> CartResult<()> {
    self.store.update_line(user, line, fields).await
  }

  async fn delete_line(&self, user: &UserId, line: &LineId) -> CartResult<()> {
    self.store.delete_line(user, line).await
  }

  async fn list_lines(&self, user: &UserId) -> CartResult<Vec<CartLine>> {
    self.store.list_lines(user).await
  }

  async fn get_dish(&self, dish: &DishId) -> CartResult<Option<Dish>> {
    self.store.get_dish(dish).await
  }
}

// --- Capturing view ---

/// Holds what the engine rendered during one request so the handler can put
/// it in the HTTP response.
#[derive(Default)]
pub struct CapturingView {
  snapshot: Mutex<Option<CartSnapshot>>,
  badge: Mutex<Option<u32>>,
}

impl CapturingView {
  pub fn snapshot(&self) -> Option<CartSnapshot> {
    self.snapshot.lock().take()
  }

  pub fn badge(&self) -> Option<u32> {
    *self.badge.lock()
  }
}

#[async_trait]
impl CartView for CapturingView {
  async fn show_cart(&self, snapshot: &CartSnapshot) {
    *self.snapshot.lock() = Some(snapshot.clone());
  }

  async fn show_badge(&self, count: u32) {
    *self.badge.lock() = Some(count);
  }
}

fn engine_for(app_state: &AppState, auth_user: &AuthenticatedUser) -> (CartEngine<RequestBackend>, Arc<CapturingView>) {
  let view = Arc::new(CapturingView::default());
  let backend = Arc::new(RequestBackend::new(app_state.store.clone(), auth_user.user.id));
  (CartEngine::new(backend, view.clone()), view)
}

// --- Request DTOs ---

#[derive(serde::Deserialize, Debug)]
pub struct AddToCartRequestPayload {
  pub dish_id: DishId,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, payload, auth_user),
    fields(user_id = %auth_user.user.id, dish_id = %payload.dish_id)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AddToCartRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  // The add only makes sense for a dish that is still on the menu; a stale
  // catalog card gets a 404 rather than a phantom cart line.
  if app_state.store.dish(&payload.dish_id).is_none() {
    return Err(AppError::NotFound(format!("Dish {} not found.", payload.dish_id)));
  }

  let (engine, view) = engine_for(&app_state, &auth_user);
  let outcome = engine.add_to_cart(&payload.dish_id).await?;

  let message = match &outcome {
    AddOutcome::Added { .. } => "Dish added to your cart!",
    AddOutcome::Updated { .. } => "Quantity increased!",
  };
  Ok(HttpResponse::Ok().json(json!({
      "message": message,
      "outcome": outcome,
      "badge": view.badge().unwrap_or(0)
  })))
}

#[instrument(name = "handler::view_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user.id))]
pub async fn view_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let (engine, _view) = engine_for(&app_state, &auth_user);
  let snapshot = engine.load_snapshot().await?;
  Ok(HttpResponse::Ok().json(snapshot))
}

#[instrument(name = "handler::badge", skip(app_state, auth_user), fields(user_id = %auth_user.user.id))]
pub async fn badge_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let (engine, _view) = engine_for(&app_state, &auth_user);
  let badge = engine.update_badge().await?;
  Ok(HttpResponse::Ok().json(json!({ "badge": badge })))
}

/// Shared shape of the three line mutations: run the engine operation, then
/// answer with whatever the unconditional reload rendered.
async fn respond_with_reload(
  view: &CapturingView,
  engine: &CartEngine<RequestBackend>,
  message: &str,
) -> Result<HttpResponse, AppError> {
  // The mutated-line no-op path skips the reload; fall back to a fresh
  // read so the client still gets a consistent cart back.
  let snapshot = match view.snapshot() {
    Some(snapshot) => snapshot,
    None => engine.load_snapshot().await?,
  };
  let badge = match view.badge() {
    Some(badge) => badge,
    None => engine.update_badge().await?,
  };
  Ok(HttpResponse::Ok().json(json!({
      "message": message,
      "cart": snapshot,
      "badge": badge
  })))
}

#[instrument(name = "handler::increment_line", skip(app_state, auth_user), fields(user_id = %auth_user.user.id, line_id = %line_id))]
pub async fn increment_handler(
  app_state: web::Data<AppState>,
  line_id: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let (engine, view) = engine_for(&app_state, &auth_user);
  engine.increment(&LineId::from(line_id.into_inner())).await?;
  respond_with_reload(&view, &engine, "Quantity updated.").await
}

#[instrument(name = "handler::decrement_line", skip(app_state, auth_user), fields(user_id = %auth_user.user.id, line_id = %line_id))]
pub async fn decrement_handler(
  app_state: web::Data<AppState>,
  line_id: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let (engine, view) = engine_for(&app_state, &auth_user);
  engine.decrement(&LineId::from(line_id.into_inner())).await?;
  respond_with_reload(&view, &engine, "Quantity updated.").await
}

#[instrument(name = "handler::remove_line", skip(app_state, auth_user), fields(user_id = %auth_user.user.id, line_id = %line_id))]
pub async fn remove_handler(
  app_state: web::Data<AppState>,
  line_id: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let (engine, view) = engine_for(&app_state, &auth_user);
  engine.remove(&LineId::from(line_id.into_inner())).await?;
  respond_with_reload(&view, &engine, "Item removed from cart!").await
}

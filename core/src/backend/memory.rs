// mealcart/src/backend/memory.rs

//! An in-process document store implementing `BackendClient`, standing in
//! for the hosted backend in tests, examples, and the storefront
//! application. It also models the auth provider's ambient session and
//! exposes the dish-collection writes the admin panel needs.

use crate::backend::client::BackendClient;
use crate::error::{CartError, CartResult};
use crate::model::{CartLine, Dish, DishId, LineId, LineUpdate, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Shared in-memory collections guarded by `parking_lot` locks.
///
/// Locks are never held across an `.await`; every trait method completes its
/// read or write synchronously under the guard. That makes each single call
/// internally consistent while deliberately providing nothing across calls,
/// matching the no-transaction contract of `BackendClient`.
#[derive(Default)]
pub struct MemoryBackend {
  session: RwLock<Option<UserId>>,
  dishes: RwLock<HashMap<DishId, Dish>>,
  carts: RwLock<HashMap<UserId, HashMap<LineId, CartLine>>>,
}

impl MemoryBackend {
  pub fn new() -> Self {
    Self::default()
  }

  // --- Ambient session (the auth provider's currentUser) ---

  pub fn sign_in(&self, user: UserId) {
    debug!(user_id = %user, "MemoryBackend: session opened.");
    *self.session.write() = Some(user);
  }

  pub fn sign_out(&self) {
    debug!("MemoryBackend: session closed.");
    *self.session.write() = None;
  }

  // --- Dish collection writes (admin panel / seeding) ---

  /// Inserts a dish under a fresh storage-assigned id.
  pub fn insert_dish(
    &self,
    name: impl Into<String>,
    price: f64,
    category: impl Into<String>,
    description: impl Into<String>,
    image_url: Option<String>,
  ) -> CartResult<Dish> {
    let dish = Dish {
      id: DishId::new(),
      name: name.into(),
      price,
      category: category.into(),
      description: description.into(),
      image_url,
      created_at: Utc::now(),
    };
    dish.validate()?;
    self.dishes.write().insert(dish.id, dish.clone());
    debug!(dish_id = %dish.id, name = %dish.name, "MemoryBackend: dish inserted.");
    Ok(dish)
  }

  /// Replaces a dish's editable fields, keeping id and `created_at` (so the
  /// catalog's newest-first ordering is unaffected by edits).
  pub fn update_dish(&self, updated: Dish) -> CartResult<Dish> {
    updated.validate()?;
    let mut dishes = self.dishes.write();
    let existing = dishes
      .get(&updated.id)
      .ok_or_else(|| CartError::Internal(format!("Dish {} not found for update.", updated.id)))?;
    let stored = Dish {
      created_at: existing.created_at,
      ..updated
    };
    debug!(dish_id = %stored.id, "MemoryBackend: dish updated.");
    dishes.insert(stored.id, stored.clone());
    Ok(stored)
  }

  /// Removes a dish document. Cart lines referencing it are intentionally
  /// left behind; snapshot resolution tolerates the tombstone.
  pub fn delete_dish(&self, dish: &DishId) -> bool {
    let removed = self.dishes.write().remove(dish).is_some();
    debug!(dish_id = %dish, removed, "MemoryBackend: dish delete.");
    removed
  }

  pub fn dish(&self, dish: &DishId) -> Option<Dish> {
    self.dishes.read().get(dish).cloned()
  }

  /// The whole catalog, newest first.
  pub fn list_dishes(&self) -> Vec<Dish> {
    let mut all: Vec<Dish> = self.dishes.read().values().cloned().collect();
    all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    all
  }
}

#[async_trait]
impl BackendClient for MemoryBackend {
  async fn current_user(&self) -> CartResult<Option<UserId>> {
    Ok(*self.session.read())
  }

  async fn get_line(&self, user: &UserId, line: &LineId) -> CartResult<Option<CartLine>> {
    let carts = self.carts.read();
    Ok(carts.get(user).and_then(|cart| cart.get(line)).cloned())
  }

  async fn find_line_by_dish(&self, user: &UserId, dish: &DishId) -> CartResult<Option<CartLine>> {
    let carts = self.carts.read();
    Ok(
      carts
        .get(user)
        .and_then(|cart| cart.values().find(|line| line.dish_id == *dish))
        .cloned(),
    )
  }

  async fn create_line(
    &self,
    user: &UserId,
    dish: &DishId,
    quantity: u32,
    added_at: DateTime<Utc>,
  ) -> CartResult<LineId> {
    let line = CartLine {
      id: LineId::new(),
      user_id: *user,
      dish_id: *dish,
      quantity,
      added_at,
    };
    let id = line.id;
    self.carts.write().entry(*user).or_default().insert(id, line);
    trace!(user_id = %user, line_id = %id, "MemoryBackend: line created.");
    Ok(id)
  }

  async fn update_line(&self, user: &UserId, line: &LineId, fields: LineUpdate) -> CartResult<()> {
    let mut carts = self.carts.write();
    let stored = carts
      .get_mut(user)
      .and_then(|cart| cart.get_mut(line))
      .ok_or_else(|| CartError::Storage {
        source: anyhow::anyhow!("Cart line {line} does not exist for user {user}."),
      })?;
    if let Some(quantity) = fields.quantity {
      stored.quantity = quantity;
    }
    if let Some(added_at) = fields.added_at {
      stored.added_at = added_at;
    }
    trace!(user_id = %user, line_id = %line, "MemoryBackend: line updated.");
    Ok(())
  }

  async fn delete_line(&self, user: &UserId, line: &LineId) -> CartResult<()> {
    if let Some(cart) = self.carts.write().get_mut(user) {
      cart.remove(line);
    }
    trace!(user_id = %user, line_id = %line, "MemoryBackend: line deleted.");
    Ok(())
  }

  async fn list_lines(&self, user: &UserId) -> CartResult<Vec<CartLine>> {
    let carts = self.carts.read();
    let mut lines: Vec<CartLine> = carts
      .get(user)
      .map(|cart| cart.values().cloned().collect())
      .unwrap_or_default();
    lines.sort_by(|a, b| b.added_at.cmp(&a.added_at));
    Ok(lines)
  }

  async fn get_dish(&self, dish: &DishId) -> CartResult<Option<Dish>> {
    Ok(self.dishes.read().get(dish).cloned())
  }
}

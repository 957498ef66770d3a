// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mealcart::{
  BackendClient, CartError, CartLine, CartResult, CartSnapshot, CartView, Dish, DishId, LineId, LineUpdate,
  MemoryBackend, UserId,
};
use parking_lot::Mutex;
use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixtures ---

/// A backend with one signed-in user, ready for cart operations.
pub fn signed_in_backend() -> (Arc<MemoryBackend>, UserId) {
  let backend = Arc::new(MemoryBackend::new());
  let user = UserId::new();
  backend.sign_in(user);
  (backend, user)
}

pub fn seed_dish(backend: &MemoryBackend, name: &str, price: f64) -> Dish {
  backend
    .insert_dish(name, price, "Main Course", "A test dish.", None)
    .expect("seed dish should validate")
}

// --- Recording View ---

/// Captures everything the engine pushes, so tests can assert on the
/// re-render policy as well as the rendered values.
#[derive(Default)]
pub struct RecordingView {
  carts: Mutex<Vec<CartSnapshot>>,
  badges: Mutex<Vec<u32>>,
}

impl RecordingView {
  pub fn cart_renders(&self) -> usize {
    self.carts.lock().len()
  }

  pub fn last_cart(&self) -> Option<CartSnapshot> {
    self.carts.lock().last().cloned()
  }

  pub fn badge_renders(&self) -> usize {
    self.badges.lock().len()
  }

  pub fn last_badge(&self) -> Option<u32> {
    self.badges.lock().last().copied()
  }
}

#[async_trait]
impl CartView for RecordingView {
  async fn show_cart(&self, snapshot: &CartSnapshot) {
    self.carts.lock().push(snapshot.clone());
  }

  async fn show_badge(&self, count: u32) {
    self.badges.lock().push(count);
  }
}

// --- Failure-injecting backend wrapper ---

/// Delegates to a `MemoryBackend` until `break_storage` flips, after which
/// every call fails the way an unreachable document store would.
pub struct FlakyBackend {
  inner: Arc<MemoryBackend>,
  broken: AtomicBool,
}

impl FlakyBackend {
  pub fn new(inner: Arc<MemoryBackend>) -> Self {
    Self {
      inner,
      broken: AtomicBool::new(false),
    }
  }

  pub fn break_storage(&self) {
    self.broken.store(true, Ordering::SeqCst);
  }

  pub fn restore_storage(&self) {
    self.broken.store(false, Ordering::SeqCst);
  }

  fn check(&self) -> CartResult<()> {
    if self.broken.load(Ordering::SeqCst) {
      Err(CartError::Storage {
        source: anyhow::anyhow!("document store unavailable"),
      })
    } else {
      Ok(())
    }
  }
}

#[async_trait]
impl BackendClient for FlakyBackend {
  async fn current_user(&self) -> CartResult<Option<UserId>> {
    // Identity comes from the auth provider, not the document store; it
    // stays reachable while storage is broken.
    self.inner.current_user().await
  }

  async fn get_line(&self, user: &UserId, line: &LineId) -> CartResult<Option<CartLine>> {
    self.check()?;
    self.inner.get_line(user, line).await
  }

  async fn find_line_by_dish(&self, user: &UserId, dish: &DishId) -> CartResult<Option<CartLine>> {
    self.check()?;
    self.inner.find_line_by_dish(user, dish).await
  }

  async fn create_line(
    &self,
    user: &UserId,
    dish: &DishId,
    quantity: u32,
    added_at: DateTime<Utc>,
  ) -> CartResult<LineId> {
    self.check()?;
    self.inner.create_line(user, dish, quantity, added_at).await
  }

  async fn update_line(&self, user: &UserId, line: &LineId, fields: LineUpdate) -> CartResult<()> {
    self.check()?;
    self.inner.update_line(user, line, fields).await
  }

  async fn delete_line(&self, user: &UserId, line: &LineId) -> CartResult<()> {
    self.check()?;
    self.inner.delete_line(user, line).await
  }

  async fn list_lines(&self, user: &UserId) -> CartResult<Vec<CartLine>> {
    self.check()?;
    self.inner.list_lines(user).await
  }

  async fn get_dish(&self, dish: &DishId) -> CartResult<Option<Dish>> {
    self.check()?;
    self.inner.get_dish(dish).await
  }
}

// mealcart/src/engine/cart.rs

//! The cart reconciliation engine: how repeated adds merge into quantities,
//! how increment/decrement mutate or delete lines, and how the rendered
//! cart list and badge stay consistent with the persisted collection.
//!
//! The engine holds no authoritative in-memory state. Every mutating
//! operation re-fetches the affected line before writing (read-modify-
//! write), and every mutation is followed by an unconditional full reload
//! pushed through the injected `CartView`. This trades round trips for the
//! guarantee that no stale client-side cache can ever disagree with
//! storage.

use crate::backend::BackendClient;
use crate::engine::snapshot::CartSnapshot;
use crate::error::{CartError, CartResult};
use crate::model::{DishId, LineId, LineUpdate, UserId};
use crate::view::CartView;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Signal from `add_to_cart` distinguishing a freshly created line from a
/// merged quantity bump, so the caller can word its notification
/// ("Added to cart!" vs "Quantity increased!").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AddOutcome {
  Added { line_id: LineId },
  Updated { line_id: LineId, quantity: u32 },
}

pub struct CartEngine<B: BackendClient> {
  backend: Arc<B>,
  view: Arc<dyn CartView>,
}

impl<B: BackendClient> CartEngine<B> {
  pub fn new(backend: Arc<B>, view: Arc<dyn CartView>) -> Self {
    Self { backend, view }
  }

  /// Construction for call sites that only consume returned values.
  pub fn headless(backend: Arc<B>) -> Self {
    Self::new(backend, Arc::new(crate::view::NullView))
  }

  async fn require_user(&self) -> CartResult<UserId> {
    self
      .backend
      .current_user()
      .await?
      .ok_or(CartError::NotAuthenticated)
  }

  /// Adds one unit of `dish` to the authenticated user's cart.
  ///
  /// If a line for the dish already exists its quantity is bumped by one and
  /// its `added_at` refreshed (never a duplicate line per dish);
  /// otherwise a new line is created with quantity 1. Either way the badge
  /// is refreshed; the cart listing is not, since adds happen from the
  /// catalog screen.
  #[instrument(name = "cart_engine::add_to_cart", skip(self), fields(dish_id = %dish), err(Display))]
  pub async fn add_to_cart(&self, dish: &DishId) -> CartResult<AddOutcome> {
    let user = self.require_user().await?;

    let outcome = match self.backend.find_line_by_dish(&user, dish).await? {
      Some(existing) => {
        let quantity = existing.quantity + 1;
        self
          .backend
          .update_line(&user, &existing.id, LineUpdate::quantity(quantity, Utc::now()))
          .await?;
        info!(line_id = %existing.id, quantity, "Merged add into existing cart line.");
        AddOutcome::Updated {
          line_id: existing.id,
          quantity,
        }
      }
      None => {
        let line_id = self.backend.create_line(&user, dish, 1, Utc::now()).await?;
        info!(line_id = %line_id, "Created new cart line.");
        AddOutcome::Added { line_id }
      }
    };

    self.update_badge().await?;
    Ok(outcome)
  }

  /// Bumps a line's quantity by one.
  ///
  /// An absent line is a silent no-op: a concurrent removal may have
  /// resolved it already, and there is nothing left to do. No re-render
  /// happens in that case either.
  ///
  /// The fetch-then-update here is not atomic. Two concurrent increments
  /// can both read quantity `n` and both persist `n + 1`; the follow-up
  /// full reload makes the UI reflect whichever write landed last, but the
  /// lost update itself is an accepted, unguarded risk of the relaxed
  /// model.
  #[instrument(name = "cart_engine::increment", skip(self), fields(line_id = %line), err(Display))]
  pub async fn increment(&self, line: &LineId) -> CartResult<()> {
    let user = self.require_user().await?;

    let Some(existing) = self.backend.get_line(&user, line).await? else {
      warn!("Increment on absent cart line; treating as already resolved.");
      return Ok(());
    };

    self
      .backend
      .update_line(&user, line, LineUpdate::quantity(existing.quantity + 1, Utc::now()))
      .await?;
    debug!(quantity = existing.quantity + 1, "Cart line incremented.");

    self.refresh_view().await
  }

  /// Lowers a line's quantity by one, deleting the line outright when it is
  /// already at 1 (a zero-quantity line is never persisted).
  /// Absent lines are a silent no-op, as with `increment`.
  #[instrument(name = "cart_engine::decrement", skip(self), fields(line_id = %line), err(Display))]
  pub async fn decrement(&self, line: &LineId) -> CartResult<()> {
    let user = self.require_user().await?;

    let Some(existing) = self.backend.get_line(&user, line).await? else {
      warn!("Decrement on absent cart line; treating as already resolved.");
      return Ok(());
    };

    if existing.quantity > 1 {
      self
        .backend
        .update_line(&user, line, LineUpdate::quantity(existing.quantity - 1, Utc::now()))
        .await?;
      debug!(quantity = existing.quantity - 1, "Cart line decremented.");
    } else {
      self.backend.delete_line(&user, line).await?;
      info!("Cart line decremented to zero; deleted.");
    }

    self.refresh_view().await
  }

  /// Deletes a line regardless of its quantity.
  #[instrument(name = "cart_engine::remove", skip(self), fields(line_id = %line), err(Display))]
  pub async fn remove(&self, line: &LineId) -> CartResult<()> {
    let user = self.require_user().await?;
    self.backend.delete_line(&user, line).await?;
    info!("Cart line removed.");
    self.refresh_view().await
  }

  /// Loads the full cart read model for the authenticated user: lines
  /// ordered by `added_at` descending, each resolved against the current
  /// dish document, tombstoned lines silently skipped, and the total
  /// computed from current dish prices.
  #[instrument(name = "cart_engine::load_snapshot", skip(self), err(Display))]
  pub async fn load_snapshot(&self) -> CartResult<CartSnapshot> {
    let user = self.require_user().await?;

    let lines = self.backend.list_lines(&user).await?;
    let mut resolved = Vec::with_capacity(lines.len());
    for line in lines {
      match self.backend.get_dish(&line.dish_id).await? {
        Some(dish) => resolved.push((line, dish)),
        None => {
          // Tombstone tolerance: the dish was deleted from the catalog
          // while this line sat in the cart. Skip it, don't surface it.
          debug!(line_id = %line.id, dish_id = %line.dish_id, "Skipping cart line for deleted dish.");
        }
      }
    }

    let snapshot = CartSnapshot::from_resolved(resolved);
    debug!(
      line_count = snapshot.lines.len(),
      total = snapshot.total,
      "Cart snapshot loaded."
    );
    Ok(snapshot)
  }

  /// Recomputes the badge count and pushes it to the view.
  ///
  /// The count is the sum of quantities across all of the user's lines, not
  /// the line count. A signed-out session renders 0 rather than erroring.
  #[instrument(name = "cart_engine::update_badge", skip(self), err(Display))]
  pub async fn update_badge(&self) -> CartResult<u32> {
    let count = match self.backend.current_user().await? {
      Some(user) => {
        let lines = self.backend.list_lines(&user).await?;
        lines.iter().map(|line| line.quantity).sum()
      }
      None => 0,
    };
    self.view.show_badge(count).await;
    debug!(count, "Badge updated.");
    Ok(count)
  }

  /// The explicit full-reload policy: after any cart-screen mutation, the
  /// whole snapshot and the badge are re-fetched and re-rendered, whether
  /// or not anything else changed underneath.
  pub async fn refresh_view(&self) -> CartResult<()> {
    let snapshot = self.load_snapshot().await?;
    self.view.show_cart(&snapshot).await;
    self.update_badge().await?;
    Ok(())
  }
}

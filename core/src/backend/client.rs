// mealcart/src/backend/client.rs

//! The collaborator contract with the external backend: authenticated
//! identity plus a per-user cart document collection and a read-only dish
//! collection.

use crate::error::CartResult;
use crate::model::{CartLine, Dish, DishId, LineId, LineUpdate, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Document-store access as the cart engine consumes it.
///
/// All calls are plain request/response: no transactions, no atomic
/// counters, no change feeds. The engine layers its read-modify-write
/// semantics on top of exactly this surface, so implementations must not
/// add coordination the contract does not promise.
///
/// Failures are reported through `CartError::Storage` (usually via
/// `anyhow::Error` conversion); an absent document is `Ok(None)`, never an
/// error.
#[async_trait]
pub trait BackendClient: Send + Sync {
  /// The auth provider's notion of who is signed in, if anyone.
  async fn current_user(&self) -> CartResult<Option<UserId>>;

  /// Fetches one cart line by id from `user`'s cart collection.
  async fn get_line(&self, user: &UserId, line: &LineId) -> CartResult<Option<CartLine>>;

  /// Finds the cart line referencing `dish` in `user`'s cart collection.
  /// The engine's merge-on-add rule keeps this at most one.
  async fn find_line_by_dish(&self, user: &UserId, dish: &DishId) -> CartResult<Option<CartLine>>;

  /// Creates a new cart line document; storage assigns and returns its id.
  async fn create_line(
    &self,
    user: &UserId,
    dish: &DishId,
    quantity: u32,
    added_at: DateTime<Utc>,
  ) -> CartResult<LineId>;

  /// Applies a field-level update to an existing line. Updating a line that
  /// no longer exists is a storage error; callers fetch-then-update.
  async fn update_line(&self, user: &UserId, line: &LineId, fields: LineUpdate) -> CartResult<()>;

  /// Deletes a cart line document. Deleting an absent line is not an error.
  async fn delete_line(&self, user: &UserId, line: &LineId) -> CartResult<()>;

  /// All of `user`'s cart lines, ordered by `added_at` descending (most
  /// recently touched first).
  async fn list_lines(&self, user: &UserId) -> CartResult<Vec<CartLine>>;

  /// Resolves a dish from the catalog collection. `Ok(None)` when the dish
  /// has been deleted since the line referencing it was created.
  async fn get_dish(&self, dish: &DishId) -> CartResult<Option<Dish>>;
}

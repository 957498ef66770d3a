// mealcart/src/model/cart_line.rs

use crate::model::ids::{DishId, LineId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of a user's cart: a dish reference and a quantity.
///
/// Invariants enforced by the engine:
/// - at most one line per distinct `dish_id` per user (adds merge into the
///   existing line instead of creating duplicates);
/// - `quantity >= 1` for as long as the line exists; decrementing past 1
///   deletes the line rather than persisting a zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
  pub id: LineId,
  pub user_id: UserId,
  pub dish_id: DishId,
  pub quantity: u32,
  /// Timestamp of the last mutation (creation or quantity change). Sole sort
  /// key for cart display, descending.
  pub added_at: DateTime<Utc>,
}

/// Partial update for a cart line document, mirroring a document store's
/// field-level update. The engine always touches both fields together, but
/// the backend contract stays field-granular.
#[derive(Debug, Clone, Default)]
pub struct LineUpdate {
  pub quantity: Option<u32>,
  pub added_at: Option<DateTime<Utc>>,
}

impl LineUpdate {
  /// The update every quantity mutation performs: new quantity, refreshed
  /// `added_at`.
  pub fn quantity(quantity: u32, touched_at: DateTime<Utc>) -> Self {
    Self {
      quantity: Some(quantity),
      added_at: Some(touched_at),
    }
  }
}

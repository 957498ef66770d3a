// mealcart/src/model/dish.rs

use crate::error::{CartError, CartResult};
use crate::model::ids::DishId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog item. Read-only from the cart engine's perspective; the admin
/// panel is the only writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
  pub id: DishId,
  pub name: String,
  /// Current price. Snapshot totals are always computed from this value at
  /// render time, never from a price cached on a cart line.
  pub price: f64,
  pub category: String,
  pub description: String,
  pub image_url: Option<String>,
  /// Catalog listings order by this, newest first.
  pub created_at: DateTime<Utc>,
}

impl Dish {
  /// Admin-boundary validation: all text fields required, price non-negative
  /// and finite.
  pub fn validate(&self) -> CartResult<()> {
    if self.name.trim().is_empty() {
      return Err(CartError::Validation("Dish name is required.".to_string()));
    }
    if self.category.trim().is_empty() {
      return Err(CartError::Validation("Dish category is required.".to_string()));
    }
    if self.description.trim().is_empty() {
      return Err(CartError::Validation("Dish description is required.".to_string()));
    }
    if !self.price.is_finite() {
      return Err(CartError::Validation("Dish price must be a number.".to_string()));
    }
    if self.price < 0.0 {
      return Err(CartError::Validation("Dish price cannot be negative.".to_string()));
    }
    Ok(())
  }
}

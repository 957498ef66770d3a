// mealcart/src/engine/snapshot.rs

//! Point-in-time cart read model: resolved lines, per-line totals, and the
//! running cart total.

use crate::model::{CartLine, Dish};
use serde::Serialize;

/// One resolvable cart line paired with its current dish document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotLine {
  pub line: CartLine,
  pub dish: Dish,
  /// `dish.price * line.quantity`, from the dish's price at snapshot time.
  pub line_total: f64,
}

/// What the renderer receives: lines ordered most-recently-touched first,
/// the computed total, and an explicit empty indicator (distinct from a
/// transient loading state, which is the renderer's own concern).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
  pub lines: Vec<SnapshotLine>,
  pub total: f64,
  pub is_empty: bool,
}

impl CartSnapshot {
  pub fn empty() -> Self {
    Self {
      lines: Vec::new(),
      total: 0.0,
      is_empty: true,
    }
  }

  /// Builds a snapshot from already-resolved (line, dish) pairs, computing
  /// per-line and running totals. Tombstoned lines must already have been
  /// filtered out by the caller.
  pub fn from_resolved(pairs: Vec<(CartLine, Dish)>) -> Self {
    let mut total = 0.0;
    let lines: Vec<SnapshotLine> = pairs
      .into_iter()
      .map(|(line, dish)| {
        let line_total = dish.price * f64::from(line.quantity);
        total += line_total;
        SnapshotLine { line, dish, line_total }
      })
      .collect();
    let is_empty = lines.is_empty();
    Self { lines, total, is_empty }
  }

  /// Total units across all resolved lines (not the number of lines).
  pub fn unit_count(&self) -> u32 {
    self.lines.iter().map(|entry| entry.line.quantity).sum()
  }
}

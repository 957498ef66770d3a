// mealcart/src/view.rs

//! The renderer collaborator contract. The engine pushes full cart
//! snapshots and badge counts through this seam; it never reaches into the
//! presentation layer itself, and no ambient render globals exist.

use crate::engine::snapshot::CartSnapshot;
use async_trait::async_trait;

/// Receives the engine's render output.
///
/// Rendering is fire-and-forget from the engine's perspective: a view cannot
/// fail a cart operation, so these methods return nothing.
#[async_trait]
pub trait CartView: Send + Sync {
  /// A full point-in-time cart listing with its computed total.
  async fn show_cart(&self, snapshot: &CartSnapshot);

  /// The badge count: total units across all lines, 0 when signed out.
  async fn show_badge(&self, count: u32);
}

/// A view that renders nothing. For headless engine use (scripts, benches,
/// call sites that only want the returned values).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

#[async_trait]
impl CartView for NullView {
  async fn show_cart(&self, _snapshot: &CartSnapshot) {}

  async fn show_badge(&self, _count: u32) {}
}

// mealcart/examples/tombstone_tolerance.rs
//
// Shows the deleted-dish policy: cart lines whose dish has vanished from
// the catalog are silently skipped by snapshots, while the badge keeps
// counting them until they are removed.

use mealcart::{CartEngine, CartResult, MemoryBackend, UserId};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> CartResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  let backend = Arc::new(MemoryBackend::new());
  backend.sign_in(UserId::new());
  let nihari = backend.insert_dish("Nihari", 400.0, "Main Course", "Slow-cooked stew.", None)?;
  let lassi = backend.insert_dish("Sweet Lassi", 120.0, "Drinks", "Chilled yogurt drink.", None)?;

  let engine = CartEngine::headless(backend.clone());
  engine.add_to_cart(&nihari.id).await?;
  engine.add_to_cart(&lassi.id).await?;
  engine.add_to_cart(&lassi.id).await?;

  info!(badge = engine.update_badge().await?, "before the catalog edit");

  // An admin deletes the lassi while it sits in the cart.
  backend.delete_dish(&lassi.id);

  let snapshot = engine.load_snapshot().await?;
  info!(
    visible_lines = snapshot.lines.len(),
    total = snapshot.total,
    badge = engine.update_badge().await?,
    "after the catalog edit: snapshot skips the tombstoned line, badge still counts it"
  );

  Ok(())
}

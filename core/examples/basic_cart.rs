// mealcart/examples/basic_cart.rs

use mealcart::{CartEngine, CartResult, MemoryBackend, UserId};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> CartResult<()> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Cart Example ---");

  // A backend stand-in with one signed-in shopper and a tiny catalog.
  let backend = Arc::new(MemoryBackend::new());
  backend.sign_in(UserId::new());
  let biryani = backend.insert_dish(
    "Chicken Biryani",
    350.0,
    "Main Course",
    "Fragrant rice with spiced chicken.",
    None,
  )?;
  let kebab = backend.insert_dish("Seekh Kebab", 220.0, "BBQ", "Minced beef skewers.", None)?;

  let engine = CartEngine::headless(backend.clone());

  // Adds merge: the second biryani bumps the existing line's quantity.
  info!(outcome = ?engine.add_to_cart(&biryani.id).await?, "first add");
  info!(outcome = ?engine.add_to_cart(&biryani.id).await?, "second add merges");
  engine.add_to_cart(&kebab.id).await?;

  let snapshot = engine.load_snapshot().await?;
  for entry in &snapshot.lines {
    info!(
      dish = %entry.dish.name,
      quantity = entry.line.quantity,
      line_total = entry.line_total,
      "cart line"
    );
  }
  info!(total = snapshot.total, badge = engine.update_badge().await?, "cart state");

  // Decrementing the quantity-1 kebab line deletes it outright.
  let kebab_line = snapshot
    .lines
    .iter()
    .find(|entry| entry.dish.id == kebab.id)
    .map(|entry| entry.line.id)
    .expect("kebab line present");
  engine.decrement(&kebab_line).await?;

  let snapshot = engine.load_snapshot().await?;
  info!(
    lines = snapshot.lines.len(),
    total = snapshot.total,
    "after decrementing the kebab away"
  );

  Ok(())
}

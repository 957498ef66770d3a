// tests/catalog_tests.rs
//
// Dish-collection behavior of the in-memory backend: validation at the
// admin boundary, newest-first listing, and edit semantics.

mod common;

use common::*;
use mealcart::{CartError, MemoryBackend};

#[test]
fn insert_rejects_invalid_dishes() {
  setup_tracing();
  let backend = MemoryBackend::new();

  let err = backend
    .insert_dish("", 100.0, "Main Course", "No name.", None)
    .unwrap_err();
  assert!(matches!(err, CartError::Validation(_)));

  let err = backend
    .insert_dish("Chicken Karahi", -1.0, "Main Course", "Negative price.", None)
    .unwrap_err();
  assert!(matches!(err, CartError::Validation(_)));

  let err = backend
    .insert_dish("Chicken Karahi", f64::NAN, "Main Course", "NaN price.", None)
    .unwrap_err();
  assert!(matches!(err, CartError::Validation(_)));

  assert!(backend.list_dishes().is_empty());
}

#[test]
fn zero_price_is_allowed() {
  setup_tracing();
  let backend = MemoryBackend::new();
  // Promotional freebies exist; only negative prices are invalid.
  assert!(backend
    .insert_dish("Complimentary Raita", 0.0, "Sides", "On the house.", None)
    .is_ok());
}

#[test]
fn listing_orders_newest_first() {
  setup_tracing();
  let backend = MemoryBackend::new();
  let first = seed_dish(&backend, "Chicken Biryani", 350.0);
  let second = seed_dish(&backend, "Seekh Kebab", 220.0);
  let third = seed_dish(&backend, "Haleem", 300.0);

  let listed: Vec<_> = backend.list_dishes().into_iter().map(|dish| dish.id).collect();
  // Seeding happens fast enough that created_at ties are possible; assert
  // set equality plus the no-older-than ordering instead of exact order.
  assert_eq!(listed.len(), 3);
  for id in [first.id, second.id, third.id] {
    assert!(listed.contains(&id));
  }
  let listed_dishes = backend.list_dishes();
  for pair in listed_dishes.windows(2) {
    assert!(pair[0].created_at >= pair[1].created_at);
  }
}

#[test]
fn update_keeps_id_and_created_at() {
  setup_tracing();
  let backend = MemoryBackend::new();
  let mut dish = seed_dish(&backend, "Chicken Biryani", 350.0);
  let original_created_at = dish.created_at;

  dish.price = 399.0;
  dish.description = "Now with extra masala.".to_string();
  dish.created_at = chrono::Utc::now(); // Edits must not bump catalog position.
  let stored = backend.update_dish(dish.clone()).unwrap();

  assert_eq!(stored.id, dish.id);
  assert_eq!(stored.created_at, original_created_at);
  assert_eq!(stored.price, 399.0);
  assert_eq!(backend.dish(&dish.id).unwrap().price, 399.0);
}

#[test]
fn update_validates_like_insert() {
  setup_tracing();
  let backend = MemoryBackend::new();
  let mut dish = seed_dish(&backend, "Chicken Biryani", 350.0);

  dish.price = -50.0;
  let err = backend.update_dish(dish).unwrap_err();
  assert!(matches!(err, CartError::Validation(_)));
  // Original document untouched.
  assert_eq!(backend.list_dishes()[0].price, 350.0);
}

#[test]
fn delete_reports_whether_anything_was_removed() {
  setup_tracing();
  let backend = MemoryBackend::new();
  let dish = seed_dish(&backend, "Chicken Biryani", 350.0);

  assert!(backend.delete_dish(&dish.id));
  assert!(!backend.delete_dish(&dish.id));
  assert!(backend.dish(&dish.id).is_none());
}

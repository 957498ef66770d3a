// storefront/src/services/catalog_service.rs

//! Dish catalog reads for everyone, CRUD for identities the admin policy
//! authorizes. Thin glue over the document store; the interesting rule here
//! is that validation and authorization both happen before any write.

use crate::errors::{AppError, Result};
use mealcart::{AdminPolicy, Dish, DishId, Identity, MemoryBackend};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// Editable dish fields as submitted by the admin panel forms.
#[derive(Debug, Clone, Deserialize)]
pub struct DishForm {
  pub name: String,
  pub price: f64,
  pub category: String,
  pub description: String,
  pub image_url: Option<String>,
}

pub struct CatalogService {
  store: Arc<MemoryBackend>,
  policy: Arc<dyn AdminPolicy>,
}

impl CatalogService {
  pub fn new(store: Arc<MemoryBackend>, policy: Arc<dyn AdminPolicy>) -> Self {
    Self { store, policy }
  }

  /// Full catalog, newest first. Public: the menu page shows this to
  /// every signed-in shopper.
  pub fn list(&self) -> Vec<Dish> {
    self.store.list_dishes()
  }

  pub fn get(&self, dish: &DishId) -> Result<Dish> {
    self
      .store
      .dish(dish)
      .ok_or_else(|| AppError::NotFound(format!("Dish {} not found.", dish)))
  }

  #[instrument(name = "catalog_service::create", skip(self, form), fields(admin = %identity.email, name = %form.name), err(Display))]
  pub fn create(&self, identity: &Identity, form: DishForm) -> Result<Dish> {
    self.policy.require(identity)?;
    let dish = self
      .store
      .insert_dish(form.name, form.price, form.category, form.description, form.image_url)?;
    info!(dish_id = %dish.id, "Dish added to catalog.");
    Ok(dish)
  }

  #[instrument(name = "catalog_service::update", skip(self, form), fields(admin = %identity.email, dish_id = %dish), err(Display))]
  pub fn update(&self, identity: &Identity, dish: &DishId, form: DishForm) -> Result<Dish> {
    self.policy.require(identity)?;
    let existing = self.get(dish)?;
    let updated = self.store.update_dish(Dish {
      id: existing.id,
      name: form.name,
      price: form.price,
      category: form.category,
      description: form.description,
      image_url: form.image_url,
      created_at: existing.created_at,
    })?;
    info!("Dish updated.");
    Ok(updated)
  }

  /// Deletes the dish document only. Cart lines referencing it become
  /// tombstones that snapshot resolution skips.
  #[instrument(name = "catalog_service::delete", skip(self), fields(admin = %identity.email, dish_id = %dish), err(Display))]
  pub fn delete(&self, identity: &Identity, dish: &DishId) -> Result<()> {
    self.policy.require(identity)?;
    if !self.store.delete_dish(dish) {
      return Err(AppError::NotFound(format!("Dish {} not found.", dish)));
    }
    info!("Dish deleted.");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use mealcart::{EmailAllowlist, UserId};

  fn fixture() -> (CatalogService, Identity, Identity) {
    let store = Arc::new(MemoryBackend::new());
    let policy = Arc::new(EmailAllowlist::new(["admin@foodpoint.example"]));
    let admin = Identity {
      user_id: UserId::new(),
      email: "admin@foodpoint.example".to_string(),
    };
    let shopper = Identity {
      user_id: UserId::new(),
      email: "diner@example.com".to_string(),
    };
    (CatalogService::new(store, policy), admin, shopper)
  }

  fn form(name: &str, price: f64) -> DishForm {
    DishForm {
      name: name.to_string(),
      price,
      category: "Main Course".to_string(),
      description: "A test dish.".to_string(),
      image_url: None,
    }
  }

  #[test]
  fn non_admins_cannot_write_the_catalog() {
    let (catalog, admin, shopper) = fixture();
    assert!(matches!(
      catalog.create(&shopper, form("Chicken Biryani", 350.0)),
      Err(AppError::Cart { .. })
    ));

    let dish = catalog.create(&admin, form("Chicken Biryani", 350.0)).unwrap();
    assert!(catalog.update(&shopper, &dish.id, form("Biryani", 399.0)).is_err());
    assert!(catalog.delete(&shopper, &dish.id).is_err());
    // Reads stay open to everyone.
    assert_eq!(catalog.list().len(), 1);
  }

  #[test]
  fn create_validates_the_form() {
    let (catalog, admin, _) = fixture();
    assert!(catalog.create(&admin, form("", 350.0)).is_err());
    assert!(catalog.create(&admin, form("Chicken Biryani", -5.0)).is_err());
    assert!(catalog.list().is_empty());
  }

  #[test]
  fn update_and_delete_round_trip() {
    let (catalog, admin, _) = fixture();
    let dish = catalog.create(&admin, form("Chicken Biryani", 350.0)).unwrap();

    let updated = catalog.update(&admin, &dish.id, form("Chicken Biryani", 399.0)).unwrap();
    assert_eq!(updated.price, 399.0);
    assert_eq!(updated.created_at, dish.created_at);

    catalog.delete(&admin, &dish.id).unwrap();
    assert!(matches!(catalog.get(&dish.id), Err(AppError::NotFound(_))));
    assert!(matches!(catalog.delete(&admin, &dish.id), Err(AppError::NotFound(_))));
  }
}

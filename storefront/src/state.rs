// storefront/src/state.rs
use crate::config::AppConfig;
use crate::services::auth_service::AuthService;
use crate::services::catalog_service::CatalogService;
use mealcart::MemoryBackend;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  /// The document store standing in for the hosted backend: dish catalog
  /// plus per-user cart collections.
  pub store: Arc<MemoryBackend>,
  pub auth: Arc<AuthService>,
  pub catalog: Arc<CatalogService>,
  pub config: Arc<AppConfig>, // Share loaded config
}

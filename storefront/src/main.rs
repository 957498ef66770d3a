// storefront/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod models;
mod services;
mod state;
mod web;

use crate::config::AppConfig;
use crate::services::auth_service::AuthService;
use crate::services::catalog_service::CatalogService;
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use mealcart::{AdminPolicy, EmailAllowlist, MemoryBackend};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

fn seed_catalog(store: &MemoryBackend) {
  let seeds = [
    ("Chicken Biryani", 350.0, "Main Course", "Fragrant basmati rice layered with spiced chicken."),
    ("Seekh Kebab", 220.0, "BBQ", "Charcoal-grilled minced beef skewers."),
    ("Chicken Karahi", 450.0, "Main Course", "Tomato-based curry cooked in a wok."),
    ("Sweet Lassi", 120.0, "Drinks", "Chilled sweetened yogurt drink."),
    ("Gulab Jamun", 150.0, "Dessert", "Fried dough balls soaked in rose syrup."),
  ];
  for (name, price, category, description) in seeds {
    if let Err(e) = store.insert_dish(name, price, category, description, None) {
      tracing::warn!(error = %e, dish = name, "Failed to seed dish.");
    }
  }
  tracing::info!(count = store.list_dishes().len(), "Demo catalog seeded.");
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting storefront server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // The in-memory document store standing in for the hosted backend
  let store = Arc::new(MemoryBackend::new());
  if app_config.seed_catalog {
    seed_catalog(&store);
  }

  // Admin authorization predicate from configuration
  let policy: Arc<dyn AdminPolicy> = Arc::new(EmailAllowlist::new(app_config.admin_emails.iter()));

  // Create AppState
  let app_state = AppState {
    store: store.clone(),
    auth: Arc::new(AuthService::new(policy.clone())),
    catalog: Arc::new(CatalogService::new(store, policy)),
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}

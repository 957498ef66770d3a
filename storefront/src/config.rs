// storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Comma-separated admin email allowlist, fed into the authorization
  /// predicate. Empty means nobody gets the admin panel.
  pub admin_emails: Vec<String>,

  /// Seed a small demo catalog on startup.
  pub seed_catalog: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let admin_emails = get_env("ADMIN_EMAILS")
      .unwrap_or_else(|_| "admin@foodpoint.example".to_string())
      .split(',')
      .map(|email| email.trim().to_string())
      .filter(|email| !email.is_empty())
      .collect();

    let seed_catalog = get_env("SEED_CATALOG")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_CATALOG value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      admin_emails,
      seed_catalog,
    })
  }
}

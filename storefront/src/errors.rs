// storefront/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use mealcart::CartError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Forbidden: {0}")]
  Forbidden(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Cart Engine Error: {source}")]
  Cart {
    #[from] // Allows conversion from mealcart::CartError
    source: CartError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in handlers using `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<CartError>() {
      // We already have `From<CartError>`, but this handles if it was wrapped in anyhow
      return AppError::Cart {
        source: err.downcast::<CartError>().expect("checked via is::<CartError>"),
      };
    }
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response. Failures stay
    // isolated per request; the notification is all the client sees.
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Forbidden(m) => HttpResponse::Forbidden().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Cart { source } => match source {
        CartError::NotAuthenticated => {
          HttpResponse::Unauthorized().json(json!({"error": "Please sign in first."}))
        }
        CartError::PermissionDenied(m) => HttpResponse::Forbidden().json(json!({"error": m})),
        CartError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
        CartError::Storage { source } => {
          tracing::error!(storage_error = ?source, "Backend storage failure");
          HttpResponse::InternalServerError().json(json!({"error": "Storage operation failed"}))
        }
        CartError::Internal(m) => {
          HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
        }
      },
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

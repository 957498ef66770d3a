// mealcart/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
  /// No authenticated user is bound to the backend session. Mutating cart
  /// operations and snapshot loads require one; the badge renders 0 instead.
  #[error("No authenticated user")]
  NotAuthenticated,

  #[error("Storage operation failed. Source: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },

  #[error("Permission denied: {0}")]
  PermissionDenied(String),

  #[error("Validation failed: {0}")]
  Validation(String),

  #[error("Internal cart error: {0}")]
  Internal(String),
}

// The conversion the engine relies on for external failures: anything a
// backend implementation reports through anyhow surfaces as a Storage error
// at the operation boundary.
impl From<AnyhowError> for CartError {
  fn from(err: AnyhowError) -> Self {
    CartError::Storage { source: err }
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;

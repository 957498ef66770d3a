// storefront/src/models/user.rs

use chrono::{DateTime, Utc};
use mealcart::{Identity, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Customer,
  Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub id: UserId,
  pub email: String,
  #[serde(skip_serializing)] // Never send password hash to client
  pub password_hash: String,
  pub role: Role,
  pub created_at: DateTime<Utc>,
}

impl User {
  /// What the authorization predicate sees.
  pub fn identity(&self) -> Identity {
    Identity {
      user_id: self.id,
      email: self.email.clone(),
    }
  }
}

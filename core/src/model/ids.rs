// mealcart/src/model/ids.rs

//! Opaque identifier newtypes. All three are storage-assigned v4 uuids, but
//! keeping them distinct types stops a line id from ever being handed to a
//! dish lookup (or vice versa) at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! opaque_id {
  ($(#[$doc:meta])* $name:ident) => {
    $(#[$doc])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $name(Uuid);

    impl $name {
      /// Mints a fresh id. Called by storage on document creation.
      pub fn new() -> Self {
        Self(Uuid::new_v4())
      }

      pub fn as_uuid(&self) -> &Uuid {
        &self.0
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::new()
      }
    }

    impl From<Uuid> for $name {
      fn from(raw: Uuid) -> Self {
        Self(raw)
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

opaque_id!(
  /// Identifies an authenticated user (the auth provider's uid).
  UserId
);
opaque_id!(
  /// Identifies a dish document in the catalog collection.
  DishId
);
opaque_id!(
  /// Identifies a single cart line in a user's cart collection.
  LineId
);

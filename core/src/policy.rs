// mealcart/src/policy.rs

//! Authorization predicate over the authenticated identity.
//!
//! The admin surface is gated behind a pluggable trait so the credential
//! values live in configuration and the predicate is testable on its own,
//! rather than hardcoding an email compare at every call site.

use crate::error::{CartError, CartResult};
use crate::model::UserId;
use std::collections::HashSet;
use tracing::warn;

/// Who the authenticated party is, as far as authorization cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
  pub user_id: UserId,
  pub email: String,
}

/// Decides whether an identity may use the admin surface.
pub trait AdminPolicy: Send + Sync {
  fn authorizes(&self, identity: &Identity) -> bool;

  /// Predicate as a guard: `PermissionDenied` when the identity is not
  /// authorized.
  fn require(&self, identity: &Identity) -> CartResult<()> {
    if self.authorizes(identity) {
      Ok(())
    } else {
      warn!(user_id = %identity.user_id, "Admin access denied.");
      Err(CartError::PermissionDenied(
        "You are not authorized to manage the catalog.".to_string(),
      ))
    }
  }
}

/// Allowlist of admin email addresses, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct EmailAllowlist {
  emails: HashSet<String>,
}

impl EmailAllowlist {
  pub fn new<I, S>(emails: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Self {
      emails: emails
        .into_iter()
        .map(|email| email.as_ref().trim().to_ascii_lowercase())
        .filter(|email| !email.is_empty())
        .collect(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.emails.is_empty()
  }
}

impl AdminPolicy for EmailAllowlist {
  fn authorizes(&self, identity: &Identity) -> bool {
    self.emails.contains(&identity.email.trim().to_ascii_lowercase())
  }
}

/// Denies everyone. Useful default when no allowlist is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl AdminPolicy for DenyAll {
  fn authorizes(&self, _identity: &Identity) -> bool {
    false
  }
}

// tests/admin_policy_tests.rs
mod common;

use common::setup_tracing;
use mealcart::{AdminPolicy, CartError, DenyAll, EmailAllowlist, Identity, UserId};

fn identity(email: &str) -> Identity {
  Identity {
    user_id: UserId::new(),
    email: email.to_string(),
  }
}

#[test]
fn allowlist_authorizes_listed_emails_case_insensitively() {
  setup_tracing();
  let policy = EmailAllowlist::new(["Admin@FoodPoint.example"]);

  assert!(policy.authorizes(&identity("admin@foodpoint.example")));
  assert!(policy.authorizes(&identity("ADMIN@foodpoint.EXAMPLE")));
  assert!(policy.authorizes(&identity("  admin@foodpoint.example ")));
  assert!(!policy.authorizes(&identity("customer@foodpoint.example")));
}

#[test]
fn require_maps_refusal_to_permission_denied() {
  setup_tracing();
  let policy = EmailAllowlist::new(["admin@foodpoint.example"]);

  assert!(policy.require(&identity("admin@foodpoint.example")).is_ok());
  let err = policy.require(&identity("someone@else.example")).unwrap_err();
  assert!(matches!(err, CartError::PermissionDenied(_)));
}

#[test]
fn empty_allowlist_authorizes_nobody() {
  setup_tracing();
  let policy = EmailAllowlist::new(Vec::<String>::new());
  assert!(policy.is_empty());
  assert!(!policy.authorizes(&identity("admin@foodpoint.example")));
}

#[test]
fn deny_all_refuses_every_identity() {
  setup_tracing();
  assert!(!DenyAll.authorizes(&identity("admin@foodpoint.example")));
  assert!(DenyAll.require(&identity("admin@foodpoint.example")).is_err());
}

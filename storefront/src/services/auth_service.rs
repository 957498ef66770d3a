// storefront/src/services/auth_service.rs

//! Account directory, password hashing, and bearer-token sessions. Stands
//! in for the hosted auth provider the storefront delegates identity to.

use crate::errors::AppError;
use crate::models::{Role, User};
use argon2::{
  password_hash::{
    rand_core::OsRng, // For generating random salts
    PasswordHash,
    PasswordHasher,   // The main trait for hashing
    PasswordVerifier, // The main trait for verifying
    SaltString,
  },
  Argon2, // The Argon2 algorithm instance
};
use chrono::Utc;
use mealcart::{AdminPolicy, UserId};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Hashes a plain-text password using Argon2.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  debug!("Attempting to hash password.");
  if password.is_empty() {
    error!("Password hashing failed: Password cannot be empty.");
    return Err(AppError::Validation(
      "Password cannot be empty for hashing.".to_string(),
    ));
  }

  let salt = SaltString::generate(&mut OsRng); // Cryptographically secure random salt
  let argon2_hasher = Argon2::default(); // Default Argon2 parameters (recommended)

  match argon2_hasher.hash_password(password.as_bytes(), &salt) {
    Ok(password_hash_obj) => {
      debug!("Password hashed successfully.");
      Ok(password_hash_obj.to_string())
    }
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      Err(AppError::Internal(format!(
        "Password hashing process failed: {}",
        argon_err
      )))
    }
  }
}

/// Verifies a plain-text password against a stored Argon2 hash.
#[instrument(name = "auth_service::verify_password", skip(hashed_password_str, provided_password), err(Display), fields(hash_len = hashed_password_str.len()))]
pub fn verify_password(hashed_password_str: &str, provided_password: &str) -> Result<bool, AppError> {
  debug!("Attempting to verify password.");
  if hashed_password_str.is_empty() {
    error!("Password verification failed: Stored hash string is empty.");
    return Err(AppError::Auth("Invalid stored password format (empty).".to_string()));
  }
  if provided_password.is_empty() {
    error!("Password verification failed: Provided password is empty.");
    return Err(AppError::Auth(
      "Provided password for verification cannot be empty.".to_string(),
    ));
  }

  let parsed_hash = match PasswordHash::new(hashed_password_str) {
    Ok(ph) => ph,
    Err(parse_err) => {
      error!(error = %parse_err, "Failed to parse stored password hash string.");
      return Err(AppError::Internal(format!(
        "Invalid stored password hash format: {}",
        parse_err
      )));
    }
  };

  let argon2_verifier = Argon2::default();

  match argon2_verifier.verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => {
      debug!("Password verification successful: Passwords match.");
      Ok(true)
    }
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: Passwords do not match.");
      Ok(false)
    }
    Err(other_argon_err) => {
      error!(error = %other_argon_err, "Argon2 password verification process encountered an error.");
      Err(AppError::Internal(format!(
        "Password verification process failed: {}",
        other_argon_err
      )))
    }
  }
}

/// Structural email check, same shape the signup form enforced:
/// `local@domain.tld`, no whitespace.
pub fn validate_email(email: &str) -> bool {
  let Some((local, domain)) = email.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.is_empty() || email.chars().any(char::is_whitespace) {
    return false;
  }
  match domain.rsplit_once('.') {
    Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.contains("@"),
    None => false,
  }
}

/// In-memory account directory plus bearer-token session table.
pub struct AuthService {
  users: RwLock<HashMap<UserId, User>>,
  by_email: RwLock<HashMap<String, UserId>>,
  sessions: RwLock<HashMap<String, UserId>>,
  policy: Arc<dyn AdminPolicy>,
}

impl AuthService {
  pub fn new(policy: Arc<dyn AdminPolicy>) -> Self {
    Self {
      users: RwLock::new(HashMap::new()),
      by_email: RwLock::new(HashMap::new()),
      sessions: RwLock::new(HashMap::new()),
      policy,
    }
  }

  /// Creates an account and opens a session. Requesting the admin role is
  /// honored only when the authorization predicate accepts the email;
  /// otherwise signup is refused outright rather than silently downgraded.
  #[instrument(name = "auth_service::sign_up", skip(self, password), fields(email = %email), err(Display))]
  pub fn sign_up(&self, email: &str, password: &str, requested_role: Role) -> Result<(User, String), AppError> {
    let email = email.trim().to_ascii_lowercase();
    if !validate_email(&email) {
      return Err(AppError::Validation("Please provide a valid email address.".to_string()));
    }
    if password.len() < 6 {
      return Err(AppError::Validation(
        "Password must be at least 6 characters.".to_string(),
      ));
    }
    if self.by_email.read().contains_key(&email) {
      return Err(AppError::Validation("An account with this email already exists.".to_string()));
    }

    let user = User {
      id: UserId::new(),
      email: email.clone(),
      password_hash: hash_password(password)?,
      role: requested_role,
      created_at: Utc::now(),
    };

    if requested_role == Role::Admin {
      self.policy.require(&user.identity()).map_err(|_| {
        warn!("Admin signup refused by authorization policy.");
        AppError::Forbidden("This email is not authorized for admin signup.".to_string())
      })?;
    }

    self.by_email.write().insert(email, user.id);
    self.users.write().insert(user.id, user.clone());
    let token = self.open_session(user.id);
    info!(user_id = %user.id, role = ?user.role, "Account created.");
    Ok((user, token))
  }

  #[instrument(name = "auth_service::sign_in", skip(self, password), fields(email = %email), err(Display))]
  pub fn sign_in(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
    let email = email.trim().to_ascii_lowercase();
    let user = self
      .by_email
      .read()
      .get(&email)
      .and_then(|id| self.users.read().get(id).cloned())
      .ok_or_else(|| AppError::Auth("Invalid email or password.".to_string()))?;

    if !verify_password(&user.password_hash, password)? {
      // Same message for unknown email and wrong password; no account probing.
      return Err(AppError::Auth("Invalid email or password.".to_string()));
    }

    let token = self.open_session(user.id);
    info!(user_id = %user.id, "Signed in.");
    Ok((user, token))
  }

  pub fn sign_out(&self, token: &str) {
    if self.sessions.write().remove(token).is_some() {
      info!("Session closed.");
    }
  }

  /// Resolves a bearer token to its account, if the session is live.
  pub fn resolve(&self, token: &str) -> Option<User> {
    let user_id = *self.sessions.read().get(token)?;
    self.users.read().get(&user_id).cloned()
  }

  fn open_session(&self, user: UserId) -> String {
    let token = Uuid::new_v4().to_string();
    self.sessions.write().insert(token.clone(), user);
    token
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use mealcart::EmailAllowlist;

  fn service() -> AuthService {
    AuthService::new(Arc::new(EmailAllowlist::new(["admin@foodpoint.example"])))
  }

  #[test]
  fn hash_then_verify_round_trip() {
    let hash = hash_password("hunter42").unwrap();
    assert!(verify_password(&hash, "hunter42").unwrap());
    assert!(!verify_password(&hash, "hunter43").unwrap());
  }

  #[test]
  fn email_validation_matches_form_rules() {
    assert!(validate_email("someone@example.com"));
    assert!(!validate_email("someone"));
    assert!(!validate_email("some one@example.com"));
    assert!(!validate_email("someone@example"));
    assert!(!validate_email("@example.com"));
  }

  #[test]
  fn signup_then_signin() {
    let auth = service();
    let (user, _token) = auth.sign_up("diner@example.com", "secret6", Role::Customer).unwrap();
    assert_eq!(user.role, Role::Customer);

    let (again, token) = auth.sign_in("Diner@Example.com", "secret6").unwrap();
    assert_eq!(again.id, user.id);
    assert_eq!(auth.resolve(&token).unwrap().id, user.id);
  }

  #[test]
  fn duplicate_email_is_rejected() {
    let auth = service();
    auth.sign_up("diner@example.com", "secret6", Role::Customer).unwrap();
    let err = auth.sign_up("diner@example.com", "secret7", Role::Customer).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
  }

  #[test]
  fn admin_signup_respects_the_policy() {
    let auth = service();
    let (admin, _) = auth.sign_up("admin@foodpoint.example", "secret6", Role::Admin).unwrap();
    assert_eq!(admin.role, Role::Admin);

    let err = auth.sign_up("impostor@example.com", "secret6", Role::Admin).unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
  }

  #[test]
  fn sign_out_invalidates_the_token() {
    let auth = service();
    let (_, token) = auth.sign_up("diner@example.com", "secret6", Role::Customer).unwrap();
    assert!(auth.resolve(&token).is_some());
    auth.sign_out(&token);
    assert!(auth.resolve(&token).is_none());
  }
}

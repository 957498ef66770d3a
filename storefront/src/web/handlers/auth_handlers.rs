// storefront/src/web/handlers/auth_handlers.rs

use actix_web::{http::header, web, FromRequest, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::{Role, User};
use crate::state::AppState;

// --- Authenticated-user extractor ---

/// Resolves the `Authorization: Bearer <token>` header to a live session.
/// Handlers that take this as a parameter are authenticated by
/// construction.
#[derive(Debug)]
pub struct AuthenticatedUser {
  pub user: User,
  pub token: String,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let resolved = req
      .app_data::<web::Data<AppState>>()
      .ok_or_else(|| AppError::Internal("AppState missing from request data.".to_string()))
      .and_then(|state| {
        let token = req
          .headers()
          .get(header::AUTHORIZATION)
          .and_then(|value| value.to_str().ok())
          .and_then(|value| value.strip_prefix("Bearer "))
          .ok_or_else(|| AppError::Auth("Missing bearer token.".to_string()))?;
        let user = state.auth.resolve(token).ok_or_else(|| {
          warn!("AuthenticatedUser extractor: unknown or expired session token.");
          AppError::Auth("Session expired. Please sign in again.".to_string())
        })?;
        Ok(AuthenticatedUser {
          user,
          token: token.to_string(),
        })
      });
    futures_util::future::ready(resolved)
  }
}

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct SignupRequestPayload {
  pub email: String,
  pub password: String,
  /// Defaults to a regular customer account; `admin` is only honored when
  /// the authorization policy accepts the email.
  pub role: Option<Role>,
}

#[derive(Deserialize, Debug)]
pub struct SigninRequestPayload {
  pub email: String,
  pub password: String,
}

// --- Handler Implementations ---

#[instrument(name = "handler::signup", skip(app_state, payload), fields(email = %payload.email))]
pub async fn signup_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<SignupRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let role = payload.role.unwrap_or(Role::Customer);
  let (user, token) = app_state.auth.sign_up(&payload.email, &payload.password, role)?;
  info!(user_id = %user.id, "Signup successful.");
  Ok(HttpResponse::Created().json(json!({
      "message": "Account created.",
      "user": user,
      "token": token
  })))
}

#[instrument(name = "handler::signin", skip(app_state, payload), fields(email = %payload.email))]
pub async fn signin_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<SigninRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let (user, token) = app_state.auth.sign_in(&payload.email, &payload.password)?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Signed in.",
      "user": user,
      "token": token
  })))
}

#[instrument(name = "handler::signout", skip(app_state, auth_user), fields(user_id = %auth_user.user.id))]
pub async fn signout_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  app_state.auth.sign_out(&auth_user.token);
  Ok(HttpResponse::Ok().json(json!({ "message": "You have been successfully logged out." })))
}

/// The session probe the front end calls on page load.
#[instrument(name = "handler::me", skip(auth_user), fields(user_id = %auth_user.user.id))]
pub async fn me_handler(auth_user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(json!({ "user": auth_user.user })))
}

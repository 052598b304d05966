//! User handlers - greeting, signup and signin.

use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use scribe_core::domain::User;
use scribe_core::ports::{PasswordHasher, TokenService};
use scribe_shared::dto::{
    SigninRequest, SigninResponse, SignupRequest, SignupResponse, UserResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /user/
pub async fn hello() -> &'static str {
    "Hello from Scribe!"
}

/// POST /user/signup
///
/// Any persistence failure, including a duplicate email, collapses to the
/// same generic 500; the cause only reaches the logs.
pub async fn signup(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_hasher: web::Data<Arc<dyn PasswordHasher>>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let password_hash = password_hasher.hash(&req.password);
    let user = User::new(req.name, req.email, password_hash);

    let created = state.users.create(user).await.map_err(|e| {
        tracing::error!("Failed to create user: {}", e);
        AppError::Internal("Error creating user".to_string())
    })?;

    let token = token_service.generate_token(created.id).map_err(|e| {
        tracing::error!("Failed to sign token for new user: {}", e);
        AppError::Internal("Error creating user".to_string())
    })?;

    Ok(HttpResponse::Created().json(SignupResponse {
        message: "User created successfully".to_string(),
        token,
    }))
}

/// POST /user/signin
///
/// Looks up the user by email plus recomputed password hash in one query;
/// a wrong password and an unknown email are indistinguishable (both 404).
pub async fn signin(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_hasher: web::Data<Arc<dyn PasswordHasher>>,
    body: web::Json<SigninRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let password_hash = password_hasher.hash(&req.password);

    let user = state
        .users
        .find_by_credentials(&req.email, &password_hash)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up credentials: {}", e);
            AppError::Internal("Error signing in user".to_string())
        })?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let token = token_service.generate_token(user.id).map_err(|e| {
        tracing::error!("Failed to sign token: {}", e);
        AppError::Internal("Error signing in user".to_string())
    })?;

    Ok(HttpResponse::Ok().json(SigninResponse {
        message: "User signed in successfully".to_string(),
        token,
        user: UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
        },
    }))
}

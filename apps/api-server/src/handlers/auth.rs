//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use quill_core::domain::User;
use quill_core::ports::{PasswordService, TokenService};
use quill_shared::dto::{
    LoginRequest, LoginResponse, LoginUser, SignupRequest, SignupResponse, UserSummary,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::InvalidArgument(
            "Invalid email address".to_string(),
        ));
    }
    if req.password.len() < 8 {
        return Err(AppError::InvalidArgument(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Check if user already exists
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    // Hash password
    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Create user
    let user = User::new(req.first_name, req.last_name, req.email, password_hash);
    let saved = state.users.insert(user).await?;

    // Generate token carrying id and email
    let token = token_service
        .generate_token(saved.id, Some(&saved.email))
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Created().json(SignupResponse {
        message: "User registered successfully".to_string(),
        token,
        user: UserSummary::from(&saved),
    }))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Unknown email and wrong password produce the same error, so a caller
    // cannot tell which one failed.
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::InvalidCredentials);
    }

    // Login tokens carry the user id only
    let token = token_service
        .generate_token(user.id, None)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user: LoginUser { email: user.email },
    }))
}

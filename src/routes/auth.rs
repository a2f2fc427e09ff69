// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication routes.

use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::{ensure_admin, AuthUser};
use crate::models::UserResponse;
use crate::routes::MessageResponse;
use crate::services::auth::{
    ChangePasswordRequest, LoginRequest, RefreshRequest, RegisterRequest, UpdateProfileRequest,
};
use crate::services::TokenPair;
use crate::AppState;

/// Routes that need no token.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

/// Routes behind the bearer-token middleware (applied in routes/mod.rs).
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/me", get(me).put(update_me).delete(deactivate))
        .route("/auth/change-password", post(change_password))
        .route("/auth/admin", get(admin_probe))
}

/// Register a new user.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = state.auth_service.register(&payload).await?;
    Ok(Json(user))
}

/// Authenticate and issue a token pair.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenPair>> {
    payload
        .validate()
        .map_err(|_| AppError::Unauthorized("invalid email or password".to_string()))?;

    let pair = state.auth_service.login(&payload).await?;
    Ok(Json(pair))
}

/// Rotate a refresh token into a fresh pair.
async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<TokenPair>> {
    let pair = state.auth_service.refresh(&payload.refresh_token).await?;
    Ok(Json(pair))
}

/// Current user profile.
async fn me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserResponse>> {
    let profile = state.auth_service.current_user(user.user_id).await?;
    Ok(Json(profile))
}

/// Update username/email of the current user.
async fn update_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = state
        .auth_service
        .update_profile(user.user_id, &payload)
        .await?;
    Ok(Json(profile))
}

/// Change the current user's password.
async fn change_password(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state
        .auth_service
        .change_password(user.user_id, &payload)
        .await?;

    Ok(Json(MessageResponse {
        message: "password changed".to_string(),
    }))
}

/// Deactivate (soft-delete) the current user's account.
async fn deactivate(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<MessageResponse>> {
    state.auth_service.deactivate(user.user_id).await?;

    Ok(Json(MessageResponse {
        message: "account deactivated".to_string(),
    }))
}

/// Admin-gated probe endpoint.
async fn admin_probe(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<MessageResponse>> {
    ensure_admin(&user)?;

    let profile = state.auth_service.current_user(user.user_id).await?;
    Ok(Json(MessageResponse {
        message: format!("welcome, admin {}", profile.username),
    }))
}

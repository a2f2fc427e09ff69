// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication service: registration, login, token refresh and
//! current-user resolution.
//!
//! Business-rule violations come back as recoverable `Validation` /
//! `Unauthorized` errors; storage failures propagate as `Database` and are
//! surfaced to callers as internal errors.

use serde::Deserialize;
use validator::Validate;

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::UserResponse;
use crate::services::password::PasswordHasher;
use crate::services::token::{TokenPair, TokenService, TokenType};

/// Passwords nobody should be allowed to use.
const TRIVIAL_PASSWORDS: &[&str] = &["password", "12345678", "qwerty123"];

/// Registration payload.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 100))]
    pub password: String,
    pub password_confirm: String,
}

/// Login payload.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Token-rotation payload.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Profile-update payload; omitted fields keep their current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 50))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

/// Password-change payload.
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 8, max = 100))]
    pub new_password: String,
    pub new_password_confirm: String,
}

/// Orchestrates the credential hasher, token service and user store.
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    hasher: PasswordHasher,
    tokens: TokenService,
    /// Digest verified against when a login email is unknown, so the
    /// rejection path always pays one bcrypt verification. Best-effort
    /// timing uniformity only.
    dummy_digest: String,
}

impl AuthService {
    pub fn new(db: Database, hasher: PasswordHasher, tokens: TokenService) -> Result<Self> {
        let dummy_digest = hasher.hash("placeholder-credential")?;
        Ok(Self {
            db,
            hasher,
            tokens,
            dummy_digest,
        })
    }

    /// Register a new user. New accounts start active and non-admin.
    pub async fn register(&self, req: &RegisterRequest) -> Result<UserResponse> {
        validate_username(&req.username)?;
        validate_password(&req.password)?;
        if req.password != req.password_confirm {
            return Err(AppError::Validation("passwords do not match".to_string()));
        }

        // Fast-path pre-checks; the UNIQUE constraints remain the
        // authoritative guard under concurrent registration.
        if self.db.get_user_by_username(&req.username).await?.is_some() {
            return Err(AppError::Validation(format!(
                "username {} is already taken",
                req.username
            )));
        }
        if self.db.get_user_by_email(&req.email).await?.is_some() {
            return Err(AppError::Validation(format!(
                "email {} is already in use",
                req.email
            )));
        }

        let password_hash = self.hasher.hash(&req.password)?;
        let user = self
            .db
            .create_user(&req.email, &req.username, &password_hash)
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        Ok(user.into())
    }

    /// Authenticate by email and password, returning a token pair.
    ///
    /// Unknown email and wrong password fail with the same message.
    pub async fn login(&self, req: &LoginRequest) -> Result<TokenPair> {
        let user = self.db.get_user_by_email(&req.email).await?;

        // Verify against the stored digest, or the dummy digest when the
        // email is unknown, before deciding anything.
        let digest = user
            .as_ref()
            .map(|u| u.password_hash.as_str())
            .unwrap_or(self.dummy_digest.as_str());
        let password_correct = self.hasher.verify(&req.password, digest);

        let user = match user {
            Some(user) if password_correct => user,
            _ => {
                return Err(AppError::Unauthorized(
                    "invalid email or password".to_string(),
                ))
            }
        };

        if !user.active() {
            return Err(AppError::Unauthorized(
                "account is deactivated".to_string(),
            ));
        }

        tracing::info!(user_id = user.id, "User logged in");

        self.tokens.issue(user.id, &user.email, user.is_admin)
    }

    /// Rotate a refresh token into a fresh pair. The old token is not
    /// blacklisted; there is no revocation store.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair> {
        let claims = self
            .tokens
            .verify(refresh_token, TokenType::Refresh)
            .ok_or_else(|| {
                AppError::Unauthorized("invalid or expired refresh token".to_string())
            })?;

        let user = self
            .db
            .get_user(claims.user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("user not found".to_string()))?;

        if !user.active() {
            return Err(AppError::Unauthorized(
                "account is deactivated".to_string(),
            ));
        }

        self.tokens.issue(user.id, &user.email, user.is_admin)
    }

    /// Resolve an access token's subject to its public view.
    pub async fn current_user(&self, user_id: i64) -> Result<UserResponse> {
        let user = self
            .db
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized(format!("user {} not found", user_id)))?;

        if !user.active() {
            return Err(AppError::Unauthorized(
                "account is deactivated".to_string(),
            ));
        }

        Ok(user.into())
    }

    /// Update username and/or email, re-running the registration rules on
    /// the merged result.
    pub async fn update_profile(
        &self,
        user_id: i64,
        req: &UpdateProfileRequest,
    ) -> Result<UserResponse> {
        let current = self
            .db
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", user_id)))?;

        if !current.active() {
            return Err(AppError::Unauthorized(
                "account is deactivated".to_string(),
            ));
        }

        let username = req.username.clone().unwrap_or(current.username);
        let email = req.email.clone().unwrap_or(current.email);
        validate_username(&username)?;

        if let Some(other) = self.db.get_user_by_username(&username).await? {
            if other.id != user_id {
                return Err(AppError::Validation(format!(
                    "username {} is already taken",
                    username
                )));
            }
        }
        if let Some(other) = self.db.get_user_by_email(&email).await? {
            if other.id != user_id {
                return Err(AppError::Validation(format!(
                    "email {} is already in use",
                    email
                )));
            }
        }

        let updated = self
            .db
            .update_user_profile(user_id, &email, &username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", user_id)))?;

        Ok(updated.into())
    }

    /// Change password after verifying the current one.
    pub async fn change_password(&self, user_id: i64, req: &ChangePasswordRequest) -> Result<()> {
        let user = self
            .db
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized(format!("user {} not found", user_id)))?;

        if !user.active() {
            return Err(AppError::Unauthorized(
                "account is deactivated".to_string(),
            ));
        }

        if !self.hasher.verify(&req.current_password, &user.password_hash) {
            return Err(AppError::Unauthorized(
                "current password is incorrect".to_string(),
            ));
        }

        validate_password(&req.new_password)?;
        if req.new_password != req.new_password_confirm {
            return Err(AppError::Validation("passwords do not match".to_string()));
        }

        let password_hash = self.hasher.hash(&req.new_password)?;
        self.db.update_user_password(user_id, &password_hash).await?;

        tracing::info!(user_id, "Password changed");

        Ok(())
    }

    /// Soft-delete the account. Existing tokens stop working because the
    /// active check fails from here on.
    pub async fn deactivate(&self, user_id: i64) -> Result<()> {
        if !self.db.soft_delete_user(user_id).await? {
            return Err(AppError::NotFound(format!("user {} not found", user_id)));
        }

        tracing::info!(user_id, "User account deactivated");

        Ok(())
    }
}

/// Username rules beyond simple length: restricted alphabet, and at least
/// one non-digit so usernames can't collide with numeric ids.
fn validate_username(username: &str) -> Result<()> {
    if username.len() < 2 || username.len() > 50 {
        return Err(AppError::Validation(
            "username must be between 2 and 50 characters".to_string(),
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        return Err(AppError::Validation(
            "username may only contain letters, digits, dot, dash and underscore".to_string(),
        ));
    }
    if username.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "username cannot consist of digits only".to_string(),
        ));
    }
    Ok(())
}

/// Password policy: length, at least one letter and one digit, and not on
/// the trivial-password denylist.
fn validate_password(password: &str) -> Result<()> {
    if password.len() < 8 {
        return Err(AppError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::Validation(
            "password must contain at least one letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "password must contain at least one digit".to_string(),
        ));
    }
    if TRIVIAL_PASSWORDS.contains(&password.to_lowercase().as_str()) {
        return Err(AppError::Validation("password is too common".to_string()));
    }
    Ok(())
}

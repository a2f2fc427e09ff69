// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer-token authentication middleware.

use crate::error::{AppError, Result};
use crate::services::TokenType;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authenticated user extracted from a verified access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub is_admin: bool,
}

/// Middleware that requires a valid access token in the Authorization
/// header. Refresh tokens are rejected here by the type check.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => h[7..].to_string(),
        _ => {
            return Err(AppError::Unauthorized(
                "missing bearer token".to_string(),
            ))
        }
    };

    let claims = state
        .token_service
        .verify(&token, TokenType::Access)
        .ok_or_else(|| AppError::Unauthorized("invalid or expired token".to_string()))?;

    let auth_user = AuthUser {
        user_id: claims.user_id,
        is_admin: claims.is_admin.unwrap_or(false),
    };
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Gate for admin-only handlers.
pub fn ensure_admin(user: &AuthUser) -> Result<()> {
    if !user.is_admin {
        return Err(AppError::Forbidden(
            "admin privileges required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_admin() {
        let admin = AuthUser {
            user_id: 1,
            is_admin: true,
        };
        assert!(ensure_admin(&admin).is_ok());

        let user = AuthUser {
            user_id: 2,
            is_admin: false,
        };
        assert!(matches!(
            ensure_admin(&user).unwrap_err(),
            AppError::Forbidden(_)
        ));
    }
}

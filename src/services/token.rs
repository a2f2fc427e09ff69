// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access/refresh token issuance and verification.
//!
//! Both token kinds are HS256-signed with the shared secret and carry an
//! explicit `type` claim; a token is only ever valid for the operation its
//! type names. Verification reports failure without a reason so callers
//! cannot be used as an oracle for why a token was rejected.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, Result};

/// The two token kinds and their `type` claim values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

/// JWT claims structure.
///
/// Access tokens carry the subject's email and admin flag; refresh tokens
/// carry only the user id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    #[serde(rename = "type")]
    pub token_type: String,
}

/// Token pair returned by login and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Issues and verifies signed tokens. Pure function of its configuration;
/// no mutable state.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    access_expire_minutes: i64,
    refresh_expire_days: i64,
}

impl TokenService {
    pub fn new(config: &Config) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            access_expire_minutes: config.jwt_access_expire_minutes,
            refresh_expire_days: config.jwt_refresh_expire_days,
        }
    }

    /// Issue a fresh access/refresh pair for a user.
    pub fn issue(&self, user_id: i64, email: &str, is_admin: bool) -> Result<TokenPair> {
        let now = chrono::Utc::now().timestamp();

        let access = Claims {
            user_id,
            email: Some(email.to_string()),
            is_admin: Some(is_admin),
            iat: now,
            exp: now + self.access_expire_minutes * 60,
            token_type: TokenType::Access.as_str().to_string(),
        };

        let refresh = Claims {
            user_id,
            email: None,
            is_admin: None,
            iat: now,
            exp: now + self.refresh_expire_days * 24 * 60 * 60,
            token_type: TokenType::Refresh.as_str().to_string(),
        };

        let key = EncodingKey::from_secret(self.secret.as_bytes());
        let header = Header::new(Algorithm::HS256);

        let access_token = encode(&header, &access, &key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token encoding failed: {}", e)))?;
        let refresh_token = encode(&header, &refresh, &key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token encoding failed: {}", e)))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
        })
    }

    /// Verify a token and check its declared type.
    ///
    /// Returns `None` on signature mismatch, expiry, malformed payload or
    /// type mismatch alike.
    pub fn verify(&self, token: &str, expected: TokenType) -> Option<Claims> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &key, &validation).ok()?;

        if data.claims.token_type != expected.as_str() {
            return None;
        }

        Some(data.claims)
    }
}

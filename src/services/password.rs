// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-way password hashing (bcrypt).
//!
//! Plaintext and digests never appear in logs or API responses; this module
//! only hands the digest back to the caller.

use pwhash::bcrypt::{self, BcryptSetup};

use crate::error::{AppError, Result};

/// Salted bcrypt hashing with a configurable work factor.
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// `cost` is the bcrypt log2 work factor (the production default is 12;
    /// tests use a lower value).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password into a salted digest.
    pub fn hash(&self, plain: &str) -> Result<String> {
        bcrypt::hash_with(
            BcryptSetup {
                cost: Some(self.cost),
                ..Default::default()
            },
            plain,
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))
    }

    /// Verify a plaintext password against a stored digest.
    pub fn verify(&self, plain: &str, digest: &str) -> bool {
        bcrypt::verify(plain, digest)
    }
}

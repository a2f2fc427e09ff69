// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod auth;
pub mod hotel;
pub mod password;
pub mod place;
pub mod review;
pub mod token;

pub use auth::AuthService;
pub use hotel::HotelService;
pub use password::PasswordHasher;
pub use place::PlaceService;
pub use review::ReviewService;
pub use token::{Claims, TokenPair, TokenService, TokenType};

use crate::error::{AppError, Result};

/// Translate a 1-indexed page into SQL (limit, offset), rejecting values
/// outside the documented bounds (page >= 1, limit 1..=100).
pub(crate) fn page_to_offset(page: u32, limit: u32) -> Result<(i64, i64)> {
    if page < 1 {
        return Err(AppError::Validation("page must be at least 1".to_string()));
    }
    if !(1..=100).contains(&limit) {
        return Err(AppError::Validation(
            "limit must be between 1 and 100".to_string(),
        ));
    }
    Ok((i64::from(limit), i64::from(page - 1) * i64::from(limit)))
}

/// Catalog entities (hotels, places) carry a 0-5 rating.
pub(crate) fn check_catalog_rating(rating: f64) -> Result<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(AppError::Validation(
            "rating must be between 0 and 5".to_string(),
        ));
    }
    Ok(())
}

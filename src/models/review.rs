// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Review entity with its polymorphic association.
//!
//! A review belongs to exactly one of {hotel, place}. The schema enforces
//! this with a CHECK constraint; [`Review::valid_association`] is the same
//! rule as a pure predicate for the validation path.

use serde::{Deserialize, Serialize};

/// Review row as stored in the `reviews` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    /// Set iff this review targets a hotel
    pub hotel_id: Option<i64>,
    /// Set iff this review targets a place
    pub place_id: Option<i64>,
    /// Author; not cross-checked against the user store
    pub user_id: i64,
    pub text: String,
    /// 1 to 5 inclusive
    pub rating: i64,
    /// RFC 3339, assigned by the store on insert
    pub created_at: String,
}

impl Review {
    /// Exactly one of the two target references must be present.
    pub fn valid_association(hotel_id: Option<i64>, place_id: Option<i64>) -> bool {
        hotel_id.is_some() != place_id.is_some()
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Point-of-interest catalog entity.

use serde::{Deserialize, Serialize};

/// Fixed category enumeration for points of interest.
///
/// Stored as lowercase text in the `places` table and serialized the same
/// way on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PlaceCategory {
    Museum,
    Park,
    Restaurant,
    Square,
    Theater,
    Shopping,
    Other,
}

/// Place row as stored in the `places` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub category: PlaceCategory,
    pub address: String,
    /// 0.0 to 5.0 inclusive
    pub rating: f64,
}

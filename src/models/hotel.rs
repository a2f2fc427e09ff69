//! Hotel catalog entity.

use serde::{Deserialize, Serialize};

/// Hotel row as stored in the `hotels` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: String,
    /// 0.0 to 5.0 inclusive
    pub rating: f64,
}

//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User row as stored in the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    /// Unique among non-deleted users
    pub email: String,
    /// Unique among non-deleted users
    pub username: String,
    /// bcrypt digest; never serialized into API responses
    pub password_hash: String,
    pub is_active: bool,
    pub is_admin: bool,
    /// RFC 3339, assigned by the store on insert
    pub created_at: String,
    /// Soft-delete marker; a set value means the account is gone
    pub deleted_at: Option<String>,
}

impl User {
    /// Whether the account has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// An account can authenticate only while its active flag is set and it
    /// has not been soft-deleted.
    pub fn active(&self) -> bool {
        self.is_active && !self.is_deleted()
    }
}

/// Public view of a user. This is the only user shape that crosses the API
/// boundary; the password hash stays behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            is_active: user.is_active,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

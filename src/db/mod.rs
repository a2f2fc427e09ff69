//! Database layer (embedded SQLite).

pub mod sqlite;

pub use sqlite::Database;

/// Table names as constants.
pub mod tables {
    pub const USERS: &str = "users";
    pub const HOTELS: &str = "hotels";
    pub const PLACES: &str = "places";
    pub const REVIEWS: &str = "reviews";
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQLite client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (identity records with uniqueness constraints)
//! - Hotels, Places (independent catalog tables)
//! - Reviews (polymorphic association to a hotel or a place)
//!
//! Every operation checks a connection out of the pool for its own scope;
//! nothing is held across requests. Uniqueness of user email/username and
//! the review association rule are enforced here by schema constraints as
//! the authoritative guard; service-level checks are a fast path only.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::db::tables;
use crate::error::{AppError, Result};
use crate::models::{Hotel, Place, PlaceCategory, Review, User};

const MAX_CONNECTIONS: u32 = 5;

/// SQLite database client.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database at `url` and prepare the schema.
    ///
    /// `url` accepts the usual sqlx forms, e.g. `sqlite://travel.db` or
    /// `sqlite::memory:`.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::Database(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        // In-memory databases exist per connection, so the pool must not
        // fan out; on-disk databases get a small pool.
        let max_connections = if url.contains(":memory:") {
            1
        } else {
            MAX_CONNECTIONS
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {}", e)))?;

        let db = Self { pool };
        db.init_schema().await?;

        tracing::info!(url, "Connected to SQLite");

        Ok(db)
    }

    /// Create the four tables if they do not exist yet.
    ///
    /// `reviews` carries the polymorphic-association CHECK so that no write
    /// path, present or future, can produce a row referencing both targets
    /// or neither.
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT UNIQUE NOT NULL,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                is_admin BOOLEAN NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                deleted_at TEXT
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS hotels (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                address TEXT NOT NULL,
                rating REAL NOT NULL CHECK (rating >= 0 AND rating <= 5)
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS places (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                address TEXT NOT NULL,
                rating REAL NOT NULL CHECK (rating >= 0 AND rating <= 5)
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                hotel_id INTEGER,
                place_id INTEGER,
                user_id INTEGER NOT NULL,
                text TEXT NOT NULL,
                rating INTEGER NOT NULL CHECK (rating >= 1 AND rating <= 5),
                created_at TEXT NOT NULL,
                CHECK ((hotel_id IS NULL) != (place_id IS NULL)),
                FOREIGN KEY (hotel_id) REFERENCES hotels(id) ON DELETE CASCADE,
                FOREIGN KEY (place_id) REFERENCES places(id) ON DELETE CASCADE
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Insert a new user. New accounts start active and non-admin.
    ///
    /// A uniqueness conflict on email or username surfaces as a validation
    /// error via the `From<sqlx::Error>` mapping.
    pub async fn create_user(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<User> {
        let sql = format!(
            "INSERT INTO {} (email, username, password_hash, is_active, is_admin, created_at)
             VALUES (?, ?, ?, 1, 0, ?)
             RETURNING id, email, username, password_hash, is_active, is_admin, created_at, deleted_at",
            tables::USERS
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .bind(username)
            .bind(password_hash)
            .bind(Self::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(user)
    }

    /// Get a user by id. Does not filter soft-deleted rows; callers decide
    /// what a deleted account means for them.
    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", tables::USERS);

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Get a non-deleted user by email.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let sql = format!(
            "SELECT * FROM {} WHERE email = ? AND deleted_at IS NULL",
            tables::USERS
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Get a non-deleted user by username.
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let sql = format!(
            "SELECT * FROM {} WHERE username = ? AND deleted_at IS NULL",
            tables::USERS
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Update a user's email and username. Returns the updated row, or
    /// `None` when no such user exists.
    pub async fn update_user_profile(
        &self,
        user_id: i64,
        email: &str,
        username: &str,
    ) -> Result<Option<User>> {
        let sql = format!(
            "UPDATE {} SET email = ?, username = ? WHERE id = ?
             RETURNING id, email, username, password_hash, is_active, is_admin, created_at, deleted_at",
            tables::USERS
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .bind(username)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Replace a user's password hash.
    pub async fn update_user_password(&self, user_id: i64, password_hash: &str) -> Result<bool> {
        let sql = format!("UPDATE {} SET password_hash = ? WHERE id = ?", tables::USERS);

        let result = sqlx::query(&sql)
            .bind(password_hash)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a user: stamp `deleted_at` and clear the active flag.
    /// Returns whether a live row was affected.
    pub async fn soft_delete_user(&self, user_id: i64) -> Result<bool> {
        let sql = format!(
            "UPDATE {} SET deleted_at = ?, is_active = 0 WHERE id = ? AND deleted_at IS NULL",
            tables::USERS
        );

        let result = sqlx::query(&sql)
            .bind(Self::now())
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ─── Hotel Operations ────────────────────────────────────────

    /// Insert a new hotel.
    pub async fn create_hotel(&self, name: &str, address: &str, rating: f64) -> Result<Hotel> {
        let sql = format!(
            "INSERT INTO {} (name, address, rating) VALUES (?, ?, ?)
             RETURNING id, name, address, rating",
            tables::HOTELS
        );

        let hotel = sqlx::query_as::<_, Hotel>(&sql)
            .bind(name)
            .bind(address)
            .bind(rating)
            .fetch_one(&self.pool)
            .await?;

        Ok(hotel)
    }

    /// Get a hotel by id.
    pub async fn get_hotel(&self, hotel_id: i64) -> Result<Option<Hotel>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", tables::HOTELS);

        let hotel = sqlx::query_as::<_, Hotel>(&sql)
            .bind(hotel_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(hotel)
    }

    /// Write back a full hotel row.
    pub async fn update_hotel(&self, hotel: &Hotel) -> Result<()> {
        let sql = format!(
            "UPDATE {} SET name = ?, address = ?, rating = ? WHERE id = ?",
            tables::HOTELS
        );

        sqlx::query(&sql)
            .bind(&hotel.name)
            .bind(&hotel.address)
            .bind(hotel.rating)
            .bind(hotel.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Hard-delete a hotel. Reviews referencing it go with it (cascade).
    pub async fn delete_hotel(&self, hotel_id: i64) -> Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?", tables::HOTELS);

        let result = sqlx::query(&sql).bind(hotel_id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }

    /// List hotels in id order with LIMIT/OFFSET pagination.
    pub async fn list_hotels(&self, limit: i64, offset: i64) -> Result<Vec<Hotel>> {
        let sql = format!(
            "SELECT * FROM {} ORDER BY id LIMIT ? OFFSET ?",
            tables::HOTELS
        );

        let hotels = sqlx::query_as::<_, Hotel>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(hotels)
    }

    // ─── Place Operations ────────────────────────────────────────

    /// Insert a new place.
    pub async fn create_place(
        &self,
        name: &str,
        category: PlaceCategory,
        address: &str,
        rating: f64,
    ) -> Result<Place> {
        let sql = format!(
            "INSERT INTO {} (name, category, address, rating) VALUES (?, ?, ?, ?)
             RETURNING id, name, category, address, rating",
            tables::PLACES
        );

        let place = sqlx::query_as::<_, Place>(&sql)
            .bind(name)
            .bind(category)
            .bind(address)
            .bind(rating)
            .fetch_one(&self.pool)
            .await?;

        Ok(place)
    }

    /// Get a place by id.
    pub async fn get_place(&self, place_id: i64) -> Result<Option<Place>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", tables::PLACES);

        let place = sqlx::query_as::<_, Place>(&sql)
            .bind(place_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(place)
    }

    /// Write back a full place row.
    pub async fn update_place(&self, place: &Place) -> Result<()> {
        let sql = format!(
            "UPDATE {} SET name = ?, category = ?, address = ?, rating = ? WHERE id = ?",
            tables::PLACES
        );

        sqlx::query(&sql)
            .bind(&place.name)
            .bind(place.category)
            .bind(&place.address)
            .bind(place.rating)
            .bind(place.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Hard-delete a place. Reviews referencing it go with it (cascade).
    pub async fn delete_place(&self, place_id: i64) -> Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?", tables::PLACES);

        let result = sqlx::query(&sql).bind(place_id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }

    /// List places in id order with LIMIT/OFFSET pagination.
    pub async fn list_places(&self, limit: i64, offset: i64) -> Result<Vec<Place>> {
        let sql = format!(
            "SELECT * FROM {} ORDER BY id LIMIT ? OFFSET ?",
            tables::PLACES
        );

        let places = sqlx::query_as::<_, Place>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(places)
    }

    // ─── Review Operations ───────────────────────────────────────

    /// Insert a review. The association CHECK and the foreign keys are the
    /// last line of defense behind the service-level validation.
    pub async fn create_review(
        &self,
        hotel_id: Option<i64>,
        place_id: Option<i64>,
        user_id: i64,
        text: &str,
        rating: i64,
    ) -> Result<Review> {
        let sql = format!(
            "INSERT INTO {} (hotel_id, place_id, user_id, text, rating, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, hotel_id, place_id, user_id, text, rating, created_at",
            tables::REVIEWS
        );

        let review = sqlx::query_as::<_, Review>(&sql)
            .bind(hotel_id)
            .bind(place_id)
            .bind(user_id)
            .bind(text)
            .bind(rating)
            .bind(Self::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(review)
    }

    /// Get a review by id.
    pub async fn get_review(&self, review_id: i64) -> Result<Option<Review>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", tables::REVIEWS);

        let review = sqlx::query_as::<_, Review>(&sql)
            .bind(review_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(review)
    }

    /// List reviews for one hotel.
    pub async fn list_reviews_by_hotel(
        &self,
        hotel_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>> {
        let sql = format!(
            "SELECT * FROM {} WHERE hotel_id = ? ORDER BY id LIMIT ? OFFSET ?",
            tables::REVIEWS
        );

        let reviews = sqlx::query_as::<_, Review>(&sql)
            .bind(hotel_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(reviews)
    }

    /// List reviews for one place.
    pub async fn list_reviews_by_place(
        &self,
        place_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>> {
        let sql = format!(
            "SELECT * FROM {} WHERE place_id = ? ORDER BY id LIMIT ? OFFSET ?",
            tables::REVIEWS
        );

        let reviews = sqlx::query_as::<_, Review>(&sql)
            .bind(place_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(reviews)
    }

    /// List reviews written by one user.
    pub async fn list_reviews_by_user(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>> {
        let sql = format!(
            "SELECT * FROM {} WHERE user_id = ? ORDER BY id LIMIT ? OFFSET ?",
            tables::REVIEWS
        );

        let reviews = sqlx::query_as::<_, Review>(&sql)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(reviews)
    }

    /// List all reviews.
    pub async fn list_reviews(&self, limit: i64, offset: i64) -> Result<Vec<Review>> {
        let sql = format!(
            "SELECT * FROM {} ORDER BY id LIMIT ? OFFSET ?",
            tables::REVIEWS
        );

        let reviews = sqlx::query_as::<_, Review>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(reviews)
    }

    /// Update a review's text and rating. Targets and author are immutable.
    /// Returns the updated row, or `None` when no such review exists.
    pub async fn update_review(
        &self,
        review_id: i64,
        text: &str,
        rating: i64,
    ) -> Result<Option<Review>> {
        let sql = format!(
            "UPDATE {} SET text = ?, rating = ? WHERE id = ?
             RETURNING id, hotel_id, place_id, user_id, text, rating, created_at",
            tables::REVIEWS
        );

        let review = sqlx::query_as::<_, Review>(&sql)
            .bind(text)
            .bind(rating)
            .bind(review_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(review)
    }

    /// Hard-delete a review. Returns whether a row existed.
    pub async fn delete_review(&self, review_id: i64) -> Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?", tables::REVIEWS);

        let result = sqlx::query(&sql)
            .bind(review_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Review service: the polymorphic-association rule and cross-entity
//! existence checks.
//!
//! All three creation entry points funnel through the same normalize +
//! persist path, so no route can acquire validation rules the others lack.

use serde::Deserialize;

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::Review;
use crate::services::hotel::HotelService;
use crate::services::page_to_offset;
use crate::services::place::PlaceService;

/// Generic review creation payload: exactly one target reference.
#[derive(Debug, Deserialize)]
pub struct ReviewCreate {
    pub hotel_id: Option<i64>,
    pub place_id: Option<i64>,
    pub user_id: i64,
    pub text: String,
    pub rating: i64,
}

/// Hotel-scoped creation payload.
#[derive(Debug, Deserialize)]
pub struct HotelReviewCreate {
    pub hotel_id: i64,
    pub user_id: i64,
    pub text: String,
    pub rating: i64,
}

/// Place-scoped creation payload.
#[derive(Debug, Deserialize)]
pub struct PlaceReviewCreate {
    pub place_id: i64,
    pub user_id: i64,
    pub text: String,
    pub rating: i64,
}

/// Review update payload; only text and rating are mutable.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewUpdate {
    pub text: Option<String>,
    pub rating: Option<i64>,
}

/// Review business logic over the review store.
///
/// The hotel/place collaborators are optional so the store keeps working
/// without full service wiring; when present, the referenced target must
/// exist before a review is accepted.
#[derive(Clone)]
pub struct ReviewService {
    db: Database,
    hotels: Option<HotelService>,
    places: Option<PlaceService>,
}

impl ReviewService {
    pub fn new(db: Database, hotels: Option<HotelService>, places: Option<PlaceService>) -> Self {
        Self { db, hotels, places }
    }

    /// Validate and persist a review. The single constructor path behind
    /// all three creation routes.
    pub async fn create(&self, data: &ReviewCreate) -> Result<Review> {
        self.normalize(data).await?;

        let review = self
            .db
            .create_review(
                data.hotel_id,
                data.place_id,
                data.user_id,
                &data.text,
                data.rating,
            )
            .await?;

        tracing::info!(
            review_id = review.id,
            hotel_id = review.hotel_id,
            place_id = review.place_id,
            "Review created"
        );

        Ok(review)
    }

    /// Hotel-scoped entry point: pins the association and delegates.
    pub async fn create_for_hotel(&self, data: &HotelReviewCreate) -> Result<Review> {
        self.create(&ReviewCreate {
            hotel_id: Some(data.hotel_id),
            place_id: None,
            user_id: data.user_id,
            text: data.text.clone(),
            rating: data.rating,
        })
        .await
    }

    /// Place-scoped entry point: pins the association and delegates.
    pub async fn create_for_place(&self, data: &PlaceReviewCreate) -> Result<Review> {
        self.create(&ReviewCreate {
            hotel_id: None,
            place_id: Some(data.place_id),
            user_id: data.user_id,
            text: data.text.clone(),
            rating: data.rating,
        })
        .await
    }

    /// Ordered validation: association rule, rating bounds, text, then the
    /// optional existence check against the configured collaborators.
    ///
    /// `user_id` is deliberately not checked against the user store.
    async fn normalize(&self, data: &ReviewCreate) -> Result<()> {
        if !Review::valid_association(data.hotel_id, data.place_id) {
            return Err(AppError::Validation(
                "review must reference exactly one of hotel_id or place_id".to_string(),
            ));
        }

        check_review_rating(data.rating)?;

        if data.text.trim().is_empty() {
            return Err(AppError::Validation(
                "review text cannot be empty".to_string(),
            ));
        }

        if let (Some(hotel_id), Some(hotels)) = (data.hotel_id, &self.hotels) {
            hotels.get(hotel_id).await.map_err(not_found_to_validation)?;
        }
        if let (Some(place_id), Some(places)) = (data.place_id, &self.places) {
            places.get(place_id).await.map_err(not_found_to_validation)?;
        }

        Ok(())
    }

    pub async fn get(&self, review_id: i64) -> Result<Review> {
        self.db
            .get_review(review_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("review {} not found", review_id)))
    }

    pub async fn by_hotel(&self, hotel_id: i64, page: u32, limit: u32) -> Result<Vec<Review>> {
        let (limit, offset) = page_to_offset(page, limit)?;
        self.db.list_reviews_by_hotel(hotel_id, limit, offset).await
    }

    pub async fn by_place(&self, place_id: i64, page: u32, limit: u32) -> Result<Vec<Review>> {
        let (limit, offset) = page_to_offset(page, limit)?;
        self.db.list_reviews_by_place(place_id, limit, offset).await
    }

    pub async fn by_user(&self, user_id: i64, page: u32, limit: u32) -> Result<Vec<Review>> {
        let (limit, offset) = page_to_offset(page, limit)?;
        self.db.list_reviews_by_user(user_id, limit, offset).await
    }

    pub async fn all(&self, page: u32, limit: u32) -> Result<Vec<Review>> {
        let (limit, offset) = page_to_offset(page, limit)?;
        self.db.list_reviews(limit, offset).await
    }

    /// Update text and/or rating; the target association and author are
    /// immutable.
    pub async fn update(&self, review_id: i64, data: &ReviewUpdate) -> Result<Review> {
        if let Some(text) = &data.text {
            if text.trim().is_empty() {
                return Err(AppError::Validation(
                    "review text cannot be empty".to_string(),
                ));
            }
        }
        if let Some(rating) = data.rating {
            check_review_rating(rating)?;
        }

        let current = self.get(review_id).await?;
        let text = data.text.clone().unwrap_or(current.text);
        let rating = data.rating.unwrap_or(current.rating);

        self.db
            .update_review(review_id, &text, rating)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("review {} not found", review_id)))
    }

    /// Hard delete; returns whether the review existed.
    pub async fn delete(&self, review_id: i64) -> Result<bool> {
        self.db.delete_review(review_id).await
    }
}

/// Reviews carry an integer 1-5 rating, unlike the 0-5 catalog ratings.
fn check_review_rating(rating: i64) -> Result<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation(
            "rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}

/// A missing review target is a caller mistake, not a missing resource on
/// the review endpoint itself.
fn not_found_to_validation(err: AppError) -> AppError {
    match err {
        AppError::NotFound(msg) => AppError::Validation(msg),
        other => other,
    }
}

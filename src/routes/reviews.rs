// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Review routes: three creation entry points, paginated reads, update and
//! delete.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::Review;
use crate::routes::{MessageResponse, Pagination};
use crate::services::review::{
    HotelReviewCreate, PlaceReviewCreate, ReviewCreate, ReviewUpdate,
};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reviews/", get(list_reviews).post(create_review))
        .route("/reviews/hotel/", post(create_hotel_review))
        .route("/reviews/place/", post(create_place_review))
        .route(
            "/reviews/{id}",
            get(get_review).put(update_review).delete(delete_review),
        )
        .route("/reviews/hotel/{id}", get(list_hotel_reviews))
        .route("/reviews/place/{id}", get(list_place_reviews))
        .route("/reviews/user/{id}", get(list_user_reviews))
}

/// Create a review with an explicit target reference.
async fn create_review(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ReviewCreate>,
) -> Result<Json<Review>> {
    let review = state.review_service.create(&payload).await?;
    Ok(Json(review))
}

/// Create a hotel review (target pinned by the route).
async fn create_hotel_review(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<HotelReviewCreate>,
) -> Result<Json<Review>> {
    let review = state.review_service.create_for_hotel(&payload).await?;
    Ok(Json(review))
}

/// Create a place review (target pinned by the route).
async fn create_place_review(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PlaceReviewCreate>,
) -> Result<Json<Review>> {
    let review = state.review_service.create_for_place(&payload).await?;
    Ok(Json(review))
}

async fn get_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Review>> {
    let review = state.review_service.get(id).await?;
    Ok(Json(review))
}

async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Review>>> {
    let reviews = state
        .review_service
        .all(pagination.page, pagination.limit)
        .await?;
    Ok(Json(reviews))
}

async fn list_hotel_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Review>>> {
    let reviews = state
        .review_service
        .by_hotel(id, pagination.page, pagination.limit)
        .await?;
    Ok(Json(reviews))
}

async fn list_place_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Review>>> {
    let reviews = state
        .review_service
        .by_place(id, pagination.page, pagination.limit)
        .await?;
    Ok(Json(reviews))
}

async fn list_user_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Review>>> {
    let reviews = state
        .review_service
        .by_user(id, pagination.page, pagination.limit)
        .await?;
    Ok(Json(reviews))
}

/// Update a review's text/rating.
async fn update_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<ReviewUpdate>,
) -> Result<Json<Review>> {
    let review = state.review_service.update(id, &payload).await?;
    Ok(Json(review))
}

/// Delete a review.
async fn delete_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    if !state.review_service.delete(id).await? {
        return Err(AppError::NotFound(format!("review {} not found", id)));
    }

    Ok(Json(MessageResponse {
        message: format!("review {} deleted", id),
    }))
}

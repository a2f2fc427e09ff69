// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hotel CRUD routes.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::Hotel;
use crate::routes::{MessageResponse, Pagination};
use crate::services::hotel::{HotelCreate, HotelUpdate};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/hotels", get(list_hotels).post(create_hotel))
        .route(
            "/hotels/{id}",
            get(get_hotel).put(update_hotel).delete(delete_hotel),
        )
}

async fn create_hotel(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<HotelCreate>,
) -> Result<Json<Hotel>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let hotel = state.hotel_service.create(&payload).await?;
    Ok(Json(hotel))
}

async fn get_hotel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Hotel>> {
    let hotel = state.hotel_service.get(id).await?;
    Ok(Json(hotel))
}

async fn list_hotels(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Hotel>>> {
    let hotels = state
        .hotel_service
        .list(pagination.page, pagination.limit)
        .await?;
    Ok(Json(hotels))
}

async fn update_hotel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<HotelUpdate>,
) -> Result<Json<Hotel>> {
    let hotel = state.hotel_service.update(id, &payload).await?;
    Ok(Json(hotel))
}

async fn delete_hotel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    if !state.hotel_service.delete(id).await? {
        return Err(AppError::NotFound(format!("hotel {} not found", id)));
    }

    Ok(Json(MessageResponse {
        message: format!("hotel {} deleted", id),
    }))
}

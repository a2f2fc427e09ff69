// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Place CRUD routes.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::Place;
use crate::routes::{MessageResponse, Pagination};
use crate::services::place::{PlaceCreate, PlaceUpdate};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/places", get(list_places).post(create_place))
        .route(
            "/places/{id}",
            get(get_place).put(update_place).delete(delete_place),
        )
}

async fn create_place(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PlaceCreate>,
) -> Result<Json<Place>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let place = state.place_service.create(&payload).await?;
    Ok(Json(place))
}

async fn get_place(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Place>> {
    let place = state.place_service.get(id).await?;
    Ok(Json(place))
}

async fn list_places(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Place>>> {
    let places = state
        .place_service
        .list(pagination.page, pagination.limit)
        .await?;
    Ok(Json(places))
}

async fn update_place(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<PlaceUpdate>,
) -> Result<Json<Place>> {
    let place = state.place_service.update(id, &payload).await?;
    Ok(Json(place))
}

async fn delete_place(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    if !state.place_service.delete(id).await? {
        return Err(AppError::NotFound(format!("place {} not found", id)));
    }

    Ok(Json(MessageResponse {
        message: format!("place {} deleted", id),
    }))
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Point-of-interest catalog CRUD.

use serde::Deserialize;
use validator::Validate;

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{Place, PlaceCategory};
use crate::services::{check_catalog_rating, page_to_offset};

/// Place creation payload.
#[derive(Debug, Deserialize, Validate)]
pub struct PlaceCreate {
    #[validate(length(min = 1))]
    pub name: String,
    pub category: PlaceCategory,
    #[validate(length(min = 1))]
    pub address: String,
    pub rating: f64,
}

/// Place update payload; omitted fields keep their current value.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceUpdate {
    pub name: Option<String>,
    pub category: Option<PlaceCategory>,
    pub address: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Clone)]
pub struct PlaceService {
    db: Database,
}

impl PlaceService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: &PlaceCreate) -> Result<Place> {
        check_catalog_rating(data.rating)?;

        self.db
            .create_place(&data.name, data.category, &data.address, data.rating)
            .await
    }

    pub async fn get(&self, place_id: i64) -> Result<Place> {
        self.db
            .get_place(place_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("place {} not found", place_id)))
    }

    /// Merge the provided fields onto the stored row, validate the result
    /// and write it back.
    pub async fn update(&self, place_id: i64, data: &PlaceUpdate) -> Result<Place> {
        let mut place = self.get(place_id).await?;

        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("name cannot be empty".to_string()));
            }
            place.name = name.clone();
        }
        if let Some(category) = data.category {
            place.category = category;
        }
        if let Some(address) = &data.address {
            if address.trim().is_empty() {
                return Err(AppError::Validation("address cannot be empty".to_string()));
            }
            place.address = address.clone();
        }
        if let Some(rating) = data.rating {
            check_catalog_rating(rating)?;
            place.rating = rating;
        }

        self.db.update_place(&place).await?;

        Ok(place)
    }

    /// Hard delete; returns whether the place existed.
    pub async fn delete(&self, place_id: i64) -> Result<bool> {
        self.db.delete_place(place_id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<Place>> {
        let (limit, offset) = page_to_offset(page, limit)?;
        self.db.list_places(limit, offset).await
    }
}

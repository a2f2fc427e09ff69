// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hotel catalog CRUD.

use serde::Deserialize;
use validator::Validate;

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::Hotel;
use crate::services::{check_catalog_rating, page_to_offset};

/// Hotel creation payload.
#[derive(Debug, Deserialize, Validate)]
pub struct HotelCreate {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub address: String,
    pub rating: f64,
}

/// Hotel update payload; omitted fields keep their current value.
#[derive(Debug, Default, Deserialize)]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Clone)]
pub struct HotelService {
    db: Database,
}

impl HotelService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: &HotelCreate) -> Result<Hotel> {
        check_catalog_rating(data.rating)?;

        self.db
            .create_hotel(&data.name, &data.address, data.rating)
            .await
    }

    pub async fn get(&self, hotel_id: i64) -> Result<Hotel> {
        self.db
            .get_hotel(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("hotel {} not found", hotel_id)))
    }

    /// Merge the provided fields onto the stored row, validate the result
    /// and write it back.
    pub async fn update(&self, hotel_id: i64, data: &HotelUpdate) -> Result<Hotel> {
        let mut hotel = self.get(hotel_id).await?;

        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("name cannot be empty".to_string()));
            }
            hotel.name = name.clone();
        }
        if let Some(address) = &data.address {
            if address.trim().is_empty() {
                return Err(AppError::Validation("address cannot be empty".to_string()));
            }
            hotel.address = address.clone();
        }
        if let Some(rating) = data.rating {
            check_catalog_rating(rating)?;
            hotel.rating = rating;
        }

        self.db.update_hotel(&hotel).await?;

        Ok(hotel)
    }

    /// Hard delete; returns whether the hotel existed.
    pub async fn delete(&self, hotel_id: i64) -> Result<bool> {
        self.db.delete_hotel(hotel_id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<Hotel>> {
        let (limit, offset) = page_to_offset(page, limit)?;
        self.db.list_hotels(limit, offset).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_service() -> HotelService {
        HotelService::new(Database::connect("sqlite::memory:").await.unwrap())
    }

    fn create_request(name: &str, rating: f64) -> HotelCreate {
        HotelCreate {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            rating,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_rating() {
        let service = test_service().await;

        assert!(service.create(&create_request("Grand", 5.1)).await.is_err());
        assert!(service.create(&create_request("Grand", -1.0)).await.is_err());

        let hotel = service.create(&create_request("Grand", 4.5)).await.unwrap();
        assert_eq!(hotel.rating, 4.5);
    }

    #[tokio::test]
    async fn test_get_missing_hotel_is_not_found() {
        let service = test_service().await;

        let err = service.get(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let service = test_service().await;
        let hotel = service.create(&create_request("Grand", 4.5)).await.unwrap();

        let updated = service
            .update(
                hotel.id,
                &HotelUpdate {
                    rating: Some(3.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Grand");
        assert_eq!(updated.rating, 3.0);

        let err = service
            .update(
                hotel.id,
                &HotelUpdate {
                    name: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let service = test_service().await;
        let hotel = service.create(&create_request("Grand", 4.5)).await.unwrap();

        assert!(service.delete(hotel.id).await.unwrap());
        assert!(!service.delete(hotel.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let service = test_service().await;
        for i in 0..15 {
            service
                .create(&create_request(&format!("Hotel {}", i), 3.0))
                .await
                .unwrap();
        }

        let first = service.list(1, 10).await.unwrap();
        let second = service.list(2, 10).await.unwrap();
        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 5);

        assert!(service.list(0, 10).await.is_err());
        assert!(service.list(1, 101).await.is_err());
    }
}

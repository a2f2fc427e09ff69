// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hotel search providers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A hotel offer as returned by an external provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelOffer {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Price per night in the provider's currency
    pub price: f64,
    pub rating: f64,
}

/// Capability contract for hotel search providers.
#[async_trait]
pub trait HotelProvider: Send + Sync {
    /// Search hotels in a city for a stay window.
    async fn search_hotels(
        &self,
        city: &str,
        check_in: &str,
        check_out: &str,
        guests: u32,
    ) -> Result<Vec<HotelOffer>>;

    /// Detail lookup by provider-side id.
    async fn hotel_details(&self, hotel_id: &str) -> Result<Option<HotelOffer>>;

    /// Whether the hotel can be booked for the window.
    async fn check_availability(&self, hotel_id: &str, check_in: &str, check_out: &str)
        -> Result<bool>;
}

/// Booking.com adapter.
///
/// TODO: replace the fixed payload with real API calls once credentials are
/// provisioned.
pub struct BookingStub;

#[async_trait]
impl HotelProvider for BookingStub {
    async fn search_hotels(
        &self,
        city: &str,
        _check_in: &str,
        _check_out: &str,
        _guests: u32,
    ) -> Result<Vec<HotelOffer>> {
        tracing::debug!(city, "Hotel search (stub)");

        Ok(vec![HotelOffer {
            id: "1".to_string(),
            name: "Hotel Central".to_string(),
            address: "1 Lenin St".to_string(),
            price: 5000.0,
            rating: 4.5,
        }])
    }

    async fn hotel_details(&self, _hotel_id: &str) -> Result<Option<HotelOffer>> {
        Ok(None)
    }

    async fn check_availability(
        &self,
        _hotel_id: &str,
        _check_in: &str,
        _check_out: &str,
    ) -> Result<bool> {
        Ok(true)
    }
}

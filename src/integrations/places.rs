// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Place search providers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A search hit from an external place provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceSummary {
    pub id: String,
    pub name: String,
    pub categories: Vec<String>,
    pub address: String,
    pub rating: f64,
}

/// Detailed place record from an external provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub address: String,
    pub rating: f64,
    pub reviews_count: u32,
}

/// A review hosted by an external provider (distinct from our own reviews).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderReview {
    pub id: String,
    pub author: String,
    pub rating: i64,
    pub text: String,
    pub created_at: String,
}

/// Capability contract for place search providers.
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    /// Free-text search, optionally biased around a (lat, lng) point.
    async fn search_places(
        &self,
        query: &str,
        location: Option<(f64, f64)>,
        radius_meters: u32,
        limit: u32,
    ) -> Result<Vec<PlaceSummary>>;

    /// Detail lookup by provider-side id.
    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>>;

    /// Fetch a photo by provider reference.
    async fn place_photo(&self, photo_reference: &str, max_width: u32) -> Result<Option<Vec<u8>>>;

    /// Reviews hosted by the provider.
    async fn place_reviews(&self, place_id: &str, limit: u32) -> Result<Vec<ProviderReview>>;
}

/// Foursquare adapter.
///
/// TODO: replace the fixed payloads with calls to the Places API once an
/// API key is provisioned.
pub struct FoursquareStub;

#[async_trait]
impl PlaceProvider for FoursquareStub {
    async fn search_places(
        &self,
        query: &str,
        location: Option<(f64, f64)>,
        _radius_meters: u32,
        _limit: u32,
    ) -> Result<Vec<PlaceSummary>> {
        tracing::debug!(query, ?location, "Place search (stub)");

        Ok(vec![
            PlaceSummary {
                id: "fsq1".to_string(),
                name: "Aroma Coffee House".to_string(),
                categories: vec!["coffee".to_string(), "cafe".to_string()],
                address: "10 Pushkin St".to_string(),
                rating: 4.5,
            },
            PlaceSummary {
                id: "fsq2".to_string(),
                name: "Gorky Park".to_string(),
                categories: vec!["park".to_string(), "outdoor".to_string()],
                address: "9 Krymsky Val".to_string(),
                rating: 4.7,
            },
        ])
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>> {
        Ok(Some(PlaceDetails {
            id: place_id.to_string(),
            name: "Aroma Coffee House".to_string(),
            description: "Cozy coffee house with home-made pastry".to_string(),
            categories: vec!["coffee".to_string(), "cafe".to_string()],
            address: "10 Pushkin St".to_string(),
            rating: 4.5,
            reviews_count: 342,
        }))
    }

    async fn place_photo(&self, _photo_reference: &str, _max_width: u32) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn place_reviews(&self, _place_id: &str, _limit: u32) -> Result<Vec<ProviderReview>> {
        Ok(vec![ProviderReview {
            id: "rev1".to_string(),
            author: "Ivan".to_string(),
            rating: 5,
            text: "Excellent spot, great coffee!".to_string(),
            created_at: "2024-01-15T14:30:00Z".to_string(),
        }])
    }
}

/// Google Places adapter.
///
/// Search is the only call wired so far; the remaining endpoints report no
/// data until the integration is finished.
pub struct GoogleStub;

#[async_trait]
impl PlaceProvider for GoogleStub {
    async fn search_places(
        &self,
        query: &str,
        _location: Option<(f64, f64)>,
        _radius_meters: u32,
        _limit: u32,
    ) -> Result<Vec<PlaceSummary>> {
        tracing::debug!(query, "Place search (stub)");

        Ok(vec![PlaceSummary {
            id: "place1".to_string(),
            name: "Red Square".to_string(),
            categories: vec!["attraction".to_string()],
            address: "Moscow".to_string(),
            rating: 4.8,
        }])
    }

    async fn place_details(&self, _place_id: &str) -> Result<Option<PlaceDetails>> {
        Ok(None)
    }

    async fn place_photo(&self, _photo_reference: &str, _max_width: u32) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn place_reviews(&self, _place_id: &str, _limit: u32) -> Result<Vec<ProviderReview>> {
        Ok(Vec::new())
    }
}

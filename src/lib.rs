// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! TravelCompanion: REST backend for a travel-companion application
//!
//! This crate provides user registration/authentication, hotel and
//! point-of-interest catalogs, and reviews tied to exactly one of the two.

pub mod config;
pub mod db;
pub mod error;
pub mod integrations;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::Database;
use services::{AuthService, HotelService, PlaceService, ReviewService, TokenService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub token_service: TokenService,
    pub auth_service: AuthService,
    pub hotel_service: HotelService,
    pub place_service: PlaceService,
    pub review_service: ReviewService,
}

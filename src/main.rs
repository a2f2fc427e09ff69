// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! TravelCompanion API Server
//!
//! Serves the auth, hotel, place and review endpoints over an embedded
//! SQLite store.

use std::sync::Arc;

use travel_companion::{
    config::Config,
    db::Database,
    services::{AuthService, HotelService, PasswordHasher, PlaceService, ReviewService, TokenService},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting TravelCompanion API");

    // Open the embedded database and prepare the schema
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to open database");

    // Construct the service layer
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let token_service = TokenService::new(&config);
    let auth_service = AuthService::new(db.clone(), hasher, token_service.clone())
        .expect("Failed to initialize auth service");

    let hotel_service = HotelService::new(db.clone());
    let place_service = PlaceService::new(db.clone());

    // Reviews get the catalog services so creation can check that the
    // referenced hotel/place exists.
    let review_service = ReviewService::new(
        db.clone(),
        Some(hotel_service.clone()),
        Some(place_service.clone()),
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        token_service,
        auth_service,
        hotel_service,
        place_service,
        review_service,
    });

    // Build router
    let app = travel_companion::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("travel_companion=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}

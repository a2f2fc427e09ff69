// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use std::sync::Arc;
use tower::ServiceExt;

use travel_companion::config::Config;
use travel_companion::db::Database;
use travel_companion::routes::create_router;
use travel_companion::services::{
    AuthService, HotelService, PasswordHasher, PlaceService, ReviewService, TokenService,
};
use travel_companion::AppState;

/// Create a test app over a fresh in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory database should open");

    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let token_service = TokenService::new(&config);
    let auth_service = AuthService::new(db.clone(), hasher, token_service.clone())
        .expect("auth service should initialize");
    let hotel_service = HotelService::new(db.clone());
    let place_service = PlaceService::new(db.clone());
    let review_service = ReviewService::new(
        db.clone(),
        Some(hotel_service.clone()),
        Some(place_service.clone()),
    );

    let state = Arc::new(AppState {
        config,
        db,
        token_service,
        auth_service,
        hotel_service,
        place_service,
        review_service,
    });

    (create_router(state.clone()), state)
}

/// Build a JSON request.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a JSON request carrying a bearer token.
#[allow(dead_code)]
pub fn authed_json_request(
    method: &str,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request, optionally carrying a bearer token.
#[allow(dead_code)]
pub fn bare_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

/// Register a user and log in, returning (access_token, refresh_token).
#[allow(dead_code)]
pub async fn register_and_login(
    app: &axum::Router,
    username: &str,
    email: &str,
    password: &str,
) -> (String, String) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
                "password_confirm": password,
            }),
        ))
        .await
        .unwrap();
    assert!(
        response.status().is_success(),
        "registration should succeed"
    );

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            serde_json::json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap();
    assert!(response.status().is_success(), "login should succeed");

    let body = body_json(response).await;
    (
        body["access_token"].as_str().unwrap().to_string(),
        body["refresh_token"].as_str().unwrap().to_string(),
    )
}

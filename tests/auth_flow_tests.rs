// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end authentication flow tests.
//!
//! These tests verify that:
//! 1. Registration validates input and never leaks the password hash
//! 2. Login fails uniformly on bad credentials and issues a token pair
//! 3. Token types are enforced symmetrically (access vs refresh)
//! 4. Protected routes resolve the current user from the bearer token

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_register_login_me_scenario() {
    let (app, _state) = common::create_test_app().await;

    // Register alice
    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/auth/register",
            json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "Passw0rd1",
                "password_confirm": "Passw0rd1",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let user = common::body_json(response).await;
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], "alice@example.com");
    assert!(user.get("password_hash").is_none());
    assert!(user.get("hashed_password").is_none());

    // Wrong password is a 401 with the uniform message
    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/auth/login",
            json!({ "email": "alice@example.com", "password": "WrongPass1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(response).await;
    assert_eq!(body["details"], "invalid email or password");

    // Correct password yields both tokens
    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/auth/login",
            json!({ "email": "alice@example.com", "password": "Passw0rd1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tokens = common::body_json(response).await;
    assert!(tokens["access_token"].as_str().is_some());
    assert!(tokens["refresh_token"].as_str().is_some());
    assert_eq!(tokens["token_type"], "bearer");

    // /auth/me resolves the subject
    let access = tokens["access_token"].as_str().unwrap();
    let response = app
        .clone()
        .oneshot(common::bare_request("GET", "/auth/me", Some(access)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let me = common::body_json(response).await;
    assert_eq!(me["username"], "alice");
}

#[tokio::test]
async fn test_unknown_email_gets_same_message_as_wrong_password() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/auth/login",
            json!({ "email": "ghost@example.com", "password": "Passw0rd1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(response).await;
    assert_eq!(body["details"], "invalid email or password");
}

#[tokio::test]
async fn test_register_validation_failures() {
    let (app, _state) = common::create_test_app().await;

    let cases = [
        // username breaks the pattern
        json!({ "username": "bad name", "email": "a@example.com",
                "password": "Passw0rd1", "password_confirm": "Passw0rd1" }),
        // all-digit username
        json!({ "username": "12345", "email": "a@example.com",
                "password": "Passw0rd1", "password_confirm": "Passw0rd1" }),
        // password with no digit
        json!({ "username": "carol", "email": "a@example.com",
                "password": "NoDigitsHere", "password_confirm": "NoDigitsHere" }),
        // denylisted password
        json!({ "username": "carol", "email": "a@example.com",
                "password": "qwerty123", "password_confirm": "qwerty123" }),
        // mismatched confirmation
        json!({ "username": "carol", "email": "a@example.com",
                "password": "Passw0rd1", "password_confirm": "Passw0rd2" }),
        // not an email
        json!({ "username": "carol", "email": "not-an-email",
                "password": "Passw0rd1", "password_confirm": "Passw0rd1" }),
    ];

    for payload in cases {
        let response = app
            .clone()
            .oneshot(common::json_request("POST", "/auth/register", payload.clone()))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "payload should be rejected: {}",
            payload
        );
    }
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let (app, _state) = common::create_test_app().await;

    common::register_and_login(&app, "alice", "alice@example.com", "Passw0rd1").await;

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/auth/register",
            json!({
                "username": "alice2",
                "email": "alice@example.com",
                "password": "Passw0rd1",
                "password_confirm": "Passw0rd1",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_token_type_symmetry() {
    let (app, _state) = common::create_test_app().await;
    let (access, refresh) =
        common::register_and_login(&app, "alice", "alice@example.com", "Passw0rd1").await;

    // Access token presented to the refresh endpoint is rejected
    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/auth/refresh",
            json!({ "refresh_token": access }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Refresh token presented as a bearer credential is rejected
    let response = app
        .clone()
        .oneshot(common::bare_request("GET", "/auth/me", Some(&refresh)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The legitimate uses still work
    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/auth/refresh",
            json!({ "refresh_token": refresh }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(common::bare_request("GET", "/auth/me", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(common::bare_request("GET", "/auth/me", Some("garbage")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_probe_forbidden_for_regular_users() {
    let (app, state) = common::create_test_app().await;
    let (access, _refresh) =
        common::register_and_login(&app, "alice", "alice@example.com", "Passw0rd1").await;

    let response = app
        .clone()
        .oneshot(common::bare_request("GET", "/auth/admin", Some(&access)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A token carrying the admin claim passes the gate.
    let user = state
        .db
        .get_user_by_username("alice")
        .await
        .unwrap()
        .unwrap();
    let admin_pair = state
        .token_service
        .issue(user.id, &user.email, true)
        .unwrap();

    let response = app
        .oneshot(common::bare_request(
            "GET",
            "/auth/admin",
            Some(&admin_pair.access_token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_deactivated_account_loses_access() {
    let (app, _state) = common::create_test_app().await;
    let (access, refresh) =
        common::register_and_login(&app, "alice", "alice@example.com", "Passw0rd1").await;

    let response = app
        .clone()
        .oneshot(common::bare_request("DELETE", "/auth/me", Some(&access)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The still-valid token no longer resolves to an active account.
    let response = app
        .clone()
        .oneshot(common::bare_request("GET", "/auth/me", Some(&access)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Neither refresh nor a fresh login work anymore.
    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/auth/refresh",
            json!({ "refresh_token": refresh }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/auth/login",
            json!({ "email": "alice@example.com", "password": "Passw0rd1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_update_and_password_change() {
    let (app, _state) = common::create_test_app().await;
    let (access, _refresh) =
        common::register_and_login(&app, "alice", "alice@example.com", "Passw0rd1").await;

    // Rename the account
    let response = app
        .clone()
        .oneshot(common::authed_json_request(
            "PUT",
            "/auth/me",
            &access,
            json!({ "username": "alice-renamed" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["username"], "alice-renamed");
    assert_eq!(body["email"], "alice@example.com");

    // Change the password
    let response = app
        .clone()
        .oneshot(common::authed_json_request(
            "POST",
            "/auth/change-password",
            &access,
            json!({
                "current_password": "Passw0rd1",
                "new_password": "Fresh0Password",
                "new_password_confirm": "Fresh0Password",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Only the new password logs in now
    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/auth/login",
            json!({ "email": "alice@example.com", "password": "Passw0rd1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/auth/login",
            json!({ "email": "alice@example.com", "password": "Fresh0Password" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

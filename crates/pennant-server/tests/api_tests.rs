// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Integration tests for the Pennant HTTP surface.
//!
//! This test suite drives the full router against the in-memory store and
//! covers:
//! - The flag lifecycle (create, read, update, delete)
//! - Conflict and not-found outcomes
//! - Caller-input rejections (missing name, missing enabled, malformed JSON)
//! - CORS headers and preflight short-circuiting
//! - Store-outage error mapping

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::Router;
use pennant_server::{create_app_state, create_router};
use pennant_store::MemoryFlagStore;
use tower::ServiceExt;

fn test_router() -> (Arc<MemoryFlagStore>, Router) {
	let store = Arc::new(MemoryFlagStore::new());
	let state = create_app_state(store.clone());
	(store, create_router(state))
}

async fn body_text(response: axum::response::Response) -> String {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("body should collect");
	String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
	Request::builder()
		.method(method)
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.expect("request should build")
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
	Request::builder()
		.method(method)
		.uri(uri)
		.body(Body::empty())
		.expect("request should build")
}

#[tokio::test]
async fn test_health_check_returns_ok() {
	let (_, router) = test_router();

	let response = router
		.oneshot(empty_request(Method::GET, "/api/health-check"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_text(response).await, "ok");
}

/// Walks a flag through its whole lifecycle the way a client would.
#[tokio::test]
async fn test_flag_lifecycle() {
	let (_, router) = test_router();

	// Create
	let response = router
		.clone()
		.oneshot(json_request(
			Method::POST,
			"/api/features",
			r#"{"name":"dark-mode","enabled":true}"#,
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		body_text(response).await,
		"Succesfully created feature dark-mode"
	);

	// Read back
	let response = router
		.clone()
		.oneshot(empty_request(Method::GET, "/api/features/dark-mode"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		response
			.headers()
			.get(header::CONTENT_TYPE)
			.and_then(|v| v.to_str().ok()),
		Some("application/json")
	);
	assert_eq!(
		body_text(response).await,
		r#"{"name":"dark-mode","enabled":true}"#
	);

	// Disable
	let response = router
		.clone()
		.oneshot(json_request(
			Method::PUT,
			"/api/features/dark-mode",
			r#"{"enabled":false}"#,
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		body_text(response).await,
		"Succesfully updated feature: dark-mode"
	);

	let response = router
		.clone()
		.oneshot(empty_request(Method::GET, "/api/features/dark-mode"))
		.await
		.unwrap();
	assert_eq!(
		body_text(response).await,
		r#"{"name":"dark-mode","enabled":false}"#
	);

	// Delete, then the flag is gone
	let response = router
		.clone()
		.oneshot(empty_request(Method::DELETE, "/api/features/dark-mode"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_text(response).await, "Succesfully delted key: dark-mode");

	let response = router
		.oneshot(empty_request(Method::GET, "/api/features/dark-mode"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_twice_conflicts() {
	let (_, router) = test_router();

	let response = router
		.clone()
		.oneshot(json_request(
			Method::POST,
			"/api/features",
			r#"{"name":"x","enabled":true}"#,
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let response = router
		.oneshot(json_request(
			Method::POST,
			"/api/features",
			r#"{"name":"x","enabled":true}"#,
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::CONFLICT);
	assert_eq!(
		body_text(response).await,
		"This feature already exists, please update or delete it instead"
	);
}

#[tokio::test]
async fn test_create_without_name_is_rejected() {
	let (store, router) = test_router();

	let response = router
		.oneshot(json_request(
			Method::POST,
			"/api/features",
			r#"{"enabled":true}"#,
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(body_text(response).await, "You must specify feature name.");
	assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_create_without_enabled_defaults_to_disabled() {
	let (_, router) = test_router();

	let response = router
		.clone()
		.oneshot(json_request(
			Method::POST,
			"/api/features",
			r#"{"name":"quiet-launch"}"#,
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let response = router
		.oneshot(empty_request(Method::GET, "/api/features/quiet-launch"))
		.await
		.unwrap();
	assert_eq!(
		body_text(response).await,
		r#"{"name":"quiet-launch","enabled":false}"#
	);
}

#[tokio::test]
async fn test_update_without_enabled_is_rejected() {
	let (_, router) = test_router();

	router
		.clone()
		.oneshot(json_request(
			Method::POST,
			"/api/features",
			r#"{"name":"beta","enabled":true}"#,
		))
		.await
		.unwrap();

	let response = router
		.oneshot(json_request(Method::PUT, "/api/features/beta", r#"{}"#))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(body_text(response).await, "Request must supply 'enabled' field");
}

#[tokio::test]
async fn test_update_missing_flag_is_not_found() {
	let (_, router) = test_router();

	let response = router
		.oneshot(json_request(
			Method::PUT,
			"/api/features/missing-flag",
			r#"{"enabled":true}"#,
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_already_set_reports_no_op() {
	let (store, router) = test_router();

	router
		.clone()
		.oneshot(json_request(
			Method::POST,
			"/api/features",
			r#"{"name":"beta","enabled":true}"#,
		))
		.await
		.unwrap();
	let writes_before = store.write_count();

	let response = router
		.oneshot(json_request(
			Method::PUT,
			"/api/features/beta",
			r#"{"enabled":true}"#,
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_text(response).await, "beta is already set to 1");
	assert_eq!(store.write_count(), writes_before);
}

#[tokio::test]
async fn test_delete_missing_flag_is_not_found() {
	let (_, router) = test_router();

	let response = router
		.oneshot(empty_request(Method::DELETE, "/api/features/ghost"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(body_text(response).await, "Could not find feature to delete: ghost");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
	let (_, router) = test_router();

	let response = router
		.oneshot(json_request(Method::POST, "/api/features", "{not json"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert!(body_text(response).await.starts_with("Error reading request:"));
}

#[tokio::test]
async fn test_list_features_returns_every_flag() {
	let (_, router) = test_router();

	for body in [
		r#"{"name":"a","enabled":true}"#,
		r#"{"name":"b","enabled":false}"#,
	] {
		router
			.clone()
			.oneshot(json_request(Method::POST, "/api/features", body))
			.await
			.unwrap();
	}

	let response = router
		.oneshot(empty_request(Method::GET, "/api/features"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let mut flags: Vec<serde_json::Value> =
		serde_json::from_str(&body_text(response).await).unwrap();
	flags.sort_by_key(|f| f["name"].as_str().map(str::to_string));
	assert_eq!(
		flags,
		vec![
			serde_json::json!({"name": "a", "enabled": true}),
			serde_json::json!({"name": "b", "enabled": false}),
		]
	);
}

#[tokio::test]
async fn test_list_skips_unreadable_keys() {
	let (store, router) = test_router();

	for body in [
		r#"{"name":"good","enabled":true}"#,
		r#"{"name":"bad","enabled":true}"#,
	] {
		router
			.clone()
			.oneshot(json_request(Method::POST, "/api/features", body))
			.await
			.unwrap();
	}
	store.mark_unreadable("bad");

	let response = router
		.oneshot(empty_request(Method::GET, "/api/features"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let flags: Vec<serde_json::Value> = serde_json::from_str(&body_text(response).await).unwrap();
	assert_eq!(flags, vec![serde_json::json!({"name": "good", "enabled": true})]);
}

#[tokio::test]
async fn test_store_outage_maps_to_internal_error() {
	let (store, router) = test_router();
	store.set_broken(true);

	let response = router
		.clone()
		.oneshot(empty_request(Method::GET, "/api/features"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	assert!(body_text(response).await.starts_with("Error getting features:"));

	let response = router
		.oneshot(empty_request(Method::GET, "/api/features/any"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_responses_carry_cors_headers() {
	let (_, router) = test_router();

	let response = router
		.oneshot(empty_request(Method::GET, "/api/features"))
		.await
		.unwrap();

	assert_eq!(
		response.headers().get("access-control-allow-origin"),
		Some(&HeaderValue::from_static("*"))
	);
}

#[tokio::test]
async fn test_preflight_short_circuits_with_headers_only() {
	let (_, router) = test_router();

	let request = Request::builder()
		.method(Method::OPTIONS)
		.uri("/api/features")
		.header(header::ORIGIN, "http://example.com")
		.header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
		.body(Body::empty())
		.unwrap();

	let response = router.oneshot(request).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		response.headers().get("access-control-allow-origin"),
		Some(&HeaderValue::from_static("*"))
	);
	let allowed = response
		.headers()
		.get("access-control-allow-methods")
		.and_then(|v| v.to_str().ok())
		.unwrap_or_default()
		.to_string();
	assert!(allowed.contains("PUT"));
	assert!(allowed.contains("DELETE"));
	assert_eq!(body_text(response).await, "");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
	let (_, router) = test_router();

	let response = router
		.oneshot(empty_request(Method::GET, "/api/openapi.json"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let doc: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
	assert!(doc["paths"]["/api/features"].is_object());
}

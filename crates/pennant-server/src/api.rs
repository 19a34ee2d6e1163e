// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use std::sync::Arc;

use axum::http::Method;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use pennant_registry::FlagRegistry;
use pennant_store::FlagStore;

use crate::{api_docs, routes};

/// Shared per-request state.
///
/// Carries only the registry, which itself holds the injected store handle;
/// cloning is cheap and the handlers never block each other on it.
#[derive(Clone)]
pub struct AppState {
	pub registry: Arc<FlagRegistry>,
}

/// Build the application state around a store backend.
pub fn create_app_state(store: Arc<dyn FlagStore>) -> AppState {
	AppState {
		registry: Arc::new(FlagRegistry::new(store)),
	}
}

/// Build the application router.
///
/// Every response carries the permissive CORS headers; OPTIONS preflights
/// short-circuit inside the CORS layer with headers and no body.
pub fn create_router(state: AppState) -> Router {
	let cors = CorsLayer::new()
		.allow_origin(Any)
		.allow_methods([
			Method::GET,
			Method::POST,
			Method::PUT,
			Method::DELETE,
			Method::OPTIONS,
		])
		.allow_headers(Any);

	Router::new()
		.route("/api/health-check", get(routes::health::health_check))
		.route("/api/openapi.json", get(api_docs::serve_openapi))
		.route(
			"/api/features",
			get(routes::features::list_features).post(routes::features::create_feature),
		)
		.route(
			"/api/features/{key}",
			get(routes::features::get_feature)
				.put(routes::features::update_feature)
				.delete(routes::features::delete_feature),
		)
		.layer(cors)
		.with_state(state)
}

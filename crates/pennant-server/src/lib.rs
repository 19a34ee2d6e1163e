// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pennant feature flag server.
//!
//! This crate provides the HTTP surface for the Pennant registry: an axum
//! router binding the `/api` routes to registry operations against the
//! shared key-value store.

pub mod api;
pub mod api_docs;
pub mod api_response;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use pennant_server_config::ServerConfig;

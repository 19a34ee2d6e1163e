// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health HTTP handlers.

use axum::{http::StatusCode, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/api/health-check",
    responses(
        (status = 200, description = "Server is alive", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
/// GET /api/health-check - Liveness probe; always answers 200 "ok".
pub async fn health_check() -> impl IntoResponse {
	(StatusCode::OK, "ok")
}

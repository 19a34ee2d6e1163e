// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! API response helpers.
//!
//! Failure responses are plain text bodies describing the failure, paired
//! with the status the outcome maps to. Success bodies are either JSON
//! (reads) or plain-text confirmations (writes); only the failure side is
//! shared enough to warrant helpers.

use axum::http::StatusCode;

/// Create a 400 Bad Request response.
pub fn bad_request(message: impl Into<String>) -> (StatusCode, String) {
	(StatusCode::BAD_REQUEST, message.into())
}

/// Create a 409 Conflict response.
pub fn conflict(message: impl Into<String>) -> (StatusCode, String) {
	(StatusCode::CONFLICT, message.into())
}

/// Create a 404 Not Found response.
pub fn not_found(message: impl Into<String>) -> (StatusCode, String) {
	(StatusCode::NOT_FOUND, message.into())
}

/// Create a 500 Internal Server Error response.
pub fn internal_error(message: impl Into<String>) -> (StatusCode, String) {
	(StatusCode::INTERNAL_SERVER_ERROR, message.into())
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Store error types.

use thiserror::Error;

/// Errors produced by a [`FlagStore`](crate::FlagStore) backend.
///
/// Absent keys are not errors; the contract reports them as `Option::None`
/// or a zero deleted-count. Anything here means the store itself could not
/// serve the call.
#[derive(Debug, Error)]
pub enum StoreError {
	/// The Redis backend reported a protocol or connection failure.
	#[error("redis error: {0}")]
	Redis(#[from] redis::RedisError),

	/// The store could not be reached or refused the operation.
	#[error("store unavailable: {0}")]
	Unavailable(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

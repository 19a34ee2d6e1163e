// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Registry error taxonomy.

use pennant_store::StoreError;
use thiserror::Error;

/// Outcomes a registry operation can fail with.
///
/// Caller-input failures (`MissingName`, `MissingEnabledField`) are decided
/// before any store call. `Conflict` and `NotFound` are derived from store
/// content. `StoreUnavailable` folds every transport-level store failure;
/// no operation retries, a single failed store call surfaces immediately.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// No flag name was supplied, or it was empty.
	#[error("feature name must be supplied")]
	MissingName,

	/// An update arrived without the mandatory enabled field.
	#[error("request must supply 'enabled' field")]
	MissingEnabledField,

	/// A create targeted a name that already exists.
	#[error("feature {0} already exists")]
	Conflict(String),

	/// The named flag does not exist.
	#[error("feature {0} not found")]
	NotFound(String),

	/// The backing store failed to serve a call.
	#[error("flag store unavailable: {0}")]
	StoreUnavailable(#[from] StoreError),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

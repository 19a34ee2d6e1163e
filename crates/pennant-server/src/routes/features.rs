// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Feature flag HTTP handlers.
//!
//! Maps the registry's outcome taxonomy onto the wire contract: JSON bodies
//! for reads, plain-text confirmations for writes, plain-text error bodies
//! throughout. 400 for caller-input failures, 404 for missing flags, 409 for
//! create conflicts, 500 for store failures.

use axum::{
	extract::rejection::JsonRejection,
	extract::{Path, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use pennant_core::Flag;
use pennant_registry::{RegistryError, UpdateOutcome};

use crate::{
	api::AppState,
	api_response::{bad_request, conflict, internal_error, not_found},
};

/// Wire representation of a single flag.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeatureResponse {
	pub name: String,
	pub enabled: bool,
}

/// Body of a create request.
///
/// Both fields are optional at the boundary so the handler can tell "absent"
/// from "present": a missing name is rejected, a missing enabled state
/// defaults to disabled.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateFeatureRequest {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub enabled: Option<bool>,
}

/// Body of an update request.
///
/// `enabled` is optional in the schema but mandatory in the contract; the
/// registry rejects its absence before touching the store.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateFeatureRequest {
	#[serde(default)]
	pub enabled: Option<bool>,
}

fn flag_to_response(flag: &Flag) -> FeatureResponse {
	FeatureResponse {
		name: flag.name.clone(),
		enabled: flag.enabled,
	}
}

#[utoipa::path(
	get,
	path = "/api/features",
	responses(
		(status = 200, description = "All feature flags", body = [FeatureResponse]),
		(status = 500, description = "Store failure", body = String, content_type = "text/plain")
	),
	tag = "features"
)]
/// GET /api/features - List every flag in the store.
#[tracing::instrument(skip(state))]
pub async fn list_features(State(state): State<AppState>) -> impl IntoResponse {
	match state.registry.list().await {
		Ok(flags) => {
			tracing::info!(flag_count = flags.len(), "listed features");
			let features: Vec<FeatureResponse> = flags.iter().map(flag_to_response).collect();
			(StatusCode::OK, Json(features)).into_response()
		}
		Err(e) => {
			tracing::error!(error = %e, "failed to list features");
			internal_error(format!("Error getting features: {e}")).into_response()
		}
	}
}

#[utoipa::path(
	post,
	path = "/api/features",
	request_body = CreateFeatureRequest,
	responses(
		(status = 200, description = "Feature created", body = String, content_type = "text/plain"),
		(status = 400, description = "Missing name or malformed body", body = String, content_type = "text/plain"),
		(status = 409, description = "Feature already exists", body = String, content_type = "text/plain"),
		(status = 500, description = "Store failure", body = String, content_type = "text/plain")
	),
	tag = "features"
)]
/// POST /api/features - Create a flag under a new name.
#[tracing::instrument(skip(state, payload))]
pub async fn create_feature(
	State(state): State<AppState>,
	payload: Result<Json<CreateFeatureRequest>, JsonRejection>,
) -> impl IntoResponse {
	let payload = match payload {
		Ok(Json(payload)) => payload,
		Err(e) => {
			tracing::warn!(error = %e, "failed to decode create request body");
			return bad_request(format!("Error reading request: {e}")).into_response();
		}
	};

	match state
		.registry
		.create(payload.name.as_deref(), payload.enabled)
		.await
	{
		Ok(flag) => (
			StatusCode::OK,
			format!("Succesfully created feature {}", flag.name),
		)
			.into_response(),
		Err(RegistryError::MissingName) => {
			bad_request("You must specify feature name.").into_response()
		}
		Err(RegistryError::Conflict(_)) => {
			conflict("This feature already exists, please update or delete it instead")
				.into_response()
		}
		Err(e) => {
			tracing::error!(error = %e, "failed to create feature");
			internal_error(format!("Error adding feature: {e}")).into_response()
		}
	}
}

#[utoipa::path(
	get,
	path = "/api/features/{key}",
	params(
		("key" = String, Path, description = "Flag name")
	),
	responses(
		(status = 200, description = "The feature flag", body = FeatureResponse),
		(status = 404, description = "Feature not found", body = String, content_type = "text/plain"),
		(status = 500, description = "Store failure", body = String, content_type = "text/plain")
	),
	tag = "features"
)]
/// GET /api/features/{key} - Fetch one flag by name.
#[tracing::instrument(skip(state), fields(key = %key))]
pub async fn get_feature(
	State(state): State<AppState>,
	Path(key): Path<String>,
) -> impl IntoResponse {
	match state.registry.get(&key).await {
		Ok(flag) => (StatusCode::OK, Json(flag_to_response(&flag))).into_response(),
		Err(RegistryError::NotFound(_)) => {
			not_found(format!("Could not find feature: {key}")).into_response()
		}
		Err(e) => {
			tracing::error!(error = %e, "failed to get feature");
			internal_error(format!("Error getting feature: {e}")).into_response()
		}
	}
}

#[utoipa::path(
	put,
	path = "/api/features/{key}",
	params(
		("key" = String, Path, description = "Flag name")
	),
	request_body = UpdateFeatureRequest,
	responses(
		(status = 200, description = "Feature updated (or already set)", body = String, content_type = "text/plain"),
		(status = 400, description = "Missing enabled field or malformed body", body = String, content_type = "text/plain"),
		(status = 404, description = "Feature not found", body = String, content_type = "text/plain"),
		(status = 500, description = "Store failure", body = String, content_type = "text/plain")
	),
	tag = "features"
)]
/// PUT /api/features/{key} - Set an existing flag's enabled state.
#[tracing::instrument(skip(state, payload), fields(key = %key))]
pub async fn update_feature(
	State(state): State<AppState>,
	Path(key): Path<String>,
	payload: Result<Json<UpdateFeatureRequest>, JsonRejection>,
) -> impl IntoResponse {
	let payload = match payload {
		Ok(Json(payload)) => payload,
		Err(e) => {
			tracing::warn!(error = %e, "failed to decode update request body");
			return bad_request(format!("Error reading request: {e}")).into_response();
		}
	};

	match state.registry.update(&key, payload.enabled).await {
		Ok(UpdateOutcome::Updated) => (
			StatusCode::OK,
			format!("Succesfully updated feature: {key}"),
		)
			.into_response(),
		Ok(UpdateOutcome::AlreadySet { raw }) => {
			(StatusCode::OK, format!("{key} is already set to {raw}")).into_response()
		}
		Err(RegistryError::MissingEnabledField) => {
			bad_request("Request must supply 'enabled' field").into_response()
		}
		Err(RegistryError::NotFound(_)) => {
			not_found(format!("Could not find feature: {key}")).into_response()
		}
		Err(e) => {
			tracing::error!(error = %e, "failed to update feature");
			internal_error(format!("Error updating feature: {e}")).into_response()
		}
	}
}

#[utoipa::path(
	delete,
	path = "/api/features/{key}",
	params(
		("key" = String, Path, description = "Flag name")
	),
	responses(
		(status = 200, description = "Feature deleted", body = String, content_type = "text/plain"),
		(status = 404, description = "Nothing existed to delete", body = String, content_type = "text/plain"),
		(status = 500, description = "Store failure", body = String, content_type = "text/plain")
	),
	tag = "features"
)]
/// DELETE /api/features/{key} - Remove a flag.
#[tracing::instrument(skip(state), fields(key = %key))]
pub async fn delete_feature(
	State(state): State<AppState>,
	Path(key): Path<String>,
) -> impl IntoResponse {
	match state.registry.delete(&key).await {
		Ok(()) => (StatusCode::OK, format!("Succesfully delted key: {key}")).into_response(),
		Err(RegistryError::NotFound(_)) => {
			not_found(format!("Could not find feature to delete: {key}")).into_response()
		}
		Err(e) => {
			tracing::error!(error = %e, "failed to delete feature");
			internal_error(format!("Error deleting feature: {e}")).into_response()
		}
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenAPI documentation for the HTTP surface.

use axum::Json;
use utoipa::OpenApi;

use crate::routes;

/// OpenAPI document covering every route the server exposes.
#[derive(OpenApi)]
#[openapi(
	paths(
		routes::health::health_check,
		routes::features::list_features,
		routes::features::create_feature,
		routes::features::get_feature,
		routes::features::update_feature,
		routes::features::delete_feature,
	),
	components(schemas(
		routes::features::FeatureResponse,
		routes::features::CreateFeatureRequest,
		routes::features::UpdateFeatureRequest,
	)),
	tags(
		(name = "features", description = "Feature flag registry operations"),
		(name = "health", description = "Liveness probes")
	)
)]
pub struct ApiDoc;

/// GET /api/openapi.json - Serve the generated OpenAPI document.
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
	Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_document_lists_every_route() {
		let doc = ApiDoc::openapi();
		assert!(doc.paths.paths.contains_key("/api/health-check"));
		assert!(doc.paths.paths.contains_key("/api/features"));
		assert!(doc.paths.paths.contains_key("/api/features/{key}"));
	}
}

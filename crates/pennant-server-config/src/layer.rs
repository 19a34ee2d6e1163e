// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer, merged across sources by precedence.

use serde::Deserialize;

use crate::sections::{HttpConfigLayer, LoggingConfigLayer, StoreConfigLayer};

/// One source's view of the configuration, every section optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub store: Option<StoreConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge `other` on top of `self`; `other` wins per field.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		match (&mut self.http, other.http) {
			(Some(base), Some(layer)) => base.merge(layer),
			(base @ None, Some(layer)) => *base = Some(layer),
			_ => {}
		}
		match (&mut self.store, other.store) {
			(Some(base), Some(layer)) => base.merge(layer),
			(base @ None, Some(layer)) => *base = Some(layer),
			_ => {}
		}
		match (&mut self.logging, other.logging) {
			(Some(base), Some(layer)) => base.merge(layer),
			(base @ None, Some(layer)) => *base = Some(layer),
			_ => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_layers_field_by_field() {
		let mut base = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: Some("127.0.0.1".to_string()),
				port: Some(9000),
			}),
			store: None,
			logging: None,
		};
		base.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: None,
				port: Some(9001),
			}),
			store: Some(StoreConfigLayer {
				db: Some(2),
				..StoreConfigLayer::default()
			}),
			logging: None,
		});

		let http = base.http.unwrap();
		assert_eq!(http.host.as_deref(), Some("127.0.0.1"));
		assert_eq!(http.port, Some(9001));
		assert_eq!(base.store.unwrap().db, Some(2));
		assert!(base.logging.is_none());
	}

	#[test]
	fn test_layer_parses_from_toml() {
		let layer: ServerConfigLayer = toml::from_str(
			r#"
			[http]
			port = 9000

			[store]
			host = "flags.internal"
			db = 1
			"#,
		)
		.unwrap();

		assert_eq!(layer.http.unwrap().port, Some(9000));
		let store = layer.store.unwrap();
		assert_eq!(store.host.as_deref(), Some("flags.internal"));
		assert_eq!(store.db, Some(1));
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flag store connection configuration.

use serde::Deserialize;

/// Store configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct StoreConfig {
	pub host: String,
	pub port: u16,
	/// Logical database index within the store.
	pub db: i64,
	pub password: Option<String>,
}

impl Default for StoreConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_string(),
			port: 6379,
			db: 0,
			password: None,
		}
	}
}

impl StoreConfig {
	/// Connection URL for the Redis client.
	pub fn connection_url(&self) -> String {
		match &self.password {
			Some(password) => format!(
				"redis://:{password}@{host}:{port}/{db}",
				host = self.host,
				port = self.port,
				db = self.db
			),
			None => format!(
				"redis://{host}:{port}/{db}",
				host = self.host,
				port = self.port,
				db = self.db
			),
		}
	}

	/// Host:port pair for log lines; never includes the password.
	pub fn addr(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

/// Store configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfigLayer {
	#[serde(default)]
	pub host: Option<String>,
	#[serde(default)]
	pub port: Option<u16>,
	#[serde(default)]
	pub db: Option<i64>,
	#[serde(default)]
	pub password: Option<String>,
}

impl StoreConfigLayer {
	pub fn merge(&mut self, other: StoreConfigLayer) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
		if other.db.is_some() {
			self.db = other.db;
		}
		if other.password.is_some() {
			self.password = other.password;
		}
	}

	pub fn finalize(self) -> StoreConfig {
		let defaults = StoreConfig::default();
		StoreConfig {
			host: self.host.unwrap_or(defaults.host),
			port: self.port.unwrap_or(defaults.port),
			db: self.db.unwrap_or(defaults.db),
			password: self.password,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_connection_url() {
		let config = StoreConfigLayer::default().finalize();
		assert_eq!(config.connection_url(), "redis://127.0.0.1:6379/0");
	}

	#[test]
	fn test_connection_url_with_password() {
		let config = StoreConfig {
			host: "flags.internal".to_string(),
			port: 6380,
			db: 3,
			password: Some("hunter2".to_string()),
		};
		assert_eq!(
			config.connection_url(),
			"redis://:hunter2@flags.internal:6380/3"
		);
	}

	#[test]
	fn test_addr_never_leaks_password() {
		let config = StoreConfig {
			password: Some("hunter2".to_string()),
			..StoreConfig::default()
		};
		assert_eq!(config.addr(), "127.0.0.1:6379");
		assert!(!config.addr().contains("hunter2"));
	}
}

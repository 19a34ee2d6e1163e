// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redis-backed flag store.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::instrument;

use crate::error::Result;
use crate::store::FlagStore;

/// Flag store backed by a Redis database.
///
/// Holds a single multiplexed connection manager; clones of the manager share
/// the underlying connection and reconnect on failure, so one store instance
/// serves every request for the lifetime of the process.
#[derive(Clone)]
pub struct RedisFlagStore {
	manager: ConnectionManager,
}

impl RedisFlagStore {
	/// Connect to the Redis instance at `url`.
	///
	/// `url` uses the `redis://[:password@]host:port/db` scheme.
	pub async fn connect(url: &str) -> Result<Self> {
		let client = redis::Client::open(url)?;
		let manager = ConnectionManager::new(client).await?;
		Ok(Self { manager })
	}
}

impl std::fmt::Debug for RedisFlagStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RedisFlagStore").finish_non_exhaustive()
	}
}

#[async_trait]
impl FlagStore for RedisFlagStore {
	#[instrument(skip(self))]
	async fn get(&self, key: &str) -> Result<Option<String>> {
		let mut conn = self.manager.clone();
		Ok(conn.get(key).await?)
	}

	#[instrument(skip(self, value))]
	async fn set(&self, key: &str, value: &str) -> Result<()> {
		let mut conn = self.manager.clone();
		let _: () = conn.set(key, value).await?;
		Ok(())
	}

	#[instrument(skip(self, value))]
	async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
		let mut conn = self.manager.clone();
		Ok(conn.set_nx(key, value).await?)
	}

	#[instrument(skip(self))]
	async fn delete(&self, key: &str) -> Result<u64> {
		let mut conn = self.manager.clone();
		Ok(conn.del(key).await?)
	}

	#[instrument(skip(self))]
	async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
		let mut conn = self.manager.clone();
		Ok(conn.keys(pattern).await?)
	}
}

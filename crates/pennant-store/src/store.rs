// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The key-value store contract.

use async_trait::async_trait;

use crate::error::Result;

/// Contract for the key-value store holding flag data.
///
/// Any store offering string get/set/delete, an atomic conditional set, and
/// pattern key enumeration can back the registry. Implementations are shared
/// long-lived clients; every call is a single atomic key operation on the
/// wire. The registry is handed a store at construction, so tests can
/// substitute [`MemoryFlagStore`](crate::MemoryFlagStore) for the networked
/// backend.
#[async_trait]
pub trait FlagStore: Send + Sync {
	/// Fetch the value stored under `key`. Absent keys are `None`.
	async fn get(&self, key: &str) -> Result<Option<String>>;

	/// Store `value` under `key`, overwriting any previous value.
	async fn set(&self, key: &str, value: &str) -> Result<()>;

	/// Store `value` under `key` only if the key is absent.
	///
	/// Returns `true` if the value was written and `false` if the key
	/// already existed. The check and the write are a single atomic store
	/// operation, so two concurrent callers cannot both observe "absent".
	async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool>;

	/// Remove `key`, returning how many keys were actually removed.
	async fn delete(&self, key: &str) -> Result<u64>;

	/// Enumerate keys matching `pattern` (`*` for all keys).
	///
	/// Enumeration order follows the store and is not guaranteed stable
	/// across calls.
	async fn keys(&self, pattern: &str) -> Result<Vec<String>>;
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory flag store for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::store::FlagStore;

/// In-memory [`FlagStore`] used as a stand-in for the networked backend.
///
/// Beyond the plain map it carries failure-injection switches so callers can
/// exercise unavailable-store paths: [`set_broken`](Self::set_broken) fails
/// every operation, and [`mark_unreadable`](Self::mark_unreadable) fails
/// reads of a single key (the listing skip path). A write counter exposes
/// whether an operation actually wrote, which is how the idempotent-update
/// short-circuit is asserted.
///
/// Key enumeration supports the `*` pattern (all keys) and literal patterns
/// (exact match); that is all the registry uses.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
	entries: Mutex<HashMap<String, String>>,
	unreadable: Mutex<HashSet<String>>,
	broken: AtomicBool,
	writes: AtomicU64,
}

impl MemoryFlagStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Make every subsequent operation fail with [`StoreError::Unavailable`].
	pub fn set_broken(&self, broken: bool) {
		self.broken.store(broken, Ordering::SeqCst);
	}

	/// Make reads of `key` fail while leaving the rest of the store healthy.
	pub fn mark_unreadable(&self, key: impl Into<String>) {
		self.lock_unreadable().insert(key.into());
	}

	/// Number of writes (set, conditional set, delete) performed so far.
	pub fn write_count(&self) -> u64 {
		self.writes.load(Ordering::SeqCst)
	}

	fn check_available(&self) -> Result<()> {
		if self.broken.load(Ordering::SeqCst) {
			return Err(StoreError::Unavailable("store marked broken".to_string()));
		}
		Ok(())
	}

	fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
		self.entries.lock().unwrap_or_else(|e| e.into_inner())
	}

	fn lock_unreadable(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
		self.unreadable.lock().unwrap_or_else(|e| e.into_inner())
	}
}

#[async_trait]
impl FlagStore for MemoryFlagStore {
	async fn get(&self, key: &str) -> Result<Option<String>> {
		self.check_available()?;
		if self.lock_unreadable().contains(key) {
			return Err(StoreError::Unavailable(format!(
				"key {key} marked unreadable"
			)));
		}
		Ok(self.lock_entries().get(key).cloned())
	}

	async fn set(&self, key: &str, value: &str) -> Result<()> {
		self.check_available()?;
		self.lock_entries().insert(key.to_string(), value.to_string());
		self.writes.fetch_add(1, Ordering::SeqCst);
		Ok(())
	}

	async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
		self.check_available()?;
		let mut entries = self.lock_entries();
		if entries.contains_key(key) {
			return Ok(false);
		}
		entries.insert(key.to_string(), value.to_string());
		self.writes.fetch_add(1, Ordering::SeqCst);
		Ok(true)
	}

	async fn delete(&self, key: &str) -> Result<u64> {
		self.check_available()?;
		let removed = self.lock_entries().remove(key);
		if removed.is_some() {
			self.writes.fetch_add(1, Ordering::SeqCst);
			Ok(1)
		} else {
			Ok(0)
		}
	}

	async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
		self.check_available()?;
		let entries = self.lock_entries();
		let keys = if pattern == "*" {
			entries.keys().cloned().collect()
		} else {
			entries.keys().filter(|k| *k == pattern).cloned().collect()
		};
		Ok(keys)
	}
}

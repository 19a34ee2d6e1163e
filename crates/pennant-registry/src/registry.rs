// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The five registry operations.

use std::sync::Arc;

use tracing::instrument;

use pennant_core::{decode_enabled, encode_enabled, Flag};
use pennant_store::FlagStore;

use crate::error::{RegistryError, Result};

/// Result of an update that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
	/// The stored value differed and was overwritten.
	Updated,
	/// The stored value already matched the request; nothing was written.
	/// Carries the raw stored string for the confirmation message.
	AlreadySet { raw: String },
}

/// Stateless registry translating flag semantics into store operations.
///
/// Holds nothing but the injected store handle; every operation re-reads
/// store state, so any number of registry instances may serve one store.
#[derive(Clone)]
pub struct FlagRegistry {
	store: Arc<dyn FlagStore>,
}

impl FlagRegistry {
	pub fn new(store: Arc<dyn FlagStore>) -> Self {
		Self { store }
	}

	/// Enumerate every flag in the store.
	///
	/// Listing is best-effort: keys whose value fetch fails are logged and
	/// skipped rather than aborting the whole listing. Only a failure of the
	/// key enumeration itself fails the operation.
	#[instrument(skip(self))]
	pub async fn list(&self) -> Result<Vec<Flag>> {
		let keys = self.store.keys("*").await?;

		let mut flags = Vec::with_capacity(keys.len());
		for key in keys {
			match self.store.get(&key).await {
				Ok(Some(raw)) => flags.push(Flag::new(key, decode_enabled(&raw))),
				Ok(None) => {
					tracing::warn!(key = %key, "flag vanished during listing, skipping");
				}
				Err(e) => {
					tracing::warn!(key = %key, error = %e, "failed to fetch flag value, skipping");
				}
			}
		}

		Ok(flags)
	}

	/// Create a flag under a name not yet present in the store.
	///
	/// An absent `enabled` defaults to disabled. The existence check and the
	/// write are one atomic conditional set, so concurrent creates for the
	/// same name cannot both succeed; the loser observes [`RegistryError::Conflict`].
	#[instrument(skip(self))]
	pub async fn create(&self, name: Option<&str>, enabled: Option<bool>) -> Result<Flag> {
		let name = match name {
			Some(name) if !name.is_empty() => name,
			_ => return Err(RegistryError::MissingName),
		};
		let enabled = enabled.unwrap_or(false);

		let created = self
			.store
			.set_if_absent(name, encode_enabled(enabled))
			.await?;
		if !created {
			tracing::warn!(name = %name, "not creating, feature already exists");
			return Err(RegistryError::Conflict(name.to_string()));
		}

		tracing::info!(name = %name, enabled, "created feature flag");
		Ok(Flag::new(name, enabled))
	}

	/// Fetch one flag by name.
	#[instrument(skip(self))]
	pub async fn get(&self, name: &str) -> Result<Flag> {
		match self.store.get(name).await? {
			Some(raw) => Ok(Flag::new(name, decode_enabled(&raw))),
			None => Err(RegistryError::NotFound(name.to_string())),
		}
	}

	/// Set an existing flag to `enabled`.
	///
	/// `enabled` is mandatory here, unlike create: an update without it is
	/// rejected before any store call. When the stored value already matches,
	/// the update is a read-only no-op reported as
	/// [`UpdateOutcome::AlreadySet`].
	#[instrument(skip(self))]
	pub async fn update(&self, name: &str, enabled: Option<bool>) -> Result<UpdateOutcome> {
		let enabled = enabled.ok_or(RegistryError::MissingEnabledField)?;

		let raw = self
			.store
			.get(name)
			.await?
			.ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

		if decode_enabled(&raw) == enabled {
			tracing::info!(name = %name, enabled, "feature already set, skipping write");
			return Ok(UpdateOutcome::AlreadySet { raw });
		}

		self.store.set(name, encode_enabled(enabled)).await?;
		tracing::info!(name = %name, enabled, "updated feature flag");
		Ok(UpdateOutcome::Updated)
	}

	/// Remove a flag, distinguishing "deleted" from "nothing to delete".
	#[instrument(skip(self))]
	pub async fn delete(&self, name: &str) -> Result<()> {
		let removed = self.store.delete(name).await?;
		if removed == 0 {
			return Err(RegistryError::NotFound(name.to_string()));
		}

		tracing::info!(name = %name, "deleted feature flag");
		Ok(())
	}
}

impl std::fmt::Debug for FlagRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FlagRegistry").finish_non_exhaustive()
	}
}

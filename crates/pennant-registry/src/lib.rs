// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Feature flag registry for Pennant.
//!
//! The registry is the stateless logic layer between the HTTP surface and
//! the key-value store: five operations (list, create, get, update, delete)
//! that translate flag semantics into store calls and fold the results into
//! a small outcome taxonomy.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pennant_registry::FlagRegistry;
//! use pennant_store::MemoryFlagStore;
//!
//! # tokio_test::block_on(async {
//! let registry = FlagRegistry::new(Arc::new(MemoryFlagStore::new()));
//! registry.create(Some("dark-mode"), Some(true)).await?;
//! assert!(registry.get("dark-mode").await?.enabled);
//! # Ok::<(), pennant_registry::RegistryError>(())
//! # }).unwrap();
//! ```

pub mod error;
pub mod registry;

pub use error::{RegistryError, Result};
pub use registry::{FlagRegistry, UpdateOutcome};

// Re-export core types for convenience
pub use pennant_core::Flag;

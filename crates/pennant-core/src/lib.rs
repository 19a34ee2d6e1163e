// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Pennant feature flag registry.
//!
//! This crate provides the flag type shared by the registry and the HTTP
//! server, together with the rules for encoding a flag's enabled state into
//! the string representation held by the backing key-value store.
//!
//! # Example
//!
//! ```
//! use pennant_core::{decode_enabled, encode_enabled, Flag};
//!
//! let flag = Flag::new("dark-mode", true);
//! let stored = encode_enabled(flag.enabled);
//! assert_eq!(stored, "1");
//! assert!(decode_enabled(stored));
//! ```

pub mod encoding;
pub mod flag;

pub use encoding::{decode_enabled, encode_enabled, DISABLED, ENABLED};
pub use flag::Flag;

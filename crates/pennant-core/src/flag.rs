// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The flag type.

use serde::{Deserialize, Serialize};

/// A named boolean toggle.
///
/// The name doubles as the key under which the flag is stored; it must be
/// non-empty. There is no other metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
	pub name: String,
	pub enabled: bool,
}

impl Flag {
	pub fn new(name: impl Into<String>, enabled: bool) -> Self {
		Self {
			name: name.into(),
			enabled,
		}
	}
}

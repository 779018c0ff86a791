// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Failures of the fallible surfaces around classification.
///
/// Classification itself never fails; these errors come only from loading or
/// validating a [`ClassifierConfig`](crate::ClassifierConfig) and from
/// converting raw result codes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid classifier config: {0}")]
	Config(#[from] serde_json::Error),

	#[error("classifier config disables every boolean spelling")]
	NoBooleanSpellings,

	#[error("invalid numeric field code {0}, expected 0, 1 or 2")]
	InvalidNumericCode(u8),
}

pub type Result<T> = std::result::Result<T, Error>;

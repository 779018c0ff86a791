// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
	boolean::BooleanSpellings,
	error::{Error, Result},
};

/// Classification policy applied by a [`Classifier`](crate::Classifier).
///
/// The default matches [`field_bool`](crate::field_bool) and
/// [`field_numeric`](crate::field_numeric): no trimming, only `true`/`false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
	/// Strip leading and trailing ASCII whitespace before classifying
	pub trim: bool,
	/// Spelling families recognized as boolean literals
	pub boolean: BooleanSpellings,
}

impl ClassifierConfig {
	pub fn new(trim: bool, boolean: BooleanSpellings) -> Self {
		Self {
			trim,
			boolean,
		}
	}

	pub fn with_trim(mut self, trim: bool) -> Self {
		self.trim = trim;
		self
	}

	pub fn with_boolean(mut self, boolean: BooleanSpellings) -> Self {
		self.boolean = boolean;
		self
	}

	/// Parses a config from JSON; missing fields keep their defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json)?;
		debug!(trim = config.trim, boolean = ?config.boolean, "loaded classifier config");
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.boolean.is_empty() {
			warn!("classifier config disables every boolean spelling");
			return Err(Error::NoBooleanSpellings);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default() {
		let config = ClassifierConfig::default();
		assert!(!config.trim);
		assert_eq!(config.boolean, BooleanSpellings::words());
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_from_json_empty_object() {
		let config = ClassifierConfig::from_json("{}").unwrap();
		assert_eq!(config, ClassifierConfig::default());
	}

	#[test]
	fn test_from_json_partial() {
		let config = ClassifierConfig::from_json(r#"{"trim": true, "boolean": {"digits": true}}"#).unwrap();
		assert!(config.trim);
		assert!(config.boolean.words);
		assert!(config.boolean.digits);
		assert!(!config.boolean.letters);
	}

	#[test]
	fn test_from_json_unknown_field() {
		let result = ClassifierConfig::from_json(r#"{"strip": true}"#);
		assert!(matches!(result, Err(Error::Config(_))));

		let result = ClassifierConfig::from_json(r#"{"boolean": {"maybe": true}}"#);
		assert!(matches!(result, Err(Error::Config(_))));
	}

	#[test]
	fn test_from_json_malformed() {
		assert!(matches!(ClassifierConfig::from_json("{"), Err(Error::Config(_))));
		assert!(matches!(ClassifierConfig::from_json(r#"{"trim": "yes"}"#), Err(Error::Config(_))));
	}

	#[test]
	fn test_validate_no_spellings() {
		let config = ClassifierConfig::default().with_boolean(BooleanSpellings::none());
		assert!(matches!(config.validate(), Err(Error::NoBooleanSpellings)));
	}

	#[test]
	fn test_builder() {
		let config = ClassifierConfig::default().with_trim(true).with_boolean(BooleanSpellings::all());
		assert_eq!(config, ClassifierConfig::new(true, BooleanSpellings::all()));
	}

	#[test]
	fn test_json_round_trip() {
		let config = ClassifierConfig::new(true, BooleanSpellings::all());
		let json = serde_json::to_string(&config).unwrap();
		assert_eq!(ClassifierConfig::from_json(&json).unwrap(), config);
	}
}
